use std::io::{BufRead, ErrorKind, Write};
use tictactoe_engine::game::{Board, FirstPlayerMode, Mark};

/// Parses a 1-9 position entered by the player into a 0-based cell index.
pub fn parse_cell(raw: &str) -> Result<usize, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a number from 1 to 9".to_string());
    }
    let position: usize = trimmed
        .parse()
        .map_err(|_| "Please enter a number from 1 to 9".to_string())?;
    if !(1..=9).contains(&position) {
        return Err("Out of range, choose 1-9".to_string());
    }
    Ok(position - 1)
}

pub fn parse_mark_choice(raw: &str) -> Result<Mark, String> {
    match raw.trim().to_uppercase().as_str() {
        "X" => Ok(Mark::X),
        "O" => Ok(Mark::O),
        _ => Err("Invalid choice, enter X or O".to_string()),
    }
}

pub fn parse_first_player_choice(raw: &str) -> Result<FirstPlayerMode, String> {
    match raw.trim().to_lowercase().as_str() {
        "y" | "you" => Ok(FirstPlayerMode::Human),
        "b" | "bot" | "ai" => Ok(FirstPlayerMode::Bot),
        "r" | "random" => Ok(FirstPlayerMode::Random),
        _ => Err("Invalid choice, type Y, B or R".to_string()),
    }
}

pub fn parse_yes_no(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "y" | "yes")
}

fn read_line(prompt: &str) -> std::io::Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    read_line_from(&mut std::io::stdin().lock())
}

/// A zero-byte read means the input is closed; reporting it as an error
/// stops the prompt loop instead of re-prompting forever.
fn read_line_from(reader: &mut impl BufRead) -> std::io::Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(std::io::Error::from(ErrorKind::UnexpectedEof));
    }
    Ok(line)
}

/// Prompts until the reader produces a valid value.
fn prompt_until<T>(prompt: &str, parse: impl Fn(&str) -> Result<T, String>) -> std::io::Result<T> {
    loop {
        let line = read_line(prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(message) => println!("{}", message),
        }
    }
}

pub fn read_human_move(board: &Board) -> std::io::Result<usize> {
    prompt_until("Your move (1-9): ", |raw| {
        let cell = parse_cell(raw)?;
        if board.cells[cell] != Mark::Empty {
            return Err("That cell is taken, choose another".to_string());
        }
        Ok(cell)
    })
}

pub fn read_mark_choice() -> std::io::Result<Mark> {
    prompt_until("Choose your symbol (X/O): ", parse_mark_choice)
}

pub fn read_first_player_choice() -> std::io::Result<FirstPlayerMode> {
    prompt_until(
        "Who goes first? (Y)ou / (B)ot / (R)andom: ",
        parse_first_player_choice,
    )
}

pub fn read_play_again() -> std::io::Result<bool> {
    let line = read_line("\nPlay again? (Y/N): ")?;
    Ok(parse_yes_no(&line))
}
