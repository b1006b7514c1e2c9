mod config;
mod input;
mod render;

use clap::Parser;
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider};
use tictactoe_engine::game::{
    BotType, FirstPlayerMode, GameState, GameStatus, Mark, SessionRng, calculate_move,
};
use tictactoe_engine::{log, logger};

use config::{Config, get_config_manager};
use render::render_board;

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Fixed RNG seed for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Bot difficulty: "random" or "minimax".
    #[arg(long)]
    bot: Option<String>,
}

fn parse_bot_type(raw: &str) -> Result<BotType, String> {
    match raw.to_lowercase().as_str() {
        "random" => Ok(BotType::Random),
        "minimax" => Ok(BotType::Minimax),
        other => Err(format!("Unknown bot type: {}", other)),
    }
}

fn resolve_first_mark(
    mode: FirstPlayerMode,
    human_mark: Mark,
    bot_mark: Mark,
    rng: &mut SessionRng,
) -> Mark {
    match mode {
        FirstPlayerMode::Human => human_mark,
        FirstPlayerMode::Bot => bot_mark,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                human_mark
            } else {
                bot_mark
            }
        }
    }
}

fn play_once(bot_type: BotType, config: &mut Config, rng: &mut SessionRng) -> Result<(), String> {
    let human_mark = input::read_mark_choice().map_err(|e| e.to_string())?;
    let bot_mark = human_mark
        .opponent()
        .ok_or_else(|| "Human mark must be X or O".to_string())?;
    let mode = input::read_first_player_choice().map_err(|e| e.to_string())?;

    // Remember the picks for the next session.
    config.human_mark = human_mark;
    config.first_player = mode;

    let first_mark = resolve_first_mark(mode, human_mark, bot_mark, rng);
    let mut state = GameState::new(first_mark);

    println!("\nBoard positions are numbered 1-9 as shown:");
    println!("{}", render_board(&state.board));

    while state.status == GameStatus::InProgress {
        println!("{}", render_board(&state.board));

        if state.current_mark == human_mark {
            println!("Your turn.");
            let cell = input::read_human_move(&state.board).map_err(|e| e.to_string())?;
            state.place_mark(human_mark, cell)?;
        } else {
            let cell = calculate_move(bot_type, &mut state.board, bot_mark, human_mark, rng)?;
            state.place_mark(bot_mark, cell)?;
            if let Some(played) = state.last_move {
                log!("Bot plays cell {}", played + 1);
            }
        }
    }

    println!("{}", render_board(&state.board));
    match state.winner_mark() {
        Some(mark) if mark == human_mark => println!("You win! (That's rare.)"),
        Some(_) => println!("Bot wins!"),
        None => println!("It's a draw!"),
    }

    Ok(())
}

fn run_session(
    config: &mut Config,
    rng: &mut SessionRng,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        play_once(config.bot, config, rng)?;
        if !input::read_play_again()? {
            println!("Thanks for playing!");
            return Ok(());
        }
    }
}

/// Saves the config regardless of how the session ended, then reports the
/// session outcome.
fn save_config_and_finish(
    config_manager: &ConfigManager<FileContentConfigProvider, Config>,
    config: &Config,
    session_result: Result<(), Box<dyn std::error::Error>>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = config_manager.set_config(config) {
        log!("Failed to save config: {}", e);
    }
    session_result
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager();
    let mut config = config_manager.get_config()?;

    if let Some(raw) = args.bot.as_deref() {
        config.bot = parse_bot_type(raw)?;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed: {}", rng.seed());

    println!("=== Tic-Tac-Toe (Unbeatable Bot) ===");

    let session_result = run_session(&mut config, &mut rng);

    save_config_and_finish(&config_manager, &config, session_result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bot_type() {
        assert_eq!(parse_bot_type("minimax").unwrap(), BotType::Minimax);
        assert_eq!(parse_bot_type("Random").unwrap(), BotType::Random);
        assert!(parse_bot_type("perfect").is_err());
    }

    #[test]
    fn test_resolve_first_mark_fixed_modes() {
        let mut rng = SessionRng::new(1);
        assert_eq!(
            resolve_first_mark(FirstPlayerMode::Human, Mark::O, Mark::X, &mut rng),
            Mark::O
        );
        assert_eq!(
            resolve_first_mark(FirstPlayerMode::Bot, Mark::O, Mark::X, &mut rng),
            Mark::X
        );
    }

    #[test]
    fn test_config_is_saved_even_when_session_fails() {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_cli_config_{}.yaml", random_number));
        let path = path.to_str().unwrap().to_string();

        let manager: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&path);
        let config = Config {
            human_mark: Mark::O,
            first_player: FirstPlayerMode::Bot,
            bot: BotType::Minimax,
            seed: Some(5),
        };

        let failure: Result<(), Box<dyn std::error::Error>> = Err("input closed".into());
        assert!(save_config_and_finish(&manager, &config, failure).is_err());

        let reloaded: ConfigManager<FileContentConfigProvider, Config> =
            ConfigManager::from_yaml_file(&path);
        assert_eq!(reloaded.get_config().unwrap(), config);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_resolve_first_mark_random_is_seed_stable() {
        let pick = |seed| {
            let mut rng = SessionRng::new(seed);
            resolve_first_mark(FirstPlayerMode::Random, Mark::X, Mark::O, &mut rng)
        };
        assert_eq!(pick(7), pick(7));
    }
}
