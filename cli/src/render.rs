use tictactoe_engine::game::{Board, Mark};

/// Renders the grid with 1-based position numbers in empty cells, matching
/// the numbering the input prompt asks for.
pub fn render_board(board: &Board) -> String {
    let cell = |i: usize| -> char {
        match board.cells[i] {
            Mark::Empty => char::from_digit(i as u32 + 1, 10).unwrap_or('?'),
            mark => mark.as_char(),
        }
    };

    format!(
        "\n {} | {} | {}\n---+---+---\n {} | {} | {}\n---+---+---\n {} | {} | {}\n",
        cell(0),
        cell(1),
        cell(2),
        cell(3),
        cell(4),
        cell(5),
        cell(6),
        cell(7),
        cell(8)
    )
}
