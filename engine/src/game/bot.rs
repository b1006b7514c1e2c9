use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{BotType, Mark};

const WIN_SCORE: i32 = 10;

/// Center, then corners, then edges. Filtering this list to empty cells
/// keeps the candidate order fixed, which both helps pruning and pins down
/// which of several equally scored moves gets picked.
const MOVE_PREFERENCE: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

pub fn calculate_move(
    bot_type: BotType,
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    rng: &mut SessionRng,
) -> Result<usize, String> {
    validate_roles(bot_mark, opponent_mark)?;

    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => calculate_minimax_move(board, bot_mark, opponent_mark),
    }
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, String> {
    let available_moves = board.get_available_moves();
    if available_moves.is_empty() {
        return Err("No available moves on the board".to_string());
    }
    let idx = rng.random_range(0..available_moves.len());
    Ok(available_moves[idx])
}

/// Picks the optimal cell for `bot_mark`. The board is mutated during the
/// search but is always restored before returning; net mutation is zero.
pub fn calculate_minimax_move(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
) -> Result<usize, String> {
    validate_roles(bot_mark, opponent_mark)?;

    let available_moves = board.get_available_moves();
    if available_moves.is_empty() {
        return Err("No available moves on the board".to_string());
    }

    // Win in one if possible, otherwise block an opponent win in one.
    if let Some(cell) = find_winning_move(board, bot_mark, &available_moves) {
        return Ok(cell);
    }
    if let Some(cell) = find_winning_move(board, opponent_mark, &available_moves) {
        return Ok(cell);
    }

    let (_, best_move) = minimax(
        board,
        bot_mark,
        opponent_mark,
        0,
        i32::MIN,
        i32::MAX,
        true,
    );

    // The search returns a move whenever empty cells exist; the fallback
    // only guards against a violated invariant.
    Ok(best_move.unwrap_or(available_moves[0]))
}

fn validate_roles(bot_mark: Mark, opponent_mark: Mark) -> Result<(), String> {
    if bot_mark == Mark::Empty || opponent_mark == Mark::Empty {
        return Err("Empty is not a playable mark".to_string());
    }
    if bot_mark == opponent_mark {
        return Err("Bot and opponent must use different marks".to_string());
    }
    Ok(())
}

fn find_winning_move(board: &mut Board, mark: Mark, moves: &[usize]) -> Option<usize> {
    for &cell in moves {
        board.cells[cell] = mark;
        let winner = board.winner();
        board.cells[cell] = Mark::Empty;

        if winner == Some(mark) {
            return Some(cell);
        }
    }
    None
}

fn ordered_moves(board: &Board) -> Vec<usize> {
    MOVE_PREFERENCE
        .into_iter()
        .filter(|&cell| board.cells[cell] == Mark::Empty)
        .collect()
}

/// Depth-aware scoring: a win at depth d is worth `10 - d`, a loss `d - 10`.
/// Shallow wins beat deep wins and deep losses beat shallow ones, so the bot
/// finishes as fast as possible and stalls lost lines as long as possible.
fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    is_maximizing: bool,
) -> (i32, Option<usize>) {
    match board.winner() {
        Some(winner) if winner == bot_mark => return (WIN_SCORE - depth, None),
        Some(_) => return (depth - WIN_SCORE, None),
        None => {}
    }
    if board.is_full() {
        return (0, None);
    }

    let mut best_move = None;

    if is_maximizing {
        let mut best_score = i32::MIN;
        for cell in ordered_moves(board) {
            board.cells[cell] = bot_mark;
            let (score, _) = minimax(
                board,
                bot_mark,
                opponent_mark,
                depth + 1,
                alpha,
                beta,
                false,
            );
            board.cells[cell] = Mark::Empty;

            if score > best_score {
                best_score = score;
                best_move = Some(cell);
            }
            alpha = alpha.max(best_score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = i32::MAX;
        for cell in ordered_moves(board) {
            board.cells[cell] = opponent_mark;
            let (score, _) = minimax(
                board,
                bot_mark,
                opponent_mark,
                depth + 1,
                alpha,
                beta,
                true,
            );
            board.cells[cell] = Mark::Empty;

            if score < best_score {
                best_score = score;
                best_move = Some(cell);
            }
            beta = beta.min(best_score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }
}
