mod board;
mod bot;
mod session_rng;
mod state;
mod types;

pub use board::{Board, CELL_COUNT, WIN_LINES};
pub use bot::{calculate_minimax_move, calculate_move};
pub use session_rng::SessionRng;
pub use state::GameState;
pub use types::{BotType, FirstPlayerMode, GameStatus, Mark};
