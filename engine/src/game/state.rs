use super::board::{Board, CELL_COUNT};
use super::types::{GameStatus, Mark};

/// Turn-taking wrapper around the board, shared by the frontend and the
/// bot tests. The search engine itself only ever sees the raw `Board`.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
    pub moves_made: usize,
}

impl GameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            current_mark: first_mark,
            status: GameStatus::InProgress,
            last_move: None,
            moves_made: 0,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if cell >= CELL_COUNT {
            return Err("Cell out of bounds".to_string());
        }

        if self.board.cells[cell] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.cells[cell] = mark;
        self.last_move = Some(cell);
        self.moves_made += 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winner_mark(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = self.board.winner() {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
