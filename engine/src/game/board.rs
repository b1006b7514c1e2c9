use super::types::Mark;

pub const CELL_COUNT: usize = 9;

/// Rows, columns, then diagonals. The scan order is fixed so that `winner`
/// is deterministic.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn winner(&self) -> Option<Mark> {
        for [a, b, c] in WIN_LINES {
            let mark = self.cells[a];
            if mark != Mark::Empty && self.cells[b] == mark && self.cells[c] == mark {
                return Some(mark);
            }
        }
        None
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn get_available_moves(&self) -> Vec<usize> {
        let mut moves = Vec::new();
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(i);
            }
        }
        moves
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
