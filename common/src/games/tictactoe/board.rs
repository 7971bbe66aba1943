use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use crate::error::EngineError;
use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

/// Every cell in row-major scan order.
pub const ALL_POSITIONS: [Position; BOARD_SIZE * BOARD_SIZE] = [
    Position::new(0, 0),
    Position::new(0, 1),
    Position::new(0, 2),
    Position::new(1, 0),
    Position::new(1, 1),
    Position::new(1, 2),
    Position::new(2, 0),
    Position::new(2, 1),
    Position::new(2, 2),
];

/// 3x3 grid of marks, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: [[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Places `mark` on an empty cell.
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), EngineError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(EngineError::InvalidCell { row, col });
        }
        if mark == Mark::Empty {
            return Err(EngineError::InvalidMark);
        }
        if self.cells[row][col] != Mark::Empty {
            return Err(EngineError::CellOccupied { row, col });
        }

        self.cells[row][col] = mark;
        Ok(())
    }

    /// Cells outside the board are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == mark)
            .count()
    }

    /// Mark due to move next if play alternated from an empty board with X first.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    /// Hypothetically places `mark`; the cell returns to empty when the guard drops.
    pub(crate) fn place_scoped(&mut self, position: Position, mark: Mark) -> ScopedPlacement<'_> {
        debug_assert!(self.is_empty(position.row, position.col));
        self.cells[position.row][position.col] = mark;
        ScopedPlacement {
            board: self,
            position,
        }
    }

    /// Multi-line grid used in logs.
    pub fn pretty(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

pub struct ScopedPlacement<'a> {
    board: &'a mut Board,
    position: Position,
}

impl Deref for ScopedPlacement<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for ScopedPlacement<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for ScopedPlacement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.position.row][self.position.col] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in cells {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses `XO_/_X_/___`; `/`, `|` and whitespace are ignored, `_` or `.` is an empty cell.
impl FromStr for Board {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect();

        if symbols.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(EngineError::InvalidBoard(format!(
                "expected 9 cells, found {}",
                symbols.len()
            )));
        }

        let mut board = Board::new();
        for (i, symbol) in symbols.into_iter().enumerate() {
            board.cells[i / BOARD_SIZE][i % BOARD_SIZE] = match symbol {
                'x' | 'X' => Mark::X,
                'o' | 'O' => Mark::O,
                '_' | '.' => Mark::Empty,
                other => {
                    return Err(EngineError::InvalidBoard(format!(
                        "unexpected cell symbol '{}'",
                        other
                    )));
                }
            };
        }
        Ok(board)
    }
}
