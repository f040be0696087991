use std::fmt;

use crate::error::{GameError, Result};
use super::types::{CELL_COUNT, Cell, Mark};

/// The 3x3 grid, cells addressed row-major by index `0..9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// `None` for an index outside the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index).is_some_and(Cell::is_empty)
    }

    /// Returns a copy of the board with `mark` placed at `index`.
    pub fn place(&self, index: usize, mark: Mark) -> Result<Board> {
        match self.get(index) {
            None => Err(GameError::InvalidMove {
                index,
                reason: "position out of bounds",
            }),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = mark.into();
                Ok(next)
            }
            Some(_) => Err(GameError::InvalidMove {
                index,
                reason: "cell is already marked",
            }),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let rendered: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Empty => format!(" {} ", row * 3 + col),
                    Cell::X => " X ".to_string(),
                    Cell::O => " O ".to_string(),
                })
                .collect();
            writeln!(f, "{}", rendered.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from(pattern: &str) -> Board {
    let mut cells = [Cell::Empty; CELL_COUNT];
    let symbols: Vec<char> = pattern.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(symbols.len(), CELL_COUNT, "pattern must describe 9 cells");
    for (cell, symbol) in cells.iter_mut().zip(symbols) {
        *cell = match symbol {
            'X' => Cell::X,
            'O' => Cell::O,
            '_' | '.' => Cell::Empty,
            other => panic!("unexpected symbol {}", other),
        };
    }
    Board::from_cells(cells)
}
