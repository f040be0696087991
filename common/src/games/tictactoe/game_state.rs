use crate::error::Result;
use super::board::Board;
use super::types::{GameStatus, Mark, MoveRecord, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// One game: the board, whose mark goes next and the moves played so far.
///
/// The status is never stored; it is recomputed from the board on demand.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    board: Board,
    first_mark: Mark,
    current_mark: Mark,
    history: Vec<MoveRecord>,
}

impl TicTacToeGameState {
    pub fn new(first_mark: Mark) -> Self {
        Self {
            board: Board::new(),
            first_mark,
            current_mark: first_mark,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn first_mark(&self) -> Mark {
        self.first_mark
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    pub fn status(&self) -> GameStatus {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    /// Places the current mark at `index`. Nothing changes when the cell is
    /// rejected; the turn passes only while the game is still in progress.
    pub fn place_mark(&mut self, index: usize) -> Result<GameStatus> {
        let mark = self.current_mark;
        self.board = self.board.place(index, mark)?;
        self.history.push(MoveRecord { index, mark });

        let status = self.status();
        if status == GameStatus::InProgress {
            self.current_mark = mark.opponent();
        }
        Ok(status)
    }
}
