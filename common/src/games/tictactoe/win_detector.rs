use super::board::Board;
use super::types::{GameStatus, WinningLine};

/// Rows, then columns, then the two diagonals. Detection reports the first match.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a].mark()?;
        (cells[a] == cells[b] && cells[a] == cells[c]).then(|| WinningLine::new(mark, [a, b, c]))
    })
}

pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(line) = check_win_with_line(board) {
        return GameStatus::Won(line.mark);
    }
    if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}
