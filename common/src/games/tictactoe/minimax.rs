use super::board::Board;
use super::types::{GameStatus, Mark};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 10;

/// Exhaustive minimax value of `board` from `bot_mark`'s point of view.
///
/// `depth` is the number of plies already hypothesized below the real position.
/// A bot win scores `10 - depth` and an opponent win `depth - 10`, so sooner wins
/// and later losses are preferred; a full board with no line scores `0`.
/// `maximizing` selects whose turn it is: the bot's when true, the opponent's
/// otherwise. Every child is searched on its own copy of the board.
pub fn score(board: &Board, depth: usize, maximizing: bool, bot_mark: Mark) -> i32 {
    let depth_score = depth as i32;
    match evaluate(board) {
        GameStatus::Won(mark) if mark == bot_mark => return WIN_SCORE - depth_score,
        GameStatus::Won(_) => return depth_score - WIN_SCORE,
        GameStatus::Drawn => return 0,
        GameStatus::InProgress => {}
    }

    let mover = if maximizing { bot_mark } else { bot_mark.opponent() };
    let child_scores = board.empty_cells().into_iter().filter_map(|index| {
        let child = board.place(index, mover).ok()?;
        Some(score(&child, depth + 1, !maximizing, bot_mark))
    });

    let best = if maximizing {
        child_scores.max()
    } else {
        child_scores.min()
    };

    // An in-progress board always has an empty cell.
    best.unwrap_or(0)
}
