use crate::error::{GameError, Result};
use crate::games::RandomSource;
use crate::log_debug;
use super::board::Board;
use super::minimax::score;
use super::settings::DifficultyConfig;
use super::types::Mark;

/// The minimax-best cell for `bot_mark`. Ties go to the lowest index.
pub fn best_move(board: &Board, bot_mark: Mark) -> Result<usize> {
    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }

    let mut best = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        let candidate = board.place(index, bot_mark)?;
        let candidate_score = score(&candidate, 0, false, bot_mark);
        log_debug!("{} at {} scores {}", bot_mark, index, candidate_score);

        if candidate_score > best_score {
            best_score = candidate_score;
            best = Some(index);
        }
    }

    best.ok_or(GameError::NoLegalMove)
}

/// Picks the computer's move: the best one, unless the difficulty roll says
/// to play a uniformly random free cell instead.
pub fn choose_move(
    board: &Board,
    bot_mark: Mark,
    difficulty: &DifficultyConfig,
    rng: &mut impl RandomSource,
) -> Result<usize> {
    let best = best_move(board, bot_mark)?;

    let roll = rng.random_unit();
    if roll < difficulty.random_move_probability {
        let available_moves = board.empty_cells();
        let random = available_moves
            .get(rng.random_index(available_moves.len()))
            .copied()
            .ok_or(GameError::NoLegalMove)?;
        log_debug!(
            "{} plays random cell {} instead of {} (roll {:.3})",
            bot_mark,
            random,
            best,
            roll
        );
        return Ok(random);
    }

    Ok(best)
}


#[cfg(test)]
mod tests {
    use super::test_rng::{OutOfRangeRng, ScriptedRng};
    use super::*;
    use crate::games::SessionRng;
    use crate::games::tictactoe::board::board_from;
    use crate::games::tictactoe::types::GameStatus;
    use crate::games::tictactoe::win_detector::evaluate;

    #[test]
    fn test_takes_immediate_win_over_block() {
        let board = board_from("XX_ OO_ ___");
        assert_eq!(best_move(&board, Mark::O), Ok(5));
    }

    #[test]
    fn test_blocks_when_no_win_available() {
        let board = board_from("XX_ _O_ ___");
        assert_eq!(best_move(&board, Mark::O), Ok(2));
    }

    #[test]
    fn test_works_for_either_mark() {
        let board = board_from("OO_ XX_ ___");
        assert_eq!(best_move(&board, Mark::X), Ok(5));
    }

    #[test]
    fn test_full_board_has_no_legal_move() {
        let board = board_from("XOX XOO OXX");
        assert_eq!(best_move(&board, Mark::O), Err(GameError::NoLegalMove));
        let mut rng = ScriptedRng::new(0.0, 0, true);
        assert_eq!(
            choose_move(&board, Mark::O, &DifficultyConfig::perfect(), &mut rng),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_ties_resolve_to_lowest_index() {
        // Every opening draws under perfect play.
        let board = Board::new();
        for index in 0..9 {
            let opened = board.place(index, Mark::O).unwrap();
            assert_eq!(score(&opened, 0, false, Mark::O), 0);
        }
        assert_eq!(best_move(&board, Mark::O), Ok(0));
    }

    #[test]
    fn test_zero_probability_never_rolls_random_cell() {
        let board = board_from("XX_ OO_ ___");
        let mut rng = ScriptedRng::new(0.0, 0, true);
        let chosen = choose_move(&board, Mark::O, &DifficultyConfig::perfect(), &mut rng);
        assert_eq!(chosen, Ok(5));
        assert_eq!(rng.index_draws, 0);
    }

    #[test]
    fn test_roll_below_probability_picks_random_cell() {
        let board = board_from("XX_ OO_ ___");
        // Empty cells are [2, 5, 6, 7, 8]; index 3 selects cell 7.
        let mut rng = ScriptedRng::new(0.1, 3, true);
        let difficulty = DifficultyConfig::new(0.2).unwrap();
        assert_eq!(choose_move(&board, Mark::O, &difficulty, &mut rng), Ok(7));
        assert_eq!(rng.unit_draws, 1);
        assert_eq!(rng.index_draws, 1);
    }

    #[test]
    fn test_roll_at_or_above_probability_keeps_best() {
        let board = board_from("XX_ OO_ ___");
        let mut rng = ScriptedRng::new(0.2, 0, true);
        let difficulty = DifficultyConfig::new(0.2).unwrap();
        assert_eq!(choose_move(&board, Mark::O, &difficulty, &mut rng), Ok(5));
        assert_eq!(rng.index_draws, 0);
    }

    #[test]
    fn test_random_index_past_the_end_is_an_error() {
        let board = board_from("XX_ OO_ ___");
        let difficulty = DifficultyConfig::new(1.0).unwrap();
        assert_eq!(
            choose_move(&board, Mark::O, &difficulty, &mut OutOfRangeRng),
            Err(GameError::NoLegalMove)
        );
    }

    #[test]
    fn test_certain_randomness_always_returns_free_cell() {
        let board = board_from("XOX _O_ X__");
        let difficulty = DifficultyConfig::new(1.0).unwrap();
        let mut rng = SessionRng::new(7);
        for _ in 0..50 {
            let index = choose_move(&board, Mark::O, &difficulty, &mut rng).unwrap();
            assert!(board.is_valid_move(index));
        }
    }

    #[test]
    fn test_choose_move_leaves_board_unchanged() {
        let board = board_from("X__ _O_ __X");
        let snapshot = board;
        let mut rng = SessionRng::new(3);
        let _ = choose_move(&board, Mark::O, &DifficultyConfig::default(), &mut rng);
        assert_eq!(board, snapshot);
    }

    /// Plays every human line against the bot and asserts the bot never loses.
    fn assert_bot_never_loses(board: Board, human_to_move: bool) {
        match evaluate(&board) {
            GameStatus::Won(mark) => {
                assert_eq!(mark, Mark::O, "bot lost on\n{}", board);
                return;
            }
            GameStatus::Drawn => return,
            GameStatus::InProgress => {}
        }

        if human_to_move {
            for index in board.empty_cells() {
                assert_bot_never_loses(board.place(index, Mark::X).unwrap(), false);
            }
        } else {
            let index = best_move(&board, Mark::O).unwrap();
            assert_bot_never_loses(board.place(index, Mark::O).unwrap(), true);
        }
    }

    #[test]
    fn test_perfect_bot_never_loses_when_human_opens() {
        assert_bot_never_loses(Board::new(), true);
    }

    #[test]
    fn test_perfect_bot_never_loses_when_bot_opens() {
        assert_bot_never_loses(Board::new(), false);
    }

    #[test]
    fn test_perfect_bots_draw_against_each_other() {
        let mut board = Board::new();
        let mut mark = Mark::X;
        while evaluate(&board) == GameStatus::InProgress {
            let index = best_move(&board, mark).unwrap();
            board = board.place(index, mark).unwrap();
            mark = mark.opponent();
        }
        assert_eq!(evaluate(&board), GameStatus::Drawn);
    }
}
