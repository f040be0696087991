mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{best_move, choose_move};
pub use game_state::TicTacToeGameState;
pub use minimax::{WIN_SCORE, score};
pub use session::{
    COMPUTER_MARK, HUMAN_MARK, SessionPhase, SessionView, TicTacToeSession, WinTally,
};
pub use settings::{DEFAULT_RANDOM_MOVE_PROBABILITY, DifficultyConfig};
pub use types::{
    BOARD_SIZE, CELL_COUNT, Cell, FirstPlayerMode, GameStatus, Mark, MoveRecord, WinningLine,
};
pub use win_detector::{LINES, check_win_with_line, evaluate};
