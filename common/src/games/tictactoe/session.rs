use std::fmt;

use crate::error::{GameError, Result};
use crate::games::{RandomSource, SessionRng};
use crate::log;
use super::board::Board;
use super::bot_controller::choose_move;
use super::game_state::TicTacToeGameState;
use super::settings::DifficultyConfig;
use super::types::{CELL_COUNT, Cell, FirstPlayerMode, GameStatus, Mark, MoveRecord};

pub const HUMAN_MARK: Mark = Mark::X;
pub const COMPUTER_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingHumanMove,
    AwaitingComputerMove,
    Won(Mark),
    Drawn,
}

impl SessionPhase {
    fn awaiting(mark: Mark) -> Self {
        if mark == HUMAN_MARK {
            SessionPhase::AwaitingHumanMove
        } else {
            SessionPhase::AwaitingComputerMove
        }
    }

    pub fn is_over(self) -> bool {
        matches!(self, SessionPhase::Won(_) | SessionPhase::Drawn)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionPhase::AwaitingHumanMove => write!(f, "awaiting the human move"),
            SessionPhase::AwaitingComputerMove => write!(f, "awaiting the computer move"),
            SessionPhase::Won(mark) => write!(f, "over, {} won", mark),
            SessionPhase::Drawn => write!(f, "over, drawn"),
        }
    }
}

/// Results across all games of one session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinTally {
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
}

impl WinTally {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.wins_x += 1,
            GameStatus::Won(Mark::O) => self.wins_o += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Read-only snapshot handed to the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub board: [Cell; CELL_COUNT],
    pub status: GameStatus,
    pub phase: SessionPhase,
    /// `None` once the game is over.
    pub next_mover: Option<Mark>,
    pub first_mover: Mark,
    pub last_move: Option<usize>,
    pub move_count: usize,
    pub winning_line: Option<[usize; 3]>,
    pub wins_x: u32,
    pub wins_o: u32,
    pub draws: u32,
}

/// A human (X) against the computer (O), game after game.
///
/// The computer's turn is played synchronously inside the call that hands it
/// the move, so every returned view is either waiting for the human or over.
pub struct TicTacToeSession<R: RandomSource = SessionRng> {
    game: TicTacToeGameState,
    phase: SessionPhase,
    tally: WinTally,
    difficulty: DifficultyConfig,
    first_player_mode: FirstPlayerMode,
    rng: R,
}

impl TicTacToeSession<SessionRng> {
    pub fn new(difficulty: DifficultyConfig, first_player_mode: FirstPlayerMode) -> Self {
        Self::with_rng(difficulty, first_player_mode, SessionRng::from_random())
    }

    pub fn with_seed(
        difficulty: DifficultyConfig,
        first_player_mode: FirstPlayerMode,
        seed: u64,
    ) -> Self {
        Self::with_rng(difficulty, first_player_mode, SessionRng::new(seed))
    }
}

impl<R: RandomSource> TicTacToeSession<R> {
    /// Creates the session and starts its first game.
    pub fn with_rng(
        difficulty: DifficultyConfig,
        first_player_mode: FirstPlayerMode,
        rng: R,
    ) -> Self {
        let mut session = Self {
            game: TicTacToeGameState::new(HUMAN_MARK),
            phase: SessionPhase::AwaitingHumanMove,
            tally: WinTally::default(),
            difficulty,
            first_player_mode,
            rng,
        };
        session.new_game();
        session
    }

    pub fn difficulty(&self) -> DifficultyConfig {
        self.difficulty
    }

    /// Takes effect from the computer's next move.
    pub fn set_difficulty(&mut self, difficulty: DifficultyConfig) -> Result<()> {
        let difficulty = DifficultyConfig::new(difficulty.random_move_probability)?;
        log!(
            "Random move probability set to {}",
            difficulty.random_move_probability
        );
        self.difficulty = difficulty;
        Ok(())
    }

    pub fn first_player_mode(&self) -> FirstPlayerMode {
        self.first_player_mode
    }

    /// Mode used by later calls to [`Self::new_game`].
    pub fn set_first_player_mode(&mut self, mode: FirstPlayerMode) {
        self.first_player_mode = mode;
    }

    /// Clears the board and picks who opens; the tally carries over.
    pub fn new_game(&mut self) -> SessionView {
        self.start_new_game_with(self.first_player_mode)
    }

    pub fn start_new_game_with(&mut self, mode: FirstPlayerMode) -> SessionView {
        let first_mark = match mode {
            FirstPlayerMode::Human => HUMAN_MARK,
            FirstPlayerMode::Computer => COMPUTER_MARK,
            FirstPlayerMode::Random => {
                if self.rng.random_bool() {
                    HUMAN_MARK
                } else {
                    COMPUTER_MARK
                }
            }
        };

        self.game = TicTacToeGameState::new(first_mark);
        self.phase = SessionPhase::awaiting(first_mark);
        log!("New game, {} moves first", first_mark);

        if let Err(e) = self.resolve_computer_turn() {
            log!("Computer failed to open the game: {}", e);
        }
        self.session_view()
    }

    /// Plays the human's mark at `index`, then the computer's reply if the
    /// game goes on. A rejected move leaves the session untouched.
    pub fn human_move(&mut self, index: usize) -> Result<SessionView> {
        if self.phase != SessionPhase::AwaitingHumanMove {
            return Err(GameError::IllegalMoveAttempt { phase: self.phase });
        }

        let saved = (self.game.clone(), self.phase, self.tally);
        let result = self
            .apply_move(index)
            .and_then(|()| self.resolve_computer_turn());
        if let Err(e) = result {
            (self.game, self.phase, self.tally) = saved;
            return Err(e);
        }
        Ok(self.session_view())
    }

    pub fn session_view(&self) -> SessionView {
        let status = self.game.status();
        SessionView {
            board: *self.game.board().cells(),
            status,
            phase: self.phase,
            next_mover: (!self.phase.is_over()).then_some(self.game.current_mark()),
            first_mover: self.game.first_mark(),
            last_move: self.game.last_move().map(|record| record.index),
            move_count: self.game.move_count(),
            winning_line: self.game.winning_line().map(|line| line.cells),
            wins_x: self.tally.wins_x,
            wins_o: self.tally.wins_o,
            draws: self.tally.draws,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        self.game.board()
    }

    pub fn history(&self) -> &[MoveRecord] {
        self.game.history()
    }

    pub fn tally(&self) -> WinTally {
        self.tally
    }

    fn resolve_computer_turn(&mut self) -> Result<()> {
        if self.phase != SessionPhase::AwaitingComputerMove {
            return Ok(());
        }
        let index = choose_move(
            self.game.board(),
            COMPUTER_MARK,
            &self.difficulty,
            &mut self.rng,
        )?;
        self.apply_move(index)
    }

    fn apply_move(&mut self, index: usize) -> Result<()> {
        let mark = self.game.current_mark();
        let status = self.game.place_mark(index)?;

        self.phase = match status {
            GameStatus::InProgress => SessionPhase::awaiting(self.game.current_mark()),
            GameStatus::Won(winner) => SessionPhase::Won(winner),
            GameStatus::Drawn => SessionPhase::Drawn,
        };
        self.tally.record(status);

        if status.is_over() {
            log!(
                "{} played {}, game {} (X {} / O {} / draws {})",
                mark,
                index,
                status,
                self.tally.wins_x,
                self.tally.wins_o,
                self.tally.draws
            );
        } else {
            log!("{} played {}", mark, index);
        }
        Ok(())
    }
}
