mod command;
mod config;
mod render;
mod runner;

use clap::Parser;
use std::path::PathBuf;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{DifficultyConfig, TicTacToeSession};
use tictactoe_common::log;
use tictactoe_common::logger::{self, LogLevel};

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against the computer")]
struct Args {
    /// Config file, defaults to tictactoe_client_config.yaml next to the binary.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for the coin flip and the computer's random moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Chance in [0, 1] that the computer plays a random cell.
    #[arg(long)]
    random_move_probability: Option<f64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Log every scored candidate move.
    #[arg(long, short)]
    verbose: bool,
}

/// A fresh seed is drawn when none is given, so every session can be replayed.
fn session_rng(seed: Option<u64>) -> SessionRng {
    match seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = config::get_config_manager(args.config).get_config()?;

    let prefix = (args.use_log_prefix || config.use_log_prefix).then(|| "TicTacToe".to_string());
    let level = if args.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    logger::init_logger(prefix, level);

    let difficulty = match args.random_move_probability {
        Some(p) => DifficultyConfig::new(p)?,
        None => config.difficulty,
    };

    log!(
        "Session starting, random move probability {}",
        difficulty.random_move_probability
    );
    let rng = session_rng(args.seed.or(config.seed));
    log!("Session seed {}, replay with --seed {}", rng.seed(), rng.seed());
    let mut session = TicTacToeSession::with_rng(difficulty, config.first_player, rng);

    println!("{}", command::HELP_TEXT);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    runner::run_session(&mut session, stdin.lock(), &mut stdout)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::tictactoe::FirstPlayerMode;

    #[test]
    fn test_reported_seed_replays_the_session() {
        let rng = session_rng(None);
        let seed = rng.seed();
        let mut original =
            TicTacToeSession::with_rng(DifficultyConfig::default(), FirstPlayerMode::Random, rng);
        let mut replay = TicTacToeSession::with_rng(
            DifficultyConfig::default(),
            FirstPlayerMode::Random,
            session_rng(Some(seed)),
        );
        for _ in 0..10 {
            assert_eq!(original.new_game(), replay.new_game());
        }
    }

    #[test]
    fn test_given_seed_is_kept() {
        assert_eq!(session_rng(Some(77)).seed(), 77);
    }
}
