use std::io::{BufRead, Write};

use tictactoe_common::games::RandomSource;
use tictactoe_common::games::tictactoe::{DifficultyConfig, FirstPlayerMode, TicTacToeSession};
use tictactoe_common::log;

use crate::command::{ClientCommand, HELP_TEXT, parse_command};
use crate::render::{render_score, render_view};

/// Drives one session from line-based input until `quit` or end of input.
pub fn run_session<R, I, O>(
    session: &mut TicTacToeSession<R>,
    input: I,
    output: &mut O,
) -> std::io::Result<()>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    writeln!(output, "{}", render_view(&session.session_view()))?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match command {
            ClientCommand::Place(index) => match session.human_move(index) {
                Ok(view) => {
                    writeln!(output, "{}", render_view(&view))?;
                    if view.status.is_over() {
                        writeln!(output, "{}", render_score(&view))?;
                        writeln!(output, "Type 'new' to play again.")?;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
            ClientCommand::NewGame => {
                let view = session.new_game();
                writeln!(output, "{}", render_view(&view))?;
            }
            ClientCommand::NewGameHumanFirst => {
                let view = session.start_new_game_with(FirstPlayerMode::Human);
                writeln!(output, "{}", render_view(&view))?;
            }
            ClientCommand::Difficulty(p) => {
                match DifficultyConfig::new(p).and_then(|d| session.set_difficulty(d)) {
                    Ok(()) => writeln!(output, "Random move probability is now {}", p)?,
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            ClientCommand::Score => {
                writeln!(output, "{}", render_score(&session.session_view()))?;
            }
            ClientCommand::Help => writeln!(output, "{}", HELP_TEXT)?,
            ClientCommand::Quit => break,
        }
    }

    let tally = session.tally();
    log!(
        "Session finished: X {} / O {} / draws {}",
        tally.wins_x,
        tally.wins_o,
        tally.draws
    );
    Ok(())
}
