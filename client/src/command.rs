use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClientCommand {
    Place(usize),
    NewGame,
    /// "Start new game with X": the human opens regardless of the coin.
    NewGameHumanFirst,
    /// New random move probability; range checking is left to the session.
    Difficulty(f64),
    Score,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<ClientCommand, String> {
    let words: Vec<String> = line
        .split_whitespace()
        .map(|word| word.to_ascii_lowercase())
        .collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    match words.as_slice() {
        [] => Err("Enter a cell number, or 'help'".to_string()),
        ["new"] | ["n"] => Ok(ClientCommand::NewGame),
        ["new", "x"] => Ok(ClientCommand::NewGameHumanFirst),
        ["difficulty" | "d", value] => value
            .parse::<f64>()
            .map(ClientCommand::Difficulty)
            .map_err(|_| format!("'{}' is not a probability, try 'difficulty 0.35'", value)),
        ["difficulty"] | ["d"] => Err("Usage: difficulty <p>, with p in [0, 1]".to_string()),
        ["score"] | ["s"] => Ok(ClientCommand::Score),
        ["help"] | ["h"] | ["?"] => Ok(ClientCommand::Help),
        ["quit"] | ["q"] | ["exit"] => Ok(ClientCommand::Quit),
        [cell] => match cell.parse::<usize>() {
            Ok(index) if index < CELL_COUNT => Ok(ClientCommand::Place(index)),
            Ok(index) => Err(format!(
                "Cell {} is off the board, use 0-{}",
                index,
                CELL_COUNT - 1
            )),
            Err(_) => Err(format!("Unknown command '{}'", cell)),
        },
        _ => Err(format!("Unknown command '{}'", line.trim())),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  0-8      place your X on that cell
  new      start a new game (coin flip decides who opens)
  new x    start a new game with you (X) opening
  difficulty <p>
           chance in [0, 1] that the computer plays a random cell
  score    show the win tally
  help     show this text
  quit     leave";
