use tictactoe_common::games::tictactoe::{
    Board, GameStatus, HUMAN_MARK, Mark, SessionPhase, SessionView,
};

fn player_name(mark: Mark) -> &'static str {
    if mark == HUMAN_MARK { "You" } else { "Computer" }
}

pub fn render_status(view: &SessionView) -> String {
    match view.status {
        GameStatus::Won(mark) => {
            let line = view
                .winning_line
                .map(|[a, b, c]| format!(" on {}-{}-{}", a, b, c))
                .unwrap_or_default();
            format!("Winner: {} ({}){}", mark, player_name(mark), line)
        }
        GameStatus::Drawn => "Draw".to_string(),
        GameStatus::InProgress => match view.phase {
            SessionPhase::AwaitingHumanMove => "Your move (X)".to_string(),
            _ => "Computer to move (O)".to_string(),
        },
    }
}

pub fn render_score(view: &SessionView) -> String {
    format!(
        "Player (X) wins: {}  Machine (O) wins: {}  Draws: {}",
        view.wins_x, view.wins_o, view.draws
    )
}

pub fn render_view(view: &SessionView) -> String {
    let board = Board::from_cells(view.board);
    let mut out = String::new();

    let last = view
        .last_move
        .and_then(|index| Some((index, board.get(index)?.mark()?)));
    if let Some((index, mark)) = last {
        out.push_str(&format!("{} played {}\n", player_name(mark), index));
    }

    out.push_str(&board.to_string());
    out.push_str(&render_status(view));
    out.push('\n');
    out
}
