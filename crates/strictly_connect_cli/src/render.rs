//! Plain-text rendering of boards, scores and results.

use crossterm::style::Stylize;
use std::fmt::Write;
use strictly_connect::{Board, GameMode, Outcome, Player, TurnReport};

/// Mode name underlined, followed by its rules.
pub fn mode_header(mode: GameMode) -> String {
    let (title, description) = match mode {
        GameMode::Classic => ("Classic", "Connect three characters to win the game.\n"),
        GameMode::Frenzy => (
            "Frenzy",
            "Connect three or more characters to earn points.\nThe one with the most points wins.\n",
        ),
    };
    format!("{}\n{}\n{}", title, "-".repeat(title.len()), description)
}

/// Main menu listing every mode.
pub fn main_menu() -> String {
    "Tic-Tac-Toe\n-----------\n1. Classic\n2. Frenzy\n3. Quit\n".to_string()
}

/// One `label: score` line per player.
pub fn score_text(board: &Board) -> String {
    let mut text = String::from("Score: \n");
    for player in board.players() {
        let _ = writeln!(text, "{}: {}", player.label(), player.score());
    }
    text
}

/// Grid with borders; empty cells show their number.
///
/// With `highlight`, cells inside a run of three or more are drawn in cyan.
pub fn grid_text(board: &Board, highlight: bool) -> String {
    let grid = board.grid();
    let chained = if highlight {
        board.chained_cells()
    } else {
        Default::default()
    };
    let width = cell_width(grid.size());
    let border = format!("{}-\n", "-".repeat((width + 3) * grid.size()));

    let mut text = String::new();
    for row in 0..grid.size() {
        text.push_str(&border);
        text.push('|');
        for column in 0..grid.size() {
            let cell = grid.cell_number_by_position(row, column);
            let content = match grid.marker_at(cell) {
                Some(marker) => format!(" {:>width$}", marker.symbol()),
                None => format!(" {:>width$}", cell),
            };
            if chained.contains(&cell) {
                let _ = write!(text, "{}", content.cyan());
            } else {
                text.push_str(&content);
            }
            text.push_str(" |");
        }
        text.push('\n');
    }
    text.push_str(&border);
    text
}

/// Digits in the largest cell number, never less than two.
fn cell_width(size: usize) -> usize {
    let last = (size * size).saturating_sub(1);
    last.to_string().len().max(2)
}

/// `Bot-2 (O) turn...`
pub fn turn_text(player: &Player) -> String {
    format!("{} turn...\n", player.label())
}

/// Winner announcement or draw.
pub fn result_text(board: &Board) -> String {
    match board.outcome() {
        Outcome::Winner(number) => match board.roster().by_number(number) {
            Some(player) => format!("Game over! {} has won!\n", player.label()),
            None => "Game over!\n".to_string(),
        },
        Outcome::Draw => "Game over! The game ends with draw.\n".to_string(),
    }
}

/// History line for one move, without a trailing newline.
pub fn selection_text(report: &TurnReport) -> String {
    let mut text = format!(
        "{}-{} ({}) selected '{}'",
        report.kind, report.player_number, report.marker, report.cell
    );
    if report.gained > 0 {
        let _ = write!(text, ", gained +{} points", report.gained);
    }
    text
}

/// Full screen between moves: header, move history, scores and grid.
pub fn screen_text(board: &Board, history: &[String], highlight: bool) -> String {
    let mut text = mode_header(board.rule().mode());
    text.push('\n');
    for line in history {
        text.push_str(line);
        text.push_str("\n\n");
    }
    text.push_str(&score_text(board));
    text.push('\n');
    text.push_str(&grid_text(board, highlight));
    text.push('\n');
    text
}
