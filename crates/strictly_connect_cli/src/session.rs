//! Terminal play sessions and bot-only simulations.

use crate::config::GameConfig;
use crate::console::Console;
use crate::{render, setup};
use anyhow::Context;
use derive_getters::Getters;
use rand::Rng;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use strictly_connect::{Board, Game, GameError, Outcome, Unattended};
use tracing::{info, instrument, warn};

/// Runs terminal games until the user quits from the main menu.
///
/// Players from `config` seat the first board; once a game is not rematched,
/// the main menu sets up the next one. Returns the number of completed games.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut config: GameConfig,
    highlight: bool,
) -> anyhow::Result<usize> {
    let mut rng = config.rng();
    let mut completed = 0;

    loop {
        if config.players().is_empty() {
            match setup::interactive(console, config.clone()).context("Game setup aborted")? {
                Some(chosen) => config = chosen,
                None => break,
            }
        }

        let board = config.build_board().context("Invalid game setup")?;
        info!(mode = %config.mode(), players = board.players().len(), "Starting game");

        let game = Game::new(board, &mut rng);
        completed += play(console, game, &mut rng, highlight)?;

        config.set_players(Vec::new());
    }

    info!(completed, "Session ended");
    Ok(completed)
}

/// Plays `game` in the terminal until a finished game is not rematched.
///
/// Returns the number of completed games.
#[instrument(skip_all)]
pub fn play<R: BufRead, W: Write, G: Rng>(
    console: &mut Console<R, W>,
    mut game: Game,
    rng: &mut G,
    highlight: bool,
) -> anyhow::Result<usize> {
    let mut history: Vec<String> = Vec::new();
    let mut completed = 0;

    console.refresh(&render::screen_text(game.board(), &history, highlight))?;

    loop {
        if game.is_complete() {
            completed += 1;
            info!(outcome = ?game.outcome(), completed, "Game finished");
            console.print(&render::result_text(game.board()))?;

            if !console.confirm("Rematch? (y/n) ")? {
                break;
            }
            game.restart(rng);
            history.clear();
            console.refresh(&render::screen_text(game.board(), &history, highlight))?;
            continue;
        }

        match game.play_turn(console, rng) {
            Ok(report) => {
                history.push(render::selection_text(&report));
                console.refresh(&render::screen_text(game.board(), &history, highlight))?;
            }
            Err(GameError::Mark(error)) => {
                warn!(%error, "Move rejected, asking again");
            }
            Err(error) => return Err(error.into()),
        }
    }

    Ok(completed)
}

/// Results of repeated bot-only games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games played.
    games: usize,
    /// Wins by player number.
    wins: BTreeMap<usize, usize>,
    /// Games without a single winner.
    draws: usize,
    /// Final score totals by player number.
    points: BTreeMap<usize, usize>,
}

impl Tally {
    fn record(&mut self, board: &Board) {
        self.games += 1;
        match board.outcome() {
            Outcome::Winner(number) => *self.wins.entry(number).or_default() += 1,
            Outcome::Draw => self.draws += 1,
        }
        for player in board.players() {
            *self.points.entry(player.number()).or_default() += player.score();
        }
    }
}

/// Plays `games` complete games on `board`, restarting between them.
///
/// # Errors
///
/// Fails if any player needs a prompt, which only happens for humans.
#[instrument(skip(board, rng), fields(players = board.players().len()))]
pub fn simulate<G: Rng>(board: Board, games: usize, rng: &mut G) -> Result<Tally, GameError> {
    let mut tally = Tally::default();
    let mut game = Game::new(board, rng);

    for round in 0..games {
        if round > 0 {
            game.restart(rng);
        }
        game.play_to_completion(&mut Unattended, rng)?;
        tally.record(game.board());
    }

    info!(games = tally.games, draws = tally.draws, "Simulation finished");
    Ok(tally)
}

/// Summary table for a simulation on `board`.
pub fn tally_text(board: &Board, tally: &Tally) -> String {
    let mut text = render::mode_header(board.rule().mode());
    let size = board.grid().size();
    let _ = writeln!(text, "\n{} games on a {}x{} grid", tally.games, size, size);

    for player in board.players() {
        let _ = writeln!(
            text,
            "{}: {} wins, {} points",
            player.label(),
            tally.wins.get(&player.number()).copied().unwrap_or(0),
            tally.points.get(&player.number()).copied().unwrap_or(0)
        );
    }
    let _ = writeln!(text, "Draws: {}", tally.draws);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::io::Cursor;
    use crate::config::PlayerConfig;
    use strictly_connect::{GameMode, GameModeRule, Marker, PlayerKind, Roster};

    fn board(mode: GameModeRule, seats: &[(char, PlayerKind)]) -> Board {
        let roster = Roster::new(
            seats
                .iter()
                .map(|&(symbol, kind)| (Marker::new(symbol).unwrap(), kind))
                .collect(),
        )
        .unwrap();
        Board::new(mode, roster).unwrap()
    }

    fn bots() -> Board {
        board(
            GameModeRule::frenzy(4).unwrap(),
            &[('X', PlayerKind::Automated), ('O', PlayerKind::Automated)],
        )
    }

    #[test]
    fn test_bot_session_with_one_rematch() {
        let mut rng = SmallRng::seed_from_u64(5);
        let game = Game::new(bots(), &mut rng);
        let mut console = Console::new(Cursor::new(b"y\nn\n".to_vec()), Vec::new());

        let completed = play(&mut console, game, &mut rng, false).unwrap();
        assert_eq!(completed, 2);

        let output = String::from_utf8_lossy(console.output()).into_owned();
        assert_eq!(output.matches("Game over!").count(), 2);
        assert_eq!(output.matches("Rematch? (y/n) ").count(), 2);
        assert!(output.contains("selected '"));
    }

    fn bot_config() -> GameConfig {
        let seats = ['X', 'O']
            .into_iter()
            .map(|symbol| PlayerConfig::new(Marker::new(symbol).unwrap(), PlayerKind::Automated))
            .collect();
        GameConfig::new(GameMode::Frenzy, 4, seats, Some(9))
    }

    #[test]
    fn test_declined_rematch_returns_to_main_menu() {
        // Decline, set up a classic bot game, decline again, then quit.
        let input = "n\n1\n2\nA\ny\nB\ny\n\nn\n3\n";
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        assert_eq!(run(&mut console, bot_config(), false).unwrap(), 2);

        let output = String::from_utf8_lossy(console.output()).into_owned();
        assert_eq!(output.matches("Select game mode: ").count(), 2);
        assert_eq!(output.matches("Game over!").count(), 2);
        assert!(output.contains("Bot-2 (B) is ready!"));
        assert!(output.contains("Bot-1 (A) selected '"));
    }

    #[test]
    fn test_closed_input_at_main_menu_ends_session() {
        let mut console = Console::new(Cursor::new(b"n\n".to_vec()), Vec::new());
        assert_eq!(run(&mut console, bot_config(), false).unwrap(), 1);

        let output = String::from_utf8_lossy(console.output()).into_owned();
        assert!(output.contains("3. Quit"));
    }

    #[test]
    fn test_human_moves_come_from_console() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = board(
            GameModeRule::classic(),
            &[('X', PlayerKind::Human), ('O', PlayerKind::Human)],
        );
        let game = Game::new(board, &mut rng);
        let first = game.board().current_player().unwrap().label();

        // Whoever starts takes the top row while the other fills the middle.
        let input = "0\n3\n1\n4\n2\nn\n";
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        assert_eq!(play(&mut console, game, &mut rng, false).unwrap(), 1);

        let output = String::from_utf8_lossy(console.output()).into_owned();
        assert!(output.contains(&format!("Game over! {} has won!", first)));
        assert!(output.contains("selected '2', gained +3 points"));
    }

    #[test]
    fn test_closed_input_ends_session_with_error() {
        let mut rng = SmallRng::seed_from_u64(1);
        let board = board(
            GameModeRule::classic(),
            &[('X', PlayerKind::Human), ('O', PlayerKind::Automated)],
        );
        let game = Game::new(board, &mut rng);
        let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
        assert!(play(&mut console, game, &mut rng, false).is_err());
    }

    #[test]
    fn test_simulate_tallies_every_game() {
        let mut rng = SmallRng::seed_from_u64(11);
        let tally = simulate(bots(), 12, &mut rng).unwrap();

        assert_eq!(*tally.games(), 12);
        assert_eq!(tally.wins().values().sum::<usize>() + tally.draws(), 12);

        let text = tally_text(&bots(), &tally);
        assert!(text.contains("12 games on a 4x4 grid"));
        assert!(text.contains("Bot-1 (X): "));
        assert!(text.contains("Draws: "));
    }

    #[test]
    fn test_simulate_rejects_humans() {
        let mut rng = SmallRng::seed_from_u64(11);
        let board = board(
            GameModeRule::classic(),
            &[('X', PlayerKind::Human), ('O', PlayerKind::Automated)],
        );
        assert!(matches!(
            simulate(board, 1, &mut rng),
            Err(GameError::Selection(_))
        ));
    }
}
