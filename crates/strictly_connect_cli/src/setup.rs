//! Interactive game setup when no players were configured.

use crate::config::{GameConfig, PlayerConfig};
use crate::console::Console;
use crate::render;
use std::io::{self, BufRead, Write};
use strictly_connect::{GameMode, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_PLAYERS, Marker, PlayerKind};
use tracing::{info, instrument};

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Play(GameMode),
    Quit,
}

fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" => Some(MenuChoice::Play(GameMode::Classic)),
        "2" => Some(MenuChoice::Play(GameMode::Frenzy)),
        "3" | "q" | "quit" => Some(MenuChoice::Quit),
        other => other.parse().ok().map(MenuChoice::Play),
    }
}

/// Walks through mode, grid size and players, keeping the seed from `config`.
///
/// Returns `None` when the user quits or closes input at the main menu.
#[instrument(skip_all)]
pub fn interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mut config: GameConfig,
) -> io::Result<Option<GameConfig>> {
    console.refresh(&format!("{}\n", render::main_menu()))?;
    let choice = console.ask(
        "Select game mode: ",
        "** Invalid game mode, please reselect!",
        parse_menu_choice,
    );
    let mode = match choice {
        Ok(MenuChoice::Play(mode)) => mode,
        Ok(MenuChoice::Quit) => return Ok(None),
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e),
    };
    config.set_mode(mode);

    let header = render::mode_header(mode);
    console.refresh(&format!("{}\n", header))?;

    if mode == GameMode::Frenzy {
        let grid_size = console.ask(
            &format!("Input grid size (min {}, max {}): ", MIN_GRID_SIZE, MAX_GRID_SIZE),
            "** Invalid grid size, please reinput!",
            |line| {
                line.trim()
                    .parse::<usize>()
                    .ok()
                    .filter(|size| (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(size))
            },
        )?;
        config.set_grid_size(grid_size);
    }

    let total = console.ask(
        &format!("Input number of players (min {}): ", MIN_PLAYERS),
        "** Invalid number of players, please reinput!",
        |line| line.trim().parse::<usize>().ok().filter(|&count| count >= MIN_PLAYERS),
    )?;

    let mut players: Vec<PlayerConfig> = Vec::with_capacity(total);
    console.refresh(&format!("{}\n{}", header, ready_text(&players, total)))?;

    while players.len() < total {
        console.print(&format!("\nSetting up player-{}...\n", players.len() + 1))?;

        let marker = console.ask("Marker: (1 char) ", "** Invalid marker, please reinput!", |line| {
            Marker::try_from(line)
                .ok()
                .filter(|marker| players.iter().all(|player| player.marker() != marker))
        })?;
        let kind = if console.confirm("As a bot? (y/n): ")? {
            PlayerKind::Automated
        } else {
            PlayerKind::Human
        };

        players.push(PlayerConfig::new(marker, kind));
        console.refresh(&format!("{}\n{}", header, ready_text(&players, total)))?;
    }

    console.read_line("\nInput anything to start...")?;
    info!(%mode, players = players.len(), "Interactive setup finished");

    config.set_players(players);
    Ok(Some(config))
}

/// `1/3 Players are set.` followed by one line per ready player.
fn ready_text(players: &[PlayerConfig], total: usize) -> String {
    let mut text = format!("{}/{} Players are set.\n", players.len(), total);
    if !players.is_empty() {
        text.push('\n');
    }
    for (index, player) in players.iter().enumerate() {
        text.push_str(&format!(
            "{}-{} ({}) is ready!\n",
            player.kind(),
            index + 1,
            player.marker()
        ));
    }
    text
}
