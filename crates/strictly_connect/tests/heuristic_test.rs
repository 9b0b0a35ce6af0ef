//! Bot move selection: threat tracking, blocking and legality.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use strictly_connect::heuristic::{choose_offense_or_block, most_threatening_opponent, select_cell};
use strictly_connect::{ConnectedCell, Grid, Marker, PlayerKind, Roster};

fn roster(symbols: &str) -> Roster {
    Roster::new(
        symbols
            .chars()
            .map(|symbol| (Marker::new(symbol).unwrap(), PlayerKind::Automated))
            .collect(),
    )
    .unwrap()
}

fn report(row: usize, column: usize, chain: usize, total_connected: usize) -> ConnectedCell {
    ConnectedCell {
        row,
        column,
        vertical: 0,
        horizontal: chain,
        diagonal_left_to_right: 0,
        diagonal_right_to_left: 0,
        total_connected,
    }
}

#[test]
fn test_nearer_opponent_wins_tie() {
    // Players A..E are 1..5; C (3) is acting. D (4) and A (1) both have a
    // cell worth 4.
    let grid = Grid::from_rows([
        "DDD...", "......", "AAA...", "......", "......", "......",
    ])
    .unwrap();
    let roster = roster("ABCDE");
    let acting = roster.by_number(3).unwrap();

    let threat = most_threatening_opponent(&grid, &roster, acting, &grid.available_cells()).unwrap();
    assert_eq!(threat.player_number, 4);
    assert_eq!(threat.top_connected(), 4);

    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(select_cell(&grid, &roster, acting, &mut rng), Ok(3));
}

#[test]
fn test_stronger_farther_opponent_wins() {
    let grid = Grid::from_rows([
        "DDD...", "......", "AAAA..", "......", "......", "......",
    ])
    .unwrap();
    let roster = roster("ABCDE");
    let acting = roster.by_number(3).unwrap();

    let threat = most_threatening_opponent(&grid, &roster, acting, &grid.available_cells()).unwrap();
    assert_eq!(threat.player_number, 1);
    assert_eq!(threat.top_connected(), 5);

    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(select_cell(&grid, &roster, acting, &mut rng), Ok(16));
}

#[test]
fn test_weak_offense_yields_to_block() {
    let own = [report(2, 2, 1, 2), report(0, 0, 0, 0)];
    let threat = [report(0, 2, 2, 3), report(2, 2, 0, 0)];
    let best = choose_offense_or_block(&own, &threat).unwrap();
    assert_eq!((best.row, best.column), (0, 2));
}

#[test]
fn test_bot_blocks_on_grid() {
    let grid = Grid::from_rows(["OO.", "...", "..X"]).unwrap();
    let roster = roster("XO");
    let mut rng = SmallRng::seed_from_u64(0);
    assert_eq!(select_cell(&grid, &roster, roster.by_number(1).unwrap(), &mut rng), Ok(2));
}

#[test]
fn test_dual_purpose_center() {
    // X and O can each close a diagonal worth 3 through (1,1).
    let grid = Grid::from_rows(["X.O", "...", "O.X"]).unwrap();
    let roster = roster("XO");
    let mut rng = SmallRng::seed_from_u64(0);

    assert_eq!(select_cell(&grid, &roster, roster.by_number(1).unwrap(), &mut rng), Ok(4));
    assert_eq!(select_cell(&grid, &roster, roster.by_number(2).unwrap(), &mut rng), Ok(4));
}

#[test]
fn test_never_selects_occupied_cell() {
    let symbols = ['X', 'O', 'Z'];
    let roster = roster("XOZ");
    let mut rng = SmallRng::seed_from_u64(1234);

    for _ in 0..300 {
        let size = rng.gen_range(3..8);
        let rows: Vec<String> = (0..size)
            .map(|_| {
                (0..size)
                    .map(|_| {
                        if rng.gen_range(0..3) == 0 {
                            '.'
                        } else {
                            symbols[rng.gen_range(0..symbols.len())]
                        }
                    })
                    .collect()
            })
            .collect();
        let grid = Grid::from_rows(&rows).unwrap();

        for acting in roster.iter() {
            match select_cell(&grid, &roster, acting, &mut rng) {
                Ok(cell) => {
                    assert!(cell < grid.cell_count());
                    assert!(grid.is_available(cell), "cell {cell} in {rows:?}");
                }
                Err(_) => assert!(grid.is_full()),
            }
        }
    }
}
