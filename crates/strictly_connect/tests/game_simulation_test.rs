//! Whole games between bots.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use strictly_connect::{
    Board, Game, GameModeRule, Marker, Outcome, PlayerKind, Roster, Unattended,
};

fn bots(symbols: &str) -> Roster {
    Roster::new(
        symbols
            .chars()
            .map(|symbol| (Marker::new(symbol).unwrap(), PlayerKind::Automated))
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_classic_completes_on_first_score() {
    for seed in 0..40 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(GameModeRule::classic(), bots("XOZ")).unwrap();
        let mut game = Game::new(board, &mut rng);

        loop {
            let full_before = game.board().grid().is_full();
            assert!(!game.is_complete() || full_before);
            if game.is_complete() {
                break;
            }

            let report = game.play_turn(&mut Unattended, &mut rng).unwrap();
            let scored = game.board().players().iter().any(|p| p.score() > 0);
            assert_eq!(scored, report.gained > 0, "seed {seed}");
            assert_eq!(
                game.is_complete(),
                report.gained > 0 || game.board().grid().is_full(),
                "seed {seed}"
            );
            if scored {
                assert_eq!(game.outcome(), Outcome::Winner(report.player_number));
                break;
            }
        }
    }
}

#[test]
fn test_frenzy_fills_grid_and_scores_add_up() {
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(GameModeRule::frenzy(5).unwrap(), bots("XOZ")).unwrap();
        let mut game = Game::new(board, &mut rng);

        let reports = game.play_to_completion(&mut Unattended, &mut rng).unwrap();
        assert_eq!(reports.len(), 25);
        assert!(game.board().grid().is_full());

        for player in game.board().players() {
            let gained: usize = reports
                .iter()
                .filter(|r| r.player_number == player.number())
                .map(|r| r.gained)
                .sum();
            assert_eq!(player.score(), gained);
        }
    }
}

#[test]
fn test_turns_rotate_in_roster_order() {
    let mut rng = SmallRng::seed_from_u64(8);
    let board = Board::new(GameModeRule::frenzy(6).unwrap(), bots("ABCD")).unwrap();
    let mut game = Game::new(board, &mut rng);

    let reports = game.play_to_completion(&mut Unattended, &mut rng).unwrap();
    for pair in reports.windows(2) {
        assert_eq!(pair[1].player_number, pair[0].player_number % 4 + 1);
    }
}

#[test]
fn test_restart_gives_clean_board() {
    let mut rng = SmallRng::seed_from_u64(3);
    let board = Board::new(GameModeRule::frenzy(4).unwrap(), bots("XO")).unwrap();
    let mut game = Game::new(board, &mut rng);
    game.play_to_completion(&mut Unattended, &mut rng).unwrap();

    game.restart(&mut rng);
    assert!(!game.is_complete());
    assert_eq!(game.board().available_cells().len(), 16);
    assert!(game.board().players().iter().all(|p| p.score() == 0));
    assert!(game.board().current_player().is_some());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::new(GameModeRule::frenzy(5).unwrap(), bots("XO")).unwrap();
        let mut game = Game::new(board, &mut rng);
        game.play_to_completion(&mut Unattended, &mut rng).unwrap()
    };
    assert_eq!(play(17), play(17));
}
