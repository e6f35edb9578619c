use battlesim::{
    run_simulation, simulate_game, Board, Orientation, Strategy, StrategyKind, GRID_SIZE,
    NUM_SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn placed_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    board.place_all_ships(&mut rng);
    board
}

/// Fires a fixed script of cells, for deterministic game tests.
struct Scripted {
    moves: Vec<(usize, usize)>,
    next: usize,
}

impl Strategy for Scripted {
    fn name(&self) -> &'static str {
        "Scripted"
    }

    fn select_target(&mut self, _board: &Board, _rng: &mut SmallRng) -> (usize, usize) {
        let mv = self.moves[self.next];
        self.next += 1;
        mv
    }
}

#[test]
fn test_scripted_two_shot_game() {
    let mut board = Board::new();
    board
        .try_place(NUM_SHIPS - 1, 0, 0, Orientation::Horizontal)
        .unwrap();

    let mut strategy = Scripted {
        moves: vec![(0, 0), (0, 1)],
        next: 0,
    };
    let mut rng = SmallRng::seed_from_u64(0);
    let shots = simulate_game(&mut board, &mut strategy, &mut rng).unwrap();
    assert_eq!(shots, 2);
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_game_length_bounds() {
    for kind in StrategyKind::ALL {
        let mut rng = SmallRng::seed_from_u64(kind as u64 + 1);
        for seed in 0..50u64 {
            let mut board = placed_board(seed);
            let mut strategy = kind.strategy();
            let shots = simulate_game(&mut board, strategy.as_mut(), &mut rng).unwrap();
            assert!(
                (TOTAL_SHIP_CELLS..=GRID_SIZE * GRID_SIZE).contains(&shots),
                "{}: game took {} shots",
                kind.label(),
                shots
            );
        }
    }
}

#[test]
fn test_shot_set_grows_by_one_per_shot() {
    for kind in StrategyKind::ALL {
        let mut rng = SmallRng::seed_from_u64(17);
        let mut board = placed_board(23);
        let mut strategy = kind.strategy();

        let mut fired = 0;
        while board.ships_remaining() > 0 {
            let before = board.shots().count_ones();
            let (r, c) = strategy.select_target(&board, &mut rng);
            board.fire(r, c).unwrap();
            fired += 1;
            assert_eq!(board.shots().count_ones(), before + 1);
        }
        assert_eq!(board.shots().count_ones(), fired);
    }
}

#[test]
fn test_run_simulation_reproducible_with_seed() {
    let mut rng1 = SmallRng::seed_from_u64(77);
    let mut rng2 = SmallRng::seed_from_u64(77);
    let avg1 = run_simulation(StrategyKind::HuntTarget, 200, &mut rng1).unwrap();
    let avg2 = run_simulation(StrategyKind::HuntTarget, 200, &mut rng2).unwrap();
    assert_eq!(avg1, avg2);
    assert!(avg1 >= TOTAL_SHIP_CELLS as f64);
    assert!(avg1 <= (GRID_SIZE * GRID_SIZE) as f64);
}

/// Statistical ordering of the three strategies. Means over 10,000 games
/// are far enough apart that a fixed seed makes this deterministic.
#[test]
fn test_hunt_beats_pdf_beats_random() {
    const GAMES: usize = 10_000;
    let mut rng = SmallRng::seed_from_u64(2024);

    let random = run_simulation(StrategyKind::Random, GAMES, &mut rng).unwrap();
    let pdf = run_simulation(StrategyKind::Pdf, GAMES, &mut rng).unwrap();
    let hunt = run_simulation(StrategyKind::HuntTarget, GAMES, &mut rng).unwrap();

    assert!(
        hunt < pdf && pdf < random,
        "expected hunt < pdf < random, got {:.2} / {:.2} / {:.2}",
        hunt,
        pdf,
        random
    );
}
