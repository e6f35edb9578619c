use battlesim::{
    Board, BoardError, Orientation, ShotOutcome, FLEET, GRID_SIZE, NUM_SHIPS, TOTAL_SHIP_CELLS,
    UNIFORM_PRIOR,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_new_board_uniform_prior() {
    let board = Board::new();
    assert_eq!(board.ships_remaining(), 0);
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            assert!(!board.is_shot(r, c).unwrap());
            assert_eq!(board.probability(r, c), UNIFORM_PRIOR);
        }
    }
}

#[test]
fn test_manual_place_and_sink() {
    let mut board = Board::new();
    board.try_place(0, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(board.ships_remaining(), 1);

    for c in 0..FLEET[0].length() - 1 {
        assert_eq!(board.fire(0, c).unwrap(), ShotOutcome::Hit);
        assert_eq!(board.ships_remaining(), 1);
    }
    assert_eq!(
        board.fire(0, FLEET[0].length() - 1).unwrap(),
        ShotOutcome::Sunk("Carrier")
    );
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_patrol_boat_scenario() {
    // Only the Patrol Boat, at (0,0)-(0,1) horizontally.
    let mut board = Board::new();
    board
        .try_place(NUM_SHIPS - 1, 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.ships_remaining(), 1);

    let first = board.fire(0, 0).unwrap();
    assert!(first.is_hit());
    assert_eq!(board.ships_remaining(), 1);

    let second = board.fire(0, 1).unwrap();
    assert_eq!(second, ShotOutcome::Sunk("Patrol Boat"));
    assert_eq!(board.ships_remaining(), 0);
}

#[test]
fn test_placement_rejections() {
    let mut board = Board::new();
    // Carrier cannot extend past the right edge.
    assert_eq!(
        board.try_place(0, 0, 6, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    board.try_place(0, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(
        board.try_place(0, 5, 5, Orientation::Vertical).unwrap_err(),
        BoardError::ShipAlreadyPlaced
    );
    // Battleship crossing the Carrier's row.
    assert_eq!(
        board.try_place(1, 0, 2, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(
        board.try_place(9, 0, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidIndex
    );
    // Failed attempts must not leave partial state behind.
    assert_eq!(board.ship_map().count_ones(), FLEET[0].length());
}

#[test]
fn test_place_all_ships_complete_fleet() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut board = Board::new();
    board.place_all_ships(&mut rng);

    assert_eq!(board.ship_map().count_ones(), TOTAL_SHIP_CELLS);
    assert_eq!(board.ships_remaining(), NUM_SHIPS);
}

#[test]
fn test_repeated_fire_is_fault() {
    let mut board = Board::new();
    board.try_place(0, 0, 0, Orientation::Horizontal).unwrap();
    board.fire(5, 5).unwrap();
    assert_eq!(board.fire(5, 5).unwrap_err(), BoardError::AlreadyShot);
}

#[test]
fn test_miss_zeroes_probability_without_boost() {
    let mut board = Board::new();
    board.try_place(0, 0, 0, Orientation::Horizontal).unwrap();

    assert_eq!(board.fire(5, 5).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.probability(5, 5), 0.0);
    // Neighbors of a miss keep the prior.
    assert_eq!(board.probability(4, 5), UNIFORM_PRIOR);
    assert_eq!(board.probability(6, 5), UNIFORM_PRIOR);
}

#[test]
fn test_hit_boosts_unshot_neighbors() {
    let mut board = Board::new();
    board.try_place(0, 4, 2, Orientation::Horizontal).unwrap();

    // Shoot one neighbor first so it stays untouched by the boost.
    board.fire(3, 4).unwrap();
    assert_eq!(board.probability(3, 4), 0.0);

    assert!(board.fire(4, 4).unwrap().is_hit());
    assert_eq!(board.probability(4, 4), 0.0);
    let boosted = UNIFORM_PRIOR * 1.5;
    assert_eq!(board.probability(5, 4), boosted);
    assert_eq!(board.probability(4, 3), boosted);
    assert_eq!(board.probability(4, 5), boosted);
    // Already-shot neighbor is skipped.
    assert_eq!(board.probability(3, 4), 0.0);
}

#[test]
fn test_boost_clamps_at_one() {
    let mut board = Board::new();
    board.try_place(0, 0, 0, Orientation::Horizontal).unwrap();

    // Hammer (0,1)'s neighborhood: hits at (0,0) and (0,2) plus repeated
    // hits around the corner cell never push saliency past 1.0.
    board.fire(0, 0).unwrap();
    board.fire(0, 2).unwrap();
    assert!(board.probability(0, 1) <= 1.0);

    let mut p = battlesim::UNIFORM_PRIOR;
    for _ in 0..2 {
        p = (p * 1.5).min(1.0);
    }
    assert_eq!(board.probability(0, 1), p);
}

#[test]
fn test_display_markers() {
    let mut board = Board::new();
    board
        .try_place(NUM_SHIPS - 1, 0, 0, Orientation::Horizontal)
        .unwrap();
    board.fire(0, 0).unwrap();
    board.fire(9, 9).unwrap();

    let rendered = format!("{}", board);
    let first_line = rendered.lines().next().unwrap();
    assert!(first_line.starts_with("X P"));
    let last_line = rendered.lines().last().unwrap();
    assert!(last_line.trim_end().ends_with('o'));
}
