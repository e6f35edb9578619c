//! Game loop and simulation driver.

use crate::board::Board;
use crate::common::BoardError;
use crate::strategy::{Strategy, StrategyKind};
use log::{debug, trace};
use rand::rngs::SmallRng;

/// Number of games a single `run_simulation` call averages over.
pub const DEFAULT_NUM_GAMES: usize = 10_000;

/// Play one game to completion: ask the strategy for a target, fire,
/// repeat until every placed ship is sunk. Returns the number of shots.
///
/// A strategy that repeats a cell surfaces here as `AlreadyShot`; that is an
/// internal fault, not a playable condition.
pub fn simulate_game(
    board: &mut Board,
    strategy: &mut dyn Strategy,
    rng: &mut SmallRng,
) -> Result<usize, BoardError> {
    let mut shots = 0;
    while board.ships_remaining() > 0 {
        let (row, col) = strategy.select_target(board, rng);
        let outcome = board.fire(row, col)?;
        shots += 1;
        trace!("shot {} at ({}, {}): {:?}", shots, row, col, outcome);
    }
    Ok(shots)
}

/// Run `games` independent games with the given strategy and return the
/// mean shot count. Every game gets a fresh board and a fresh random fleet
/// placement; only the random stream is shared across games.
pub fn run_simulation(
    kind: StrategyKind,
    games: usize,
    rng: &mut SmallRng,
) -> Result<f64, BoardError> {
    let mut strategy = kind.strategy();
    let mut total_shots = 0usize;
    for _ in 0..games {
        let mut board = Board::new();
        board.place_all_ships(rng);
        total_shots += simulate_game(&mut board, strategy.as_mut(), rng)?;
    }
    let average = total_shots as f64 / games as f64;
    debug!(
        "{}: {} games, {:.2} average shots",
        kind.label(),
        games,
        average
    );
    Ok(average)
}
