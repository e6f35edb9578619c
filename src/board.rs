//! Single-player game board: ship placements, shot bookkeeping, and the
//! adjacency-boosted saliency field that guides probability-driven search.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{ADJACENCY_BOOST, FLEET, GRID_SIZE, NUM_SHIPS, UNIFORM_PRIOR};
use crate::ship::{Orientation, Ship};
use core::fmt;
use rand::Rng;

type BB = BitBoard<u128, GRID_SIZE>;

/// Orthogonal neighbor offsets in the fixed scan order up, down, left, right.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Mutable state of one simulated game. Built fresh per game, discarded at
/// the end; nothing persists across games.
pub struct Board {
    ships: [Option<Ship<u128, GRID_SIZE>>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
    shots: BB,
    // Saliency values are only meaningful for unshot cells. Kept separate
    // from the cell markers: the sunk check reads markers after saliency has
    // already been rewritten within the same shot.
    prob: [[f64; GRID_SIZE]; GRID_SIZE],
    ships_remaining: usize,
}

impl Board {
    /// Empty board: no ships placed, nothing shot, uniform saliency prior.
    pub fn new() -> Self {
        let empty = BB::new();
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: empty,
            hits: empty,
            misses: empty,
            shots: empty,
            prob: [[UNIFORM_PRIOR; GRID_SIZE]; GRID_SIZE],
            ships_remaining: 0,
        }
    }

    /// Number of placed ships not yet fully sunk. Zero both for a board with
    /// no ships and for a finished game.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// Whether (row, col) has already been fired upon.
    pub fn is_shot(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.shots.get(row, col)?)
    }

    /// Current saliency of a cell. Zero once the cell has been shot.
    pub fn probability(&self, row: usize, col: usize) -> f64 {
        self.prob[row][col]
    }

    /// Occupancy mask of all placed ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    /// Mask of all hits recorded so far.
    pub fn hits(&self) -> BB {
        self.hits
    }

    /// Mask of all misses recorded so far.
    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Mask of all cells fired upon so far.
    pub fn shots(&self) -> BB {
        self.shots
    }

    /// Placed ships, indexed by fleet position.
    pub fn ships(&self) -> &[Option<Ship<u128, GRID_SIZE>>; NUM_SHIPS] {
        &self.ships
    }

    /// Attempt to place fleet member `ship_index` at (row, col) with the
    /// given orientation. Rejects out-of-bounds spans and overlaps without
    /// mutating anything; rejection here is the expected outcome of a failed
    /// sampling attempt, not a fault.
    pub fn try_place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::<u128, GRID_SIZE>::new(FLEET[ship_index], orientation, row, col)?;
        let mask = ship.mask();
        if !(self.ship_map & mask).is_empty() {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= mask;
        self.ships[ship_index] = Some(ship);
        self.ships_remaining += 1;
        Ok(())
    }

    /// Place the whole fleet by rejection sampling: draw a uniformly random
    /// origin anywhere on the grid and a random orientation, retrying each
    /// ship until a placement sticks. The loop is deliberately unbounded;
    /// with 17 occupied cells on a 100-cell grid the acceptance rate stays
    /// high and a retry cap could only introduce spurious failures.
    pub fn place_all_ships<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for i in 0..NUM_SHIPS {
            loop {
                let row = rng.random_range(0..GRID_SIZE);
                let col = rng.random_range(0..GRID_SIZE);
                let orientation = if rng.random() {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                match self.try_place(i, row, col, orientation) {
                    Ok(()) => break,
                    Err(BoardError::ShipOutOfBounds) | Err(BoardError::ShipOverlaps) => continue,
                    // try_place cannot fail any other way for a fresh index
                    Err(_) => unreachable!("placement invariant violated"),
                }
            }
        }
    }

    /// Resolve a shot at (row, col).
    ///
    /// Marks the cell shot and zeroes its saliency. On a hit, each in-bounds
    /// unshot orthogonal neighbor has its saliency multiplied by
    /// [`ADJACENCY_BOOST`], saturating at 1.0, and the owning ship's hit
    /// mask is updated; sinking its last segment decrements the remaining
    /// count. Firing twice at one cell is an internal invariant fault.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        if self.shots.get(row, col)? {
            return Err(BoardError::AlreadyShot);
        }
        self.shots.set(row, col)?;
        self.prob[row][col] = 0.0;

        if !self.ship_map.get(row, col)? {
            self.misses.set(row, col)?;
            return Ok(ShotOutcome::Miss);
        }

        self.hits.set(row, col)?;
        self.boost_neighbors(row, col);

        for slot in self.ships.iter_mut() {
            if let Some(ship) = slot {
                if ship.record_hit(row, col) {
                    if ship.is_sunk() {
                        self.ships_remaining -= 1;
                        return Ok(ShotOutcome::Sunk(ship.class().name()));
                    }
                    return Ok(ShotOutcome::Hit);
                }
            }
        }
        // ship_map said occupied but no placed ship claims the cell
        Err(BoardError::UnknownShipHit)
    }

    fn boost_neighbors(&mut self, row: usize, col: usize) {
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let nr = row as isize + dr;
            let nc = col as isize + dc;
            if nr < 0 || nr >= GRID_SIZE as isize || nc < 0 || nc >= GRID_SIZE as isize {
                continue;
            }
            let (nr, nc) = (nr as usize, nc as usize);
            if self.shots.get(nr, nc).unwrap_or(true) {
                continue;
            }
            let boosted = self.prob[nr][nc] * ADJACENCY_BOOST;
            self.prob[nr][nc] = if boosted > 1.0 { 1.0 } else { boosted };
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the grid with ship symbols, `X` for hits, `o` for misses and `.`
/// for open water. Debugging aid only.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let marker = if self.hits.get(r, c).unwrap_or(false) {
                    'X'
                } else if self.misses.get(r, c).unwrap_or(false) {
                    'o'
                } else {
                    self.ships
                        .iter()
                        .flatten()
                        .find(|s| s.occupies(r, c))
                        .map(|s| s.class().symbol())
                        .unwrap_or('.')
                };
                write!(f, "{} ", marker)?;
            }
            if r + 1 < GRID_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ ships_remaining: {}, shots: {}, hits: {}, misses: {} }}",
            self.ships_remaining,
            self.shots.count_ones(),
            self.hits.count_ones(),
            self.misses.count_ones(),
        )?;
        fmt::Display::fmt(self, f)
    }
}
