//! Cell-selection strategies behind a common trait.
//!
//! Each strategy is a pure function of the current board: nothing is cached
//! between shots, so the hunt frontier and the saliency ranking are
//! re-derived from board state on every call.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use crate::board::{Board, NEIGHBOR_OFFSETS};
use crate::config::GRID_SIZE;
use rand::rngs::SmallRng;
use rand::Rng;

/// Interface shared by all targeting strategies. Implementations must return
/// an unshot cell; the driver treats a repeated cell as a fatal fault.
pub trait Strategy {
    /// Human-readable label, used in emitted records.
    fn name(&self) -> &'static str;

    /// Choose the next cell to fire upon.
    fn select_target(&mut self, board: &Board, rng: &mut SmallRng) -> (usize, usize);
}

/// Uniform random search: rejection-samples coordinates until an unshot cell
/// turns up. Unbounded loop; at most 99 of 100 cells can be shot before the
/// game ends, so acceptance probability never reaches zero.
pub struct RandomSearch;

impl Strategy for RandomSearch {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn select_target(&mut self, board: &Board, rng: &mut SmallRng) -> (usize, usize) {
        loop {
            let row = rng.random_range(0..GRID_SIZE);
            let col = rng.random_range(0..GRID_SIZE);
            if !board.is_shot(row, col).unwrap_or(true) {
                return (row, col);
            }
        }
    }
}

/// Saliency-guided search: picks the unshot cell with the strictly highest
/// probability value, first-encountered in row-major order on ties.
pub struct PdfSearch;

impl Strategy for PdfSearch {
    fn name(&self) -> &'static str {
        "PDF"
    }

    fn select_target(&mut self, board: &Board, _rng: &mut SmallRng) -> (usize, usize) {
        let mut best = (0, 0);
        let mut max_prob = -1.0;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if board.is_shot(row, col).unwrap_or(true) {
                    continue;
                }
                let p = board.probability(row, col);
                if p > max_prob {
                    max_prob = p;
                    best = (row, col);
                }
            }
        }
        best
    }
}

/// Hunt-and-target: scans row-major for any hit cell and fires at its first
/// unshot orthogonal neighbor (up, down, left, right). With no open frontier
/// it degrades to uniform random search.
pub struct HuntAndTarget;

impl Strategy for HuntAndTarget {
    fn name(&self) -> &'static str {
        "Hunt and Target"
    }

    fn select_target(&mut self, board: &Board, rng: &mut SmallRng) -> (usize, usize) {
        for (row, col) in board.hits().iter_set_bits() {
            for (dr, dc) in NEIGHBOR_OFFSETS {
                let nr = row as isize + dr;
                let nc = col as isize + dc;
                if nr < 0 || nr >= GRID_SIZE as isize || nc < 0 || nc >= GRID_SIZE as isize {
                    continue;
                }
                let (nr, nc) = (nr as usize, nc as usize);
                if !board.is_shot(nr, nc).unwrap_or(true) {
                    return (nr, nc);
                }
            }
        }
        RandomSearch.select_target(board, rng)
    }
}

/// Strategy selector used at the driver boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum StrategyKind {
    Random,
    Pdf,
    HuntTarget,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::Pdf,
        StrategyKind::HuntTarget,
    ];

    /// Instantiate the strategy this selector names.
    pub fn strategy(&self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomSearch),
            StrategyKind::Pdf => Box::new(PdfSearch),
            StrategyKind::HuntTarget => Box::new(HuntAndTarget),
        }
    }

    /// Label matching the emitted record format.
    pub fn label(&self) -> &'static str {
        match self {
            StrategyKind::Random => "Random",
            StrategyKind::Pdf => "PDF",
            StrategyKind::HuntTarget => "Hunt and Target",
        }
    }
}

impl core::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
