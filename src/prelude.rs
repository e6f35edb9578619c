//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_simulation, simulate_game, Board, BoardError, HuntAndTarget, Orientation, PdfSearch,
    RandomSearch, ShotOutcome, Strategy, StrategyKind,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
