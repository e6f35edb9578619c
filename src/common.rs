//! Common engine types: shot outcomes and board errors.

use crate::bitboard::BitBoardError;

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot hit a ship segment that did not finish the ship off.
    Hit,
    /// Shot landed in open water.
    Miss,
    /// Shot hit the last surviving segment of a ship, carrying its name.
    Sunk(&'static str),
}

impl ShotOutcome {
    /// Whether the shot struck a ship segment.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations.
///
/// Placement-attempt failures (`ShipOutOfBounds`, `ShipOverlaps`) are normal
/// rejection-sampling outcomes for the caller to retry. The rest indicate an
/// internal invariant violation.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (invalid size or index).
    BitBoardError(BitBoardError),
    /// Fleet index is out of range.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement extends outside the grid.
    ShipOutOfBounds,
    /// A shot was fired at a cell that was already shot.
    AlreadyShot,
    /// A hit landed on a cell no placed ship occupies.
    UnknownShipHit,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::InvalidIndex => write!(f, "Fleet index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::AlreadyShot => write!(f, "Cell was already fired upon"),
            BoardError::UnknownShipHit => write!(f, "Hit cell is not covered by any placed ship"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
