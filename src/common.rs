//! Common types: board coordinates, move outcomes and board errors.

use crate::ship::ShipType;

/// A coordinate on a board: `x` is the column, `y` the row, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl core::fmt::Display for Point {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let col = (b'A' + self.x as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}

/// Outcome of a single fired move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Out of bounds, or re-fired at an already hit segment. No state change.
    InvalidMove,
    /// Move landed on an empty cell.
    Miss,
    /// Move hit a ship segment; the ship has unhit segments left.
    Hit,
    /// Move sank a whole ship, carrying its type.
    HitAndDrown(ShipType),
    /// Move sank the last remaining ship on the board, carrying its type.
    PlayerWon(ShipType),
}

/// Errors returned by board construction and ship placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Ship origin lies outside the board.
    ShipOutOfBounds,
    /// Ship would overhang the board edge.
    ShipOverhangs,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// The requested fleet cannot fit on a board of this size.
    InfeasibleFleet,
    /// Random placement ran out of attempts.
    UnableToPlaceShip,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::ShipOutOfBounds => write!(f, "Ship origin is outside the board"),
            BoardError::ShipOverhangs => write!(f, "Ship would overhang the board edge"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::InfeasibleFleet => write!(f, "Fleet cannot fit on a board of this size"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

impl std::error::Error for BoardError {}
