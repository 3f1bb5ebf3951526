//! Shot outcomes and the error types returned by grid, ship and fleet operations.

use core::fmt;

use crate::config::MAX_BOARD_SIZE;

/// Result of a legal shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot damaged a ship that is still afloat.
    Hit,
    /// Shot destroyed a ship, carrying its length.
    Sunk { length: usize },
    /// Shot landed on open water.
    Miss,
}

impl ShotOutcome {
    /// Hits and sinks both grant the shooter another shot.
    pub fn is_hit(&self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotOutcome::Hit => write!(f, "Ship damaged!"),
            ShotOutcome::Sunk { length } => write!(f, "Ship of length {} destroyed!", length),
            ShotOutcome::Miss => write!(f, "Miss!"),
        }
    }
}

/// Errors returned by [`Grid::place_ship`](crate::Grid::place_ship).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Some cell of the ship lies outside the grid.
    OutOfBounds,
    /// Some cell is occupied by, or touches, an existing ship.
    Overlap,
    /// Ships must cover at least one cell.
    ZeroLength,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "Ship placement is out of bounds"),
            PlacementError::Overlap => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            PlacementError::ZeroLength => write!(f, "Ship must have a positive length"),
        }
    }
}

/// Errors returned by [`Grid::fire`](crate::Grid::fire). Both leave the grid unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotError {
    /// Target lies outside the grid.
    OutOfBounds,
    /// Target was already fired upon in this game.
    AlreadyFired,
}

impl fmt::Display for ShotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotError::OutOfBounds => write!(f, "You are trying to shoot off the board!"),
            ShotError::AlreadyFired => write!(f, "You have already fired at this cell"),
        }
    }
}

/// Errors returned by [`Ship::register_hit`](crate::Ship::register_hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// No hit points left to remove.
    AlreadySunk,
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::AlreadySunk => write!(f, "Ship is already sunk"),
        }
    }
}

/// Random fleet placement gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleetError {
    /// The attempt budget for one grid ran out after placing `placed` ships.
    AttemptsExhausted { placed: usize, attempts: usize },
    /// Every fresh grid ran out of attempts.
    NoLayoutFound { retries: usize },
    /// The board size is zero or above `MAX_BOARD_SIZE`.
    InvalidSize { size: usize },
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::AttemptsExhausted { placed, attempts } => write!(
                f,
                "Gave up after {} placement attempts with {} ships placed",
                attempts, placed
            ),
            FleetError::NoLayoutFound { retries } => {
                write!(f, "No fleet layout found on {} fresh grids", retries)
            }
            FleetError::InvalidSize { size } => write!(
                f,
                "Board size {} is outside 1..={}",
                size, MAX_BOARD_SIZE
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for ShotError {}
#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
#[cfg(feature = "std")]
impl std::error::Error for FleetError {}
