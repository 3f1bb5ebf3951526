//! Ship geometry and damage tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::ShipError;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Cells run along the bow's row, columns increasing.
    Horizontal,
    /// Cells run along the bow's column, rows increasing.
    Vertical,
}

/// A straight run of `length` cells anchored at its bow.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create an undamaged ship. Placement rules are enforced by the grid.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        Self {
            bow,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// Cells covered by the ship, starting at the bow.
    ///
    /// Stops early when a cell would leave the `i32` coordinate range, so the
    /// result can be shorter than `length`; the grid rejects such ships.
    pub fn occupied_cells(&self) -> Vec<Coordinate> {
        (0..self.length)
            .map_while(|i| {
                let i = i32::try_from(i).ok()?;
                self.bow.step(self.orientation, i)
            })
            .collect()
    }

    /// Whether `target` is one of the ship's cells.
    pub fn is_hit(&self, target: Coordinate) -> bool {
        let (same_line, from, to) = match self.orientation {
            Orientation::Horizontal => (target.row == self.bow.row, self.bow.col, target.col),
            Orientation::Vertical => (target.col == self.bow.col, self.bow.row, target.row),
        };
        if !same_line || to < from {
            return false;
        }
        // i64 holds the distance between any two i32 values.
        let offset = (i64::from(to) - i64::from(from)) as u64;
        offset < self.length as u64
    }

    /// Take one point of damage. The caller has already checked that the
    /// shot landed on this ship.
    pub fn register_hit(&mut self) -> Result<(), ShipError> {
        if self.remaining_hits == 0 {
            return Err(ShipError::AlreadySunk);
        }
        self.remaining_hits -= 1;
        Ok(())
    }

    /// `true` once every cell has been hit.
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: {}, length: {}, orientation: {:?}, remaining_hits: {} }}",
            self.bow, self.length, self.orientation, self.remaining_hits,
        )
    }
}
