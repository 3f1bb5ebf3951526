//! Grid coordinates.

use core::fmt;

use crate::ship::Orientation;

/// Offsets of the eight cells surrounding a coordinate.
const RING: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A `(row, col)` position. Signed so that off-board targets are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Coordinate `n` cells away along `orientation`, or `None` if that
    /// lies outside the `i32` range.
    pub fn step(self, orientation: Orientation, n: i32) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => Some(Self::new(self.row, self.col.checked_add(n)?)),
            Orientation::Vertical => Some(Self::new(self.row.checked_add(n)?, self.col)),
        }
    }

    /// The surrounding coordinates, not filtered by any board bounds. Fewer
    /// than eight at the edge of the `i32` range.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        RING.iter().filter_map(move |&(dr, dc)| {
            Some(Coordinate::new(
                self.row.checked_add(dr)?,
                self.col.checked_add(dc)?,
            ))
        })
    }

    /// Chessboard distance: diagonal neighbours are at distance 1.
    pub fn chebyshev_distance(self, other: Coordinate) -> u32 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr.max(dc)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
