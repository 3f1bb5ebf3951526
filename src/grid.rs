//! One side's playing field: ship placement, shot resolution and damage state.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use log::{debug, warn};

use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::coord::Coordinate;
use crate::ship::Ship;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Water around a sunk ship. Cosmetic only; still a legal target.
    Contour,
}

/// Comparable snapshot of everything a grid tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    pub size: usize,
    pub cells: Vec<Cell>,
    pub ships: Vec<Ship>,
    pub blocked: BTreeSet<Coordinate>,
    pub fired: BTreeSet<Coordinate>,
    pub destroyed_count: usize,
}

/// An `size × size` field holding a fleet and the shots taken at it.
///
/// Cells are only ever written through [`Grid::place_ship`] and [`Grid::fire`].
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    blocked: BTreeSet<Coordinate>,
    fired: BTreeSet<Coordinate>,
    destroyed_count: usize,
    reveal_ships: bool,
}

impl Grid {
    /// Create an empty grid with ships revealed. `size` is capped at
    /// [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_BOARD_SIZE);
        Grid {
            size,
            cells: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            blocked: BTreeSet::new(),
            fired: BTreeSet::new(),
            destroyed_count: 0,
            reveal_ships: true,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `c` lies inside `[0, size)` on both axes.
    pub fn contains(&self, c: Coordinate) -> bool {
        let n = self.size as i64;
        (0..n).contains(&(c.row as i64)) && (0..n).contains(&(c.col as i64))
    }

    /// Cell state at `c`, or `None` off the board.
    pub fn cell(&self, c: Coordinate) -> Option<Cell> {
        self.index(c).map(|i| self.cells[i])
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Coordinates where no further ship may be placed.
    pub fn blocked(&self) -> &BTreeSet<Coordinate> {
        &self.blocked
    }

    /// Coordinates already shot at.
    pub fn fired(&self) -> &BTreeSet<Coordinate> {
        &self.fired
    }

    pub fn is_fired(&self, c: Coordinate) -> bool {
        self.fired.contains(&c)
    }

    pub fn destroyed_count(&self) -> usize {
        self.destroyed_count
    }

    /// Ships not yet sunk.
    pub fn ships_afloat(&self) -> usize {
        self.ships.len() - self.destroyed_count
    }

    pub fn reveal_ships(&self) -> bool {
        self.reveal_ships
    }

    /// Whether renderers draw intact ship cells.
    pub fn set_reveal_ships(&mut self, reveal: bool) {
        self.reveal_ships = reveal;
    }

    /// In-bounds coordinates that have not been fired upon, in row-major order.
    pub fn unfired(&self) -> Vec<Coordinate> {
        // `size` never exceeds MAX_BOARD_SIZE, so it fits in an i32.
        let n = self.size as i32;
        (0..n)
            .flat_map(|row| (0..n).map(move |col| Coordinate::new(row, col)))
            .filter(|c| !self.fired.contains(c))
            .collect()
    }

    /// Add `ship` to the grid. Ships may neither overlap nor touch, even
    /// diagonally. On error the grid is left untouched.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        if ship.length() == 0 {
            return Err(PlacementError::ZeroLength);
        }
        if ship.length() > self.size {
            return Err(PlacementError::OutOfBounds);
        }
        let cells = ship.occupied_cells();
        if cells.len() != ship.length() {
            return Err(PlacementError::OutOfBounds);
        }
        for &c in &cells {
            if !self.contains(c) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.blocked.contains(&c) {
                return Err(PlacementError::Overlap);
            }
        }

        for &c in &cells {
            if let Some(i) = self.index(c) {
                self.cells[i] = Cell::Ship;
            }
            self.blocked.insert(c);
        }
        // The buffer is fixed now; later ships never widen it.
        for &c in &cells {
            for n in c.neighbors() {
                if self.contains(n) {
                    self.blocked.insert(n);
                }
            }
        }
        debug!("placed {:?}", ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// Every coordinate can be fired upon once per game. Errors leave the
    /// grid unchanged.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, ShotError> {
        let idx = self.index(target).ok_or(ShotError::OutOfBounds)?;
        if self.fired.contains(&target) {
            return Err(ShotError::AlreadyFired);
        }

        let Some(ship_idx) = self.ships.iter().position(|s| s.is_hit(target)) else {
            self.fired.insert(target);
            self.cells[idx] = Cell::Miss;
            debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        if let Err(e) = self.ships[ship_idx].register_hit() {
            warn!("unfired cell {} belongs to a ship with no hit points left: {}", target, e);
        }
        self.fired.insert(target);
        self.cells[idx] = Cell::Hit;

        let ship = &self.ships[ship_idx];
        if !ship.is_sunk() {
            debug!("shot at {} hit {:?}", target, ship);
            return Ok(ShotOutcome::Hit);
        }

        let length = ship.length();
        let cells = ship.occupied_cells();
        self.destroyed_count += 1;
        self.mark_contour(&cells);
        debug!(
            "shot at {} sank a ship of length {} ({} of {} destroyed)",
            target,
            length,
            self.destroyed_count,
            self.ships.len()
        );
        Ok(ShotOutcome::Sunk { length })
    }

    /// `true` once every ship is sunk. Trivially true for a grid without ships.
    pub fn is_defeated(&self) -> bool {
        self.destroyed_count == self.ships.len()
    }

    /// Snapshot of the full grid state.
    pub fn state(&self) -> GridState {
        GridState {
            size: self.size,
            cells: self.cells.clone(),
            ships: self.ships.clone(),
            blocked: self.blocked.clone(),
            fired: self.fired.clone(),
            destroyed_count: self.destroyed_count,
        }
    }

    fn mark_contour(&mut self, cells: &[Coordinate]) {
        for &c in cells {
            for n in c.neighbors() {
                if let Some(i) = self.index(n) {
                    if self.cells[i] == Cell::Empty {
                        self.cells[i] = Cell::Contour;
                    }
                }
            }
        }
    }

    fn index(&self, c: Coordinate) -> Option<usize> {
        if self.contains(c) {
            Some(c.row as usize * self.size + c.col as usize)
        } else {
            None
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(BOARD_SIZE)
    }
}

impl From<&Grid> for GridState {
    fn from(grid: &Grid) -> Self {
        grid.state()
    }
}
