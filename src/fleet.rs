//! Random fleet placement with a bounded number of attempts.

use log::{debug, warn};
use rand::Rng;

use crate::common::FleetError;
use crate::config::{GameConfig, MAX_BOARD_SIZE};
use crate::coord::Coordinate;
use crate::grid::Grid;
use crate::ship::{Orientation, Ship};

/// Draw a ship of `length` with a random bow anywhere on the grid and a
/// random orientation. It may well not fit; the grid decides.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, size: usize, length: usize) -> Ship {
    let n = size.clamp(1, MAX_BOARD_SIZE) as i32;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let bow = Coordinate::new(rng.random_range(0..n), rng.random_range(0..n));
    Ship::new(bow, length, orientation)
}

/// Place ships of the given `lengths` onto `grid`, retrying rejected
/// placements. `max_attempts` bounds the total number of tries for the
/// whole fleet; on exhaustion the grid holds a partial fleet and should be
/// discarded.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    lengths: &[usize],
    max_attempts: usize,
) -> Result<(), FleetError> {
    let mut attempts = 0;
    for (placed, &length) in lengths.iter().enumerate() {
        loop {
            if attempts >= max_attempts {
                return Err(FleetError::AttemptsExhausted { placed, attempts });
            }
            attempts += 1;
            let ship = random_ship(rng, grid.size(), length);
            if grid.place_ship(ship).is_ok() {
                break;
            }
        }
    }
    debug!("fleet of {} placed in {} attempts", lengths.len(), attempts);
    Ok(())
}

/// Build a grid holding the configured fleet, starting over on a fresh grid
/// whenever a layout runs out of attempts.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Grid, FleetError> {
    if config.size == 0 || config.size > MAX_BOARD_SIZE {
        return Err(FleetError::InvalidSize { size: config.size });
    }
    for retry in 0..config.max_fleet_retries {
        let mut grid = Grid::new(config.size);
        match place_fleet(rng, &mut grid, &config.fleet, config.max_placement_attempts) {
            Ok(()) => return Ok(grid),
            Err(e) => warn!("fleet layout {} abandoned: {}", retry + 1, e),
        }
    }
    Err(FleetError::NoLayoutFound {
        retries: config.max_fleet_retries,
    })
}
