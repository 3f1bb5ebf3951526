use alloc::vec::Vec;

pub const BOARD_SIZE: usize = 10;

/// Largest supported board edge. Larger requests are clamped by
/// [`Grid::new`](crate::Grid::new) and rejected by [`random_grid`](crate::random_grid).
pub const MAX_BOARD_SIZE: usize = 100;

/// Standard fleet: one four-cell ship, two threes, three twos, four singles.
pub const FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Placement attempts allowed across a whole fleet on one grid.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Fresh grids tried before random placement reports failure.
pub const MAX_FLEET_RETRIES: usize = 100;

/// Per-session settings, defaulting to the constants above.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
    pub max_fleet_retries: usize,
}

impl GameConfig {
    /// Default settings on a board of `size`.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Number of cells the fleet occupies.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_fleet_retries: MAX_FLEET_RETRIES,
        }
    }
}
