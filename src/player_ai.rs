use rand::{rngs::SmallRng, Rng};

use crate::{coord::Coordinate, game::TurnView, player::TargetingSource};

/// Automated opponent that fires uniformly at random among the cells it has
/// not shot at yet, so it never produces a rejected target.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl TargetingSource for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        view: &TurnView<'_>,
    ) -> anyhow::Result<Coordinate> {
        let candidates = view.target().unfired();
        if candidates.is_empty() {
            return Err(anyhow::anyhow!("no unfired cells left to target"));
        }
        Ok(candidates[rng.random_range(0..candidates.len())])
    }
}
