use crate::{
    common::{ShotError, ShotOutcome},
    coord::Coordinate,
    game::TurnView,
};
use rand::rngs::SmallRng;

/// Interface implemented by anything that picks targets for a side.
///
/// The turn controller asks for a target, fires it at the opponent grid and
/// asks again for as long as the grid rejects the coordinate.
pub trait TargetingSource {
    /// Choose the next coordinate to fire at.
    fn select_target(&mut self, rng: &mut SmallRng, view: &TurnView<'_>)
        -> anyhow::Result<Coordinate>;

    /// The last target was rejected; another one will be requested.
    fn handle_rejected(&mut self, _target: Coordinate, _err: ShotError) {}

    /// Inform the source of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the source of an opponent shot against its own grid.
    fn handle_opponent_shot(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// The game ended.
    fn handle_game_over(&mut self, _won: bool) {}
}
