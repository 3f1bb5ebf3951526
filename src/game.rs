//! Turn controller: alternates sides, grants extra shots on hits and detects
//! the end of the game.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    common::{FleetError, ShotOutcome},
    config::GameConfig,
    coord::Coordinate,
    fleet,
    grid::Grid,
    player::TargetingSource,
};

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => write!(f, "A"),
            Side::B => write!(f, "B"),
        }
    }
}

/// Whose move it is, or who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Awaiting(Side),
    GameOver { winner: Side },
}

impl TurnState {
    /// Side A always moves first.
    pub const INITIAL: TurnState = TurnState::Awaiting(Side::A);

    /// State after the side to move fired a legal shot.
    ///
    /// A miss hands over the turn. A hit or sink keeps it, unless the
    /// opponent's fleet is now gone.
    pub fn advance(self, outcome: ShotOutcome, opponent_defeated: bool) -> TurnState {
        match self {
            TurnState::GameOver { .. } => self,
            TurnState::Awaiting(side) if !outcome.is_hit() => TurnState::Awaiting(side.opponent()),
            TurnState::Awaiting(side) if opponent_defeated => TurnState::GameOver { winner: side },
            TurnState::Awaiting(_) => self,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, TurnState::GameOver { .. })
    }
}

/// A side's own grid together with whatever picks its targets.
pub struct Seat {
    grid: Grid,
    source: Box<dyn TargetingSource>,
    shots: usize,
}

impl Seat {
    pub fn new(grid: Grid, source: Box<dyn TargetingSource>) -> Self {
        Self {
            grid,
            source,
            shots: 0,
        }
    }
}

/// One legal shot as resolved by [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub side: Side,
    pub target: Coordinate,
    pub outcome: ShotOutcome,
}

/// Read-only view of the opponent grid handed to targeting sources. Ship
/// positions are not exposed.
#[derive(Clone, Copy)]
pub struct TargetView<'a> {
    grid: &'a Grid,
}

impl<'a> TargetView<'a> {
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn is_fired(&self, c: Coordinate) -> bool {
        self.grid.is_fired(c)
    }

    pub fn unfired(&self) -> Vec<Coordinate> {
        self.grid.unfired()
    }

    pub fn ships_afloat(&self) -> usize {
        self.grid.ships_afloat()
    }
}

impl fmt::Display for TargetView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.grid, f)
    }
}

/// What a side sees when asked for a target.
pub struct TurnView<'a> {
    own: &'a Grid,
    target: TargetView<'a>,
}

impl<'a> TurnView<'a> {
    pub fn new(own: &'a Grid, opponent: &'a Grid) -> Self {
        Self {
            own,
            target: TargetView { grid: opponent },
        }
    }

    /// The side's own fleet.
    pub fn own_grid(&self) -> &'a Grid {
        self.own
    }

    /// The grid being fired at.
    pub fn target(&self) -> TargetView<'a> {
        self.target
    }
}

/// A game session between two seats.
pub struct Game {
    seats: [Seat; 2],
    state: TurnState,
    rng: SmallRng,
}

impl Game {
    pub fn new(seat_a: Seat, seat_b: Seat, rng: SmallRng) -> Self {
        Self {
            seats: [seat_a, seat_b],
            state: TurnState::INITIAL,
            rng,
        }
    }

    /// Start a game with randomly placed fleets. Side B's grid is hidden
    /// from view, matching a human A playing an automated B.
    pub fn with_random_fleets(
        config: &GameConfig,
        source_a: Box<dyn TargetingSource>,
        source_b: Box<dyn TargetingSource>,
        mut rng: SmallRng,
    ) -> Result<Self, FleetError> {
        let grid_a = fleet::random_grid(&mut rng, config)?;
        let mut grid_b = fleet::random_grid(&mut rng, config)?;
        grid_b.set_reveal_ships(false);
        Ok(Self::new(
            Seat::new(grid_a, source_a),
            Seat::new(grid_b, source_b),
            rng,
        ))
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn grid(&self, side: Side) -> &Grid {
        &self.seats[side.index()].grid
    }

    /// Reveal or hide a side's ships in rendered output.
    pub fn set_reveal_ships(&mut self, side: Side, reveal: bool) {
        self.seats[side.index()].grid.set_reveal_ships(reveal);
    }

    /// Legal shots fired by `side` so far.
    pub fn shots(&self, side: Side) -> usize {
        self.seats[side.index()].shots
    }

    pub fn winner(&self) -> Option<Side> {
        match self.state {
            TurnState::GameOver { winner } => Some(winner),
            TurnState::Awaiting(_) => None,
        }
    }

    /// Resolve one legal shot by the side to move.
    ///
    /// Targets rejected by the opponent grid are reported back to the source
    /// and a new target is requested until one is accepted.
    pub fn step(&mut self) -> anyhow::Result<ShotReport> {
        let side = match self.state {
            TurnState::Awaiting(side) => side,
            TurnState::GameOver { winner } => {
                return Err(anyhow::anyhow!("game is already over, side {} won", winner))
            }
        };
        let rng = &mut self.rng;
        let (me, them) = seats_for(&mut self.seats, side);

        let (target, outcome) = loop {
            let target = {
                let view = TurnView::new(&me.grid, &them.grid);
                me.source.select_target(rng, &view)?
            };
            match them.grid.fire(target) {
                Ok(outcome) => break (target, outcome),
                Err(err) => {
                    debug!("side {} target {} rejected: {}", side, target, err);
                    me.source.handle_rejected(target, err);
                }
            }
        };

        me.shots += 1;
        me.source.handle_shot_result(target, outcome);
        them.source.handle_opponent_shot(target, outcome);
        debug!("side {} fired at {}: {:?}", side, target, outcome);

        self.state = self.state.advance(outcome, them.grid.is_defeated());
        if let TurnState::GameOver { winner } = self.state {
            info!("side {} wins after {} shots", winner, me.shots);
            me.source.handle_game_over(true);
            them.source.handle_game_over(false);
        }
        Ok(ShotReport {
            side,
            target,
            outcome,
        })
    }

    /// Play until one fleet is destroyed and return the winner.
    pub fn play(&mut self) -> anyhow::Result<Side> {
        loop {
            if let Some(winner) = self.winner() {
                return Ok(winner);
            }
            self.step()?;
        }
    }
}

/// Split the seats into (side to move, opponent).
fn seats_for(seats: &mut [Seat; 2], side: Side) -> (&mut Seat, &mut Seat) {
    let [a, b] = seats;
    match side {
        Side::A => (a, b),
        Side::B => (b, a),
    }
}
