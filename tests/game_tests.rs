use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    AiPlayer, Coordinate, Game, GameConfig, Grid, Orientation, Seat, Ship, ShotError, ShotOutcome,
    Side, TargetingSource, TurnState, TurnView,
};

#[derive(Default)]
struct Record {
    asked: usize,
    rejected: Vec<(Coordinate, ShotError)>,
    results: Vec<(Coordinate, ShotOutcome)>,
    incoming: Vec<(Coordinate, ShotOutcome)>,
    game_over: Option<bool>,
}

/// Fires a fixed list of targets and records every callback.
struct ScriptedPlayer {
    targets: VecDeque<Coordinate>,
    record: Rc<RefCell<Record>>,
}

impl ScriptedPlayer {
    fn new(targets: &[(i32, i32)]) -> (Self, Rc<RefCell<Record>>) {
        let record = Rc::new(RefCell::new(Record::default()));
        let player = Self {
            targets: targets.iter().map(|&t| Coordinate::from(t)).collect(),
            record: record.clone(),
        };
        (player, record)
    }
}

impl TargetingSource for ScriptedPlayer {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _view: &TurnView<'_>,
    ) -> anyhow::Result<Coordinate> {
        self.record.borrow_mut().asked += 1;
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn handle_rejected(&mut self, target: Coordinate, err: ShotError) {
        self.record.borrow_mut().rejected.push((target, err));
    }

    fn handle_shot_result(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.record.borrow_mut().results.push((target, outcome));
    }

    fn handle_opponent_shot(&mut self, target: Coordinate, outcome: ShotOutcome) {
        self.record.borrow_mut().incoming.push((target, outcome));
    }

    fn handle_game_over(&mut self, won: bool) {
        self.record.borrow_mut().game_over = Some(won);
    }
}

fn grid_with(ships: &[(i32, i32, usize, Orientation)]) -> Grid {
    let mut grid = Grid::new(10);
    for &(r, c, len, o) in ships {
        grid.place_ship(Ship::new(Coordinate::new(r, c), len, o))
            .unwrap();
    }
    grid
}

fn scripted_game(
    grid_a: Grid,
    script_a: &[(i32, i32)],
    grid_b: Grid,
    script_b: &[(i32, i32)],
) -> (Game, Rc<RefCell<Record>>, Rc<RefCell<Record>>) {
    let (a, rec_a) = ScriptedPlayer::new(script_a);
    let (b, rec_b) = ScriptedPlayer::new(script_b);
    let game = Game::new(
        Seat::new(grid_a, Box::new(a)),
        Seat::new(grid_b, Box::new(b)),
        SmallRng::seed_from_u64(0),
    );
    (game, rec_a, rec_b)
}

#[test]
fn test_transition_rules() {
    let a = TurnState::Awaiting(Side::A);
    assert_eq!(TurnState::INITIAL, a);
    assert_eq!(a.advance(ShotOutcome::Miss, false), TurnState::Awaiting(Side::B));
    assert_eq!(a.advance(ShotOutcome::Hit, false), a);
    assert_eq!(a.advance(ShotOutcome::Sunk { length: 2 }, false), a);
    assert_eq!(
        a.advance(ShotOutcome::Sunk { length: 2 }, true),
        TurnState::GameOver { winner: Side::A }
    );
    // only a hit can end the game
    assert_eq!(
        TurnState::Awaiting(Side::B).advance(ShotOutcome::Miss, true),
        TurnState::Awaiting(Side::A)
    );
    let over = TurnState::GameOver { winner: Side::B };
    assert_eq!(over.advance(ShotOutcome::Miss, false), over);
    assert!(over.is_over());
}

#[test]
fn test_sinking_last_ship_ends_game_immediately() {
    let grid_a = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let grid_b = grid_with(&[(9, 9, 1, Orientation::Horizontal)]);
    let (mut game, rec_a, rec_b) = scripted_game(grid_a, &[(9, 9)], grid_b, &[]);

    assert_eq!(game.state(), TurnState::Awaiting(Side::A));
    let report = game.step().unwrap();
    assert_eq!(report.side, Side::A);
    assert_eq!(report.outcome, ShotOutcome::Sunk { length: 1 });
    assert_eq!(game.state(), TurnState::GameOver { winner: Side::A });
    assert_eq!(game.winner(), Some(Side::A));

    // side B was never asked for a target
    assert_eq!(rec_b.borrow().asked, 0);
    assert_eq!(rec_a.borrow().game_over, Some(true));
    assert_eq!(rec_b.borrow().game_over, Some(false));
    assert_eq!(
        rec_b.borrow().incoming,
        vec![(Coordinate::new(9, 9), ShotOutcome::Sunk { length: 1 })]
    );

    assert!(game.step().is_err());
    assert_eq!(game.play().unwrap(), Side::A);
}

#[test]
fn test_miss_hands_over_the_turn() {
    let grid_a = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let grid_b = grid_with(&[(9, 9, 1, Orientation::Horizontal)]);
    let (mut game, _rec_a, rec_b) = scripted_game(grid_a, &[(5, 5)], grid_b, &[(0, 0)]);

    let report = game.step().unwrap();
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(game.state(), TurnState::Awaiting(Side::B));

    let report = game.step().unwrap();
    assert_eq!(report.side, Side::B);
    assert_eq!(game.state(), TurnState::GameOver { winner: Side::B });
    assert_eq!(rec_b.borrow().game_over, Some(true));
    assert_eq!(game.shots(Side::A), 1);
    assert_eq!(game.shots(Side::B), 1);
}

#[test]
fn test_hit_grants_extra_shot_and_rejections_are_retried() {
    let grid_a = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let grid_b = grid_with(&[
        (5, 5, 2, Orientation::Horizontal),
        (0, 9, 1, Orientation::Horizontal),
    ]);
    let script_a = [(5, 5), (-1, 0), (10, 0), (5, 5), (5, 6), (2, 2)];
    let (mut game, rec_a, rec_b) = scripted_game(grid_a, &script_a, grid_b, &[(3, 3)]);

    assert_eq!(game.step().unwrap().outcome, ShotOutcome::Hit);
    assert_eq!(game.state(), TurnState::Awaiting(Side::A));

    let report = game.step().unwrap();
    assert_eq!(report.target, Coordinate::new(5, 6));
    assert_eq!(report.outcome, ShotOutcome::Sunk { length: 2 });
    assert_eq!(game.state(), TurnState::Awaiting(Side::A));
    assert_eq!(
        rec_a.borrow().rejected,
        vec![
            (Coordinate::new(-1, 0), ShotError::OutOfBounds),
            (Coordinate::new(10, 0), ShotError::OutOfBounds),
            (Coordinate::new(5, 5), ShotError::AlreadyFired),
        ]
    );

    assert_eq!(game.step().unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(game.state(), TurnState::Awaiting(Side::B));
    assert_eq!(game.step().unwrap().outcome, ShotOutcome::Miss);
    assert_eq!(game.state(), TurnState::Awaiting(Side::A));

    assert_eq!(rec_a.borrow().results.len(), 3);
    assert_eq!(rec_b.borrow().incoming.len(), 3);
    assert_eq!(game.shots(Side::A), 3);
    assert_eq!(game.grid(Side::B).destroyed_count(), 1);
}

#[test]
fn test_source_failure_is_reported() {
    let grid_a = grid_with(&[(0, 0, 1, Orientation::Horizontal)]);
    let grid_b = grid_with(&[(9, 9, 1, Orientation::Horizontal)]);
    let (mut game, _, _) = scripted_game(grid_a, &[], grid_b, &[]);
    assert!(game.play().is_err());
    assert_eq!(game.state(), TurnState::Awaiting(Side::A));
}

#[test]
fn test_ai_vs_ai_game() {
    for seed in [1u64, 123, 9001] {
        let mut game = Game::with_random_fleets(
            &GameConfig::default(),
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
            SmallRng::seed_from_u64(seed),
        )
        .unwrap();
        assert!(!game.grid(Side::B).reveal_ships());

        let winner = game.play().unwrap();
        let loser = winner.opponent();
        assert!(game.grid(loser).is_defeated());
        assert!(!game.grid(winner).is_defeated());
        assert!(game.shots(winner) <= 100);
        assert_eq!(game.shots(Side::A), game.grid(Side::B).fired().len());
        assert_eq!(game.shots(Side::B), game.grid(Side::A).fired().len());
    }
}

#[test]
fn test_ai_never_repeats_a_target() {
    let mut rng = SmallRng::seed_from_u64(4);
    let own = Grid::new(3);
    let mut target = Grid::new(3);
    let mut ai = AiPlayer::new();
    for _ in 0..9 {
        let c = {
            let view = TurnView::new(&own, &target);
            ai.select_target(&mut rng, &view).unwrap()
        };
        assert_eq!(target.fire(c), Ok(ShotOutcome::Miss));
    }
    let view = TurnView::new(&own, &target);
    assert!(ai.select_target(&mut rng, &view).is_err());
}
