use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{AiPlayer, Game, GameConfig, Side};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    sea_battle::init_logging(None);

    let mut game = Game::with_random_fleets(
        &GameConfig::default(),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
        SmallRng::seed_from_u64(seed),
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    let winner = game.play()?;

    let result = json!({
        "winner": winner,
        "shots": {
            "A": game.shots(Side::A),
            "B": game.shots(Side::B),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
