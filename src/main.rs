use sea_battle::{
    init_logging, AiPlayer, CliPlayer, Game, GameConfig, Side, BOARD_SIZE, MAX_BOARD_SIZE,
};

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true)]
    log_level: Option<LevelFilter>,
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{}", e))?;
    if size == 0 || size > MAX_BOARD_SIZE {
        return Err(format!("board size must be in 1..={}", MAX_BOARD_SIZE));
    }
    Ok(size)
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer. You move first.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, value_parser = parse_size)]
        size: usize,
    },
    /// Watch two computer players fight it out.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, value_parser = parse_size)]
        size: usize,
    },
}

fn session_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn greet() {
    println!("-------------------");
    println!("  Welcome to       ");
    println!("    Sea Battle     ");
    println!("-------------------");
    println!(" input format: r c ");
    println!(" r - row number    ");
    println!(" c - column number ");
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    match cli.command {
        Commands::Play { seed, size } => {
            let rng = session_rng(seed);
            let config = GameConfig::with_size(size);
            let mut game = Game::with_random_fleets(
                &config,
                Box::new(CliPlayer::stdio()),
                Box::new(AiPlayer::new()),
                rng,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            greet();
            let winner = game.play()?;
            println!("{}", "-".repeat(20));
            println!("Computer board:");
            game.set_reveal_ships(Side::B, true);
            print!("{}", game.grid(Side::B));
            match winner {
                Side::A => println!("You won!"),
                Side::B => println!("The computer won!"),
            }
        }
        Commands::Watch { seed, size } => {
            let rng = session_rng(seed);
            let config = GameConfig::with_size(size);
            let mut game = Game::with_random_fleets(
                &config,
                Box::new(AiPlayer::new()),
                Box::new(AiPlayer::new()),
                rng,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            game.set_reveal_ships(Side::B, true);
            while game.winner().is_none() {
                let report = game.step()?;
                println!(
                    "Side {} fires at ({}, {}): {}",
                    report.side,
                    report.target.row + 1,
                    report.target.col + 1,
                    report.outcome
                );
            }
            for side in [Side::A, Side::B] {
                println!("{}", "-".repeat(20));
                println!("Side {} board ({} shots fired):", side, game.shots(side));
                print!("{}", game.grid(side));
            }
            if let Some(winner) = game.winner() {
                println!("Side {} wins!", winner);
            }
        }
    }
    Ok(())
}
