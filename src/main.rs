use anyhow::Context;
use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{greet, init_logging, AutomatedPlayer, ConsoleObserver, HumanPlayer, Match};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let rng = match cli.seed {
        Some(s) => {
            log::info!("using fixed seed {s}");
            SmallRng::seed_from_u64(s)
        }
        None => SmallRng::from_rng(&mut rand::rng()),
    };

    let mut game: Match = Match::new(
        Box::new(HumanPlayer::stdio()),
        Box::new(AutomatedPlayer::new()),
        rng,
    );
    greet();
    game.run(&mut ConsoleObserver::stdout()).context("match aborted")?;
    Ok(())
}
