use clap::Parser;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, AutomatedPlayer, LogObserver, Match};

/// Play one automated-versus-automated match and print its summary as JSON.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for placement and targeting.
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging();

    let mut game: Match = Match::new(
        Box::new(AutomatedPlayer::new()),
        Box::new(AutomatedPlayer::new()),
        SmallRng::seed_from_u64(args.seed),
    );
    game.run(&mut LogObserver)?;

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
