use battleships::{
    init_logging, rng_from_seed, AiPlayer, Match, MatchConfig, DEFAULT_SHIP_CAPACITY,
};
use clap::Parser;

/// Play one headless match with the computer in both seats and print a JSON summary.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for layouts and guesses.
    seed: u64,
    #[arg(long, default_value_t = 5)]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_SHIP_CAPACITY)]
    ships: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();

    let mut rng = rng_from_seed(Some(args.seed));
    let config = MatchConfig::new(args.size, args.ships, "Simulated")
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut game = Match::with_random_layout(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut human_seat = AiPlayer::new();
    let mut ai_seat = AiPlayer::new();
    game.play(&mut human_seat, &mut ai_seat, &mut rng)
        .map_err(|e| anyhow::anyhow!(e))?;

    println!("{}", serde_json::to_string(&game.summary())?);
    Ok(())
}
