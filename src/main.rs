#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleships::{
    health, health_port_from_env, init_logging, rng_from_seed, AiPlayer, Console, ConsolePlayer,
    Match, MatchConfig, MatchError, DEFAULT_SHIP_CAPACITY,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use std::io;
#[cfg(feature = "std")]
use std::net::SocketAddr;

/// Play Battleships against the computer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Your display name (prompted when omitted)")]
    name: Option<String>,
    #[arg(long, help = "Board size between 5 and 10 (prompted when omitted)")]
    size: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_SHIP_CAPACITY, help = "Ships per side")]
    ships: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Port for the liveness responder [default: $PORT or 8000]")]
    health_port: Option<u16>,
    #[arg(long, help = "Do not start the liveness responder")]
    no_health: bool,
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Kept alive for the whole game; dropped with the runtime on exit.
    let _health = if cli.no_health {
        None
    } else {
        let port = cli.health_port.unwrap_or_else(health_port_from_env);
        match health::spawn(SocketAddr::from(([0, 0, 0, 0], port))).await {
            Ok((_, handle)) => Some(handle),
            Err(e) => {
                log::warn!("health check not started on port {}: {}", port, e);
                None
            }
        }
    };

    if let Some(s) = cli.seed {
        log::info!("using fixed seed {} (game will be reproducible)", s);
    }
    let rng = rng_from_seed(cli.seed);
    tokio::task::spawn_blocking(move || run_console(cli, rng)).await??;
    Ok(())
}

#[cfg(feature = "std")]
fn run_console(cli: Cli, mut rng: SmallRng) -> anyhow::Result<()> {
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.say(format_args!("Welcome to Battleships!"))?;

    let name = match cli.name {
        Some(name) => name,
        None => match console.prompt_name()? {
            Some(name) => name,
            None => return Ok(()),
        },
    };
    let size = match cli.size {
        Some(size) => size,
        None => match console.prompt_grid_size()? {
            Some(size) => size,
            None => return Ok(()),
        },
    };

    let config = MatchConfig::new(size, cli.ships, name.clone()).map_err(|e| anyhow::anyhow!(e))?;
    let mut game = Match::with_random_layout(config, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut human = ConsolePlayer::new(name, console);
    let mut ai = AiPlayer::new();

    match game.play(&mut human, &mut ai, &mut rng) {
        Ok(winner) => {
            log::debug!("summary: {:?}", game.summary());
            log::info!("{:?} won", winner);
            Ok(())
        }
        Err(MatchError::InputClosed(_)) => {
            log::info!("input closed, leaving the match");
            Ok(())
        }
        // a read error is not a quit; exit non-zero
        Err(e @ MatchError::InputFailed { .. }) => {
            log::error!("{}", e);
            Err(anyhow::anyhow!(e))
        }
        Err(e) => Err(anyhow::anyhow!(e)),
    }
}
