use std::path::PathBuf;
use std::time::Duration;

use battleship_captains::{
    init_logging, EventLog, GameConfig, Session, StdinInput, BLITZ_TIME_LIMIT, HANDOVER_PAUSE,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Two-player hot-seat Battleship with captains, power-ups and a blitz mode.
///
/// Map, captains and mode are chosen from the interactive menus.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix the island RNG seed for reproducible maps (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = BLITZ_TIME_LIMIT.as_secs(), help = "Seconds per turn in blitz mode")]
    turn_seconds: u64,
    #[arg(long, default_value_t = HANDOVER_PAUSE.as_secs(), help = "Pause in seconds when handing over to the other player")]
    handover_seconds: u64,
    #[arg(long, default_value = ".", help = "Directory for the GameLog_*.txt event log")]
    log_dir: PathBuf,
    #[arg(long, help = "Do not write an event log file")]
    no_event_log: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let events = if cli.no_event_log {
        EventLog::disabled()
    } else {
        EventLog::new(cli.log_dir)
    };
    let config = GameConfig {
        turn_limit: Duration::from_secs(cli.turn_seconds),
        handover_pause: Duration::from_secs(cli.handover_seconds),
        wipe_screen: true,
    };

    let mut session = Session::new(StdinInput::new(), events, config, rng);
    let report = session.run()?;
    log::debug!(
        "match over: player {} ({}) won after {} turns, {} timed out",
        report.winner + 1,
        report.captain,
        report.turns,
        report.timeouts
    );
    if let Some(path) = session.events().path() {
        println!("Game log written to {}", path.display());
    }
    Ok(())
}
