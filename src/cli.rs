use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{error, info};
use radarcast::clients::errors::Result;
use radarcast::radar::{ConfigBuilder, ReleaseRadar};
use radarcast::trigger;

#[derive(Parser)]
#[command(name = "radarcast")]
#[command(version, about = "Post the newest tracks of a Spotify playlist to Discord", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Notify once and exit
    Run {},
    /// Notify periodically until interrupted
    Schedule {
        /// Time between runs, e.g. "7d" or "12h"
        #[arg(long, default_value = "7d", value_parser = parse_period)]
        every: Duration,
    },
}

fn parse_period(s: &str) -> std::result::Result<Duration, String> {
    let period = humantime::parse_duration(s).map_err(|e| e.to_string())?;
    if period.is_zero() {
        return Err("period must be greater than zero".to_string());
    }
    Ok(period)
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    info!("Building config ...");
    let radar = Arc::new(ReleaseRadar::new(ConfigBuilder::new().build()?));

    match cli.command {
        Commands::Run {} => {
            // Failures are logged by the task; the exit code does not reflect them
            if let Err(e) = trigger::dispatch(radar).await {
                error!("Release radar run aborted: {e}");
            }
        }
        Commands::Schedule { every } => {
            info!("Scheduling release radar every {}", humantime::format_duration(every));
            trigger::schedule(radar, every).await;
        }
    }
    Ok(())
}
