//! Perfect Play - play Nim and tic-tac-toe against perfect opponents.

use anyhow::Result;
use clap::Parser;
use perfect_play::Cli;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never tear the board drawn on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    let config = cli.into_config()?;
    info!(game = ?config.game(), games = config.games(), "Starting series");

    let scoreboard = perfect_play::run(&config, !json)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&scoreboard)?);
    } else {
        println!("{scoreboard}");
    }
    Ok(())
}
