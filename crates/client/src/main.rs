//! Command-line entry point: loads a match, replays its script and prints
//! the board as it evolves.
mod config;
mod demo;
mod runner;

use anyhow::{Context, Result};
use skirmish_content::{ConfigLoader, ScenarioLoader};
use skirmish_core::GameConfig;

use config::ClientConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = ClientConfig::from_env().with_args(std::env::args().skip(1));

    let rules = match &config.rules_path {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?,
        None => GameConfig::default(),
    };

    let scenario = match &config.scenario_path {
        Some(path) => ScenarioLoader::load(path)
            .with_context(|| format!("Failed to load scenario from {}", path.display()))?,
        None => {
            tracing::info!("no scenario given, running the demonstration match");
            demo::scenario()
        }
    };

    let mut board = scenario.build_board(&rules)?;
    tracing::info!(
        height = board.height(),
        width = board.width(),
        units = board.unit_count(),
        "match ready"
    );
    println!("{board}");

    let summary = runner::run_script(&mut board, &scenario.commands, config.stop_on_error)?;
    tracing::info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "script finished"
    );

    match summary.winner {
        Some(team) => println!("{team} win"),
        None => println!("no winner yet"),
    }

    Ok(())
}

/// Logs go to stderr so stdout carries only the rendered boards.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
