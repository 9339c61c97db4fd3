//! Tic-tac-toe terminal binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use tictactoe_cli::{Cli, GameConfig, Session, wait_for_profiler};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    initialize_tracing(&config);
    debug!(?cli, ?config, "Starting tictactoe");

    let stdin = io::stdin();
    let echo = config.echo_input().resolve(stdin.is_terminal());
    let mut input = stdin.lock();

    if cli.profiler {
        wait_for_profiler(&mut input, &mut io::stderr())
            .context("Failed to wait for profiler")?;
    }

    let mut session = Session::new(input, io::stdout().lock(), echo);
    let status = session.run().context("Game session failed")?;
    info!(?status, "Exiting");

    Ok(())
}

/// Sends logs to stderr so stdout carries only the game.
#[instrument(skip(config))]
fn initialize_tracing(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .try_init();
}
