//! Command-line interface for the tic-tac-toe binary.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::instrument;

/// Play the game tic-tac-toe.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play the game tic-tac-toe.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Pause before the game starts so a profiler can be attached
    #[arg(long)]
    pub profiler: bool,

    /// Path to the TOML configuration file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Waits for the user to press Enter so a profiler can attach.
#[instrument(skip_all)]
pub fn wait_for_profiler(input: &mut impl BufRead, prompt: &mut impl Write) -> io::Result<()> {
    write!(
        prompt,
        "Attach a profiler now to process {}. Press enter to continue...",
        std::process::id()
    )?;
    prompt.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
