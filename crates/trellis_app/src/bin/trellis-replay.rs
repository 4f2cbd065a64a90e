//! Trellis interaction replay
//!
//! Builds the demo window, prints its initial markup, then replays a JSON
//! lines log of interactions against it, printing the re-rendered fragments
//! of each one as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use trellis_app::{demo_session, init_logging, AppConfig, AppError};
use trellis_core::Interaction;

#[derive(Parser)]
#[command(name = "trellis-replay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Replay recorded interactions against the Trellis demo window", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Interaction log, one JSON record per line ("-" for stdin)
    interactions: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if cli.verbose {
        config.logging.filter = "debug".to_string();
    }
    init_logging(&config.logging)?;

    let reader: Box<dyn BufRead> = if cli.interactions.as_os_str() == "-" {
        Box::new(BufReader::new(io::stdin()))
    } else {
        let file = File::open(&cli.interactions)
            .with_context(|| format!("Failed to open {}", cli.interactions.display()))?;
        Box::new(BufReader::new(file))
    };

    let (mut session, _demo) = demo_session(&config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.render_full())?;

    let mut processed = 0usize;
    let mut skipped = 0usize;
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Failed to read line {line_no}"))?;
        if line.trim().is_empty() {
            continue;
        }

        let interaction: Interaction = serde_json::from_str(&line)
            .with_context(|| format!("Malformed interaction on line {line_no}"))?;
        match session.process(&interaction) {
            Ok(fragments) => {
                for fragment in &fragments {
                    writeln!(out, "{}", serde_json::to_string(fragment)?)?;
                }
                processed += 1;
            }
            Err(AppError::Dispatch(err)) => {
                warn!(line = line_no, %err, "skipping interaction");
                skipped += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(processed, skipped, "replay finished");
    Ok(())
}
