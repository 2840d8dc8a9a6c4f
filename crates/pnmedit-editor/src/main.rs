//! pnmedit - interactive PNM image editor
//!
//! Reads commands from a script file or stdin and prints one status line
//! per command on stdout. Diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use pnmedit_editor::{SessionOptions, run_session};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pnmedit")]
#[command(version, about = "Edit PNM (PBM/PGM/PPM) images with line-oriented commands")]
struct Cli {
    /// Command script to run instead of reading stdin
    script: Option<PathBuf>,

    /// Log level filter, e.g. `debug` or `pnmedit_io=trace`
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Echo each command before its status line
    #[arg(long)]
    echo: bool,
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let options = SessionOptions { echo: cli.echo };
    let stdout = io::stdout().lock();
    let outcome = match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script: {}", path.display()))?;
            run_session(BufReader::new(file), stdout, options)
        }
        None => run_session(io::stdin().lock(), stdout, options),
    }
    .context("Session I/O failed")?;

    tracing::debug!(commands = outcome.commands, exited = outcome.exited, "session finished");
    Ok(())
}
