use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kdquery::session::Session;
use tracing::Level;
use tracing_subscriber::fmt;

/// Answer nearest-neighbor and range queries over integer point sets.
///
/// Reads `LOAD <file>`, `NN <coords>`, `RS <low high pairs>` and `EXIT` commands and prints
/// query results to stdout, one point per line.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Read commands from this file instead of stdin.
    script: Option<PathBuf>,

    /// Most verbose diagnostics written to stderr (error, warn, info, debug, trace).
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let subscriber = fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut session: Session<i32> = Session::new();

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            session.run(BufReader::new(file), &mut out)
        }
        None => session.run(io::stdin().lock(), &mut out),
    }
    .context("command processing aborted")
}
