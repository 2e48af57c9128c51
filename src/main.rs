//! Fibonacci CLI - prints the seed terms and ten advanced terms

use std::path::PathBuf;

use clap::Parser;
use fibonacci::common::{config::Config, logging};
use fibonacci::{driver, Result};

#[derive(Parser)]
#[command(name = "fibonacci", about = "Print the first terms of the Fibonacci sequence")]
#[command(version, long_about = None)]
struct Cli {
    /// Path to a config file (default: platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    logging::init_cli(cli.verbose, &config.logging.filter)?;
    tracing::debug!(config = ?cli.config, "Configuration loaded");

    let stdout = std::io::stdout();
    driver::run(&mut stdout.lock())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Reader went away (e.g. `| head`), nothing left to report
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
