//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::Result;
use args::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = parse_args();

    init_logging(cli.verbose);

    // Load configuration
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let no_color = cli.no_color || config.no_color;
    if no_color {
        colored::control::set_override(false);
    }

    // Create context for commands
    let ctx = commands::Context {
        config,
        config_path: cli.config,
        no_color,
    };

    // Dispatch to appropriate command
    match cli.command {
        Some(Commands::Scan(args)) => commands::scan::execute(ctx, args).await,
        Some(Commands::Config(args)) => commands::config::execute(&ctx, args),
        None => commands::scan::execute(ctx, args::ScanArgs::default()).await,
    }
}

/// Parse the command line. Usage errors exit with 1 like every other
/// failure; `--help` and `--version` still exit 0.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    }
}

/// Send `tracing` events to stderr. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
