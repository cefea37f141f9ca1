//! linkfill CLI entry point.
//!
//! Parses arguments, wires up logging, and dispatches to the subcommands in
//! [`linkfill::cli`]. All diagnostics go to stderr; stdout carries nothing
//! but the resolved URI (or the scan listing), so the binary composes with
//! pipes.

use clap::Parser;
use colored::Colorize;
use linkfill::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins; the verbosity flags only provide the fallback filter.
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli.execute() {
        eprintln!("{} {error:#}", "error:".red().bold());
        std::process::exit(1);
    }
}
