//! Command-line interface for linkfill.
//!
//! Each subcommand lives in its own module with its own argument struct and
//! execution logic:
//!
//! - `scan` - list the placeholders a template requires, as a table or JSON
//! - `resolve` - fill the placeholders from positional values or an
//!   interactive per-field prompt, and print the resolved URI
//!
//! # Usage
//!
//! ```bash
//! # What does this template need?
//! linkfill scan 'app://user/{id#}/name/{label}'
//!
//! # Fill it in one shot (values in scan order)
//! linkfill resolve 'app://user/{id#}/name/{label}' 7 alice
//!
//! # Or be prompted field by field
//! linkfill resolve 'app://user/{id#}/name/{label}' --interactive
//! ```
//!
//! # Global options
//!
//! - `--verbose` - debug-level logging to stderr
//! - `--quiet` - errors only
//!
//! The resolved URI is printed to stdout and nothing else is, so the output
//! composes with `xargs`, shell substitution, and friends. Prompts, logs,
//! and error reports all go to stderr.

mod resolve;
mod scan;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Top-level CLI: global flags plus one subcommand.
#[derive(Parser)]
#[command(
    name = "linkfill",
    about = "Resolve required parameters in URI templates",
    version,
    long_about = "linkfill scans URI templates for {placeholder} spans, validates one \
                  user-supplied value per placeholder (names ending in '#' take digits \
                  only), and substitutes the values positionally into the template."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress everything except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List the placeholders a template requires
    Scan(scan::ScanCommand),

    /// Fill a template's placeholders and print the resolved URI
    Resolve(resolve::ResolveCommand),
}

impl Cli {
    /// Default tracing filter derived from the verbosity flags, used when
    /// `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "linkfill=debug"
        } else if self.quiet {
            "error"
        } else {
            "linkfill=info"
        }
    }

    /// Dispatch to the selected subcommand.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Scan(cmd) => cmd.execute(),
            Commands::Resolve(cmd) => cmd.execute(),
        }
    }
}
