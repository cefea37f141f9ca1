//! List the placeholders a template requires.
//!
//! ```bash
//! linkfill scan 'app://user/{id#}/name/{label}'
//! linkfill scan 'app://user/{id#}/name/{label}' --format json
//! ```
//!
//! The table format is for eyes, the JSON format for scripts. Both report
//! every placeholder position in scan order with its display label and
//! validation kind; duplicate names show up once per occurrence because
//! each occurrence is its own field.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use crate::template::{Classification, classify, display_name, scan};

/// Command to list a template's placeholders.
#[derive(Args)]
pub struct ScanCommand {
    /// URI template, e.g. 'app://user/{id#}/name/{label}'
    template: String,

    /// Output format (table, json)
    #[arg(long, default_value = "table")]
    format: String,
}

/// One placeholder position as reported to the user.
#[derive(Debug, Serialize)]
struct ScannedField {
    /// Zero-based position in scan order.
    position: usize,
    /// Display label (numeric marker stripped).
    label: String,
    /// Validation kind for the position.
    kind: Classification,
}

impl ScanCommand {
    pub fn execute(self) -> Result<()> {
        let fields: Vec<ScannedField> = scan(&self.template)
            .iter()
            .enumerate()
            .map(|(position, name)| ScannedField {
                position,
                label: display_name(name).to_string(),
                kind: classify(name),
            })
            .collect();

        match self.format.as_str() {
            "json" => {
                let json = serde_json::to_string_pretty(&fields)
                    .context("failed to serialize scan result")?;
                println!("{json}");
            }
            "table" => {
                if fields.is_empty() {
                    println!("{}", "No placeholders - template is already concrete".green());
                } else {
                    println!("{:<10} {:<24} {}", "POSITION".bold(), "LABEL".bold(), "KIND".bold());
                    for field in &fields {
                        println!("{:<10} {:<24} {}", field.position, field.label, field.kind);
                    }
                }
            }
            other => {
                anyhow::bail!("unsupported format '{other}' (expected 'table' or 'json')");
            }
        }

        Ok(())
    }
}
