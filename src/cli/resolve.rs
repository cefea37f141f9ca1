//! Fill a template's placeholders and print the resolved URI.
//!
//! Two ways in:
//!
//! ```bash
//! # Positional values, aligned to scan order
//! linkfill resolve 'app://user/{id#}/name/{label}' 7 alice
//!
//! # Interactive: one prompt per field, re-prompt while invalid
//! linkfill resolve 'app://user/{id#}/name/{label}' --interactive
//! ```
//!
//! In both modes the submit is gated on form validity: nothing is printed
//! to stdout unless every field passes. Interactive mode treats EOF
//! (Ctrl-D) as cancel - the session is discarded and no URI is produced.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;
use tracing::debug;

use crate::template::{Classification, FormError, FormState, resolve, scan};

/// Command to resolve a template into a concrete URI.
#[derive(Args)]
pub struct ResolveCommand {
    /// URI template, e.g. 'app://user/{id#}/name/{label}'
    template: String,

    /// One value per placeholder, in scan order
    values: Vec<String>,

    /// Prompt for each field on stdin instead of taking positional values
    #[arg(short, long, conflicts_with = "values")]
    interactive: bool,
}

impl ResolveCommand {
    pub fn execute(self) -> Result<()> {
        let mut form = FormState::new(scan(&self.template));

        if self.interactive {
            let stdin = io::stdin();
            fill_interactively(&mut form, &mut stdin.lock(), &mut io::stderr())?;
        } else {
            fill_from_args(&mut form, self.values)?;
        }

        let uri = resolve(&self.template, form.values());
        println!("{uri}");

        // The session is done; a reused form must not leak this input.
        form.reset();
        Ok(())
    }
}

/// Populate the form from positional CLI values and gate on validity.
fn fill_from_args(form: &mut FormState, values: Vec<String>) -> Result<()> {
    if values.len() != form.len() {
        return Err(FormError::ValueCountMismatch {
            expected: form.len(),
            actual: values.len(),
        }
        .into());
    }

    for (index, value) in values.into_iter().enumerate() {
        form.set_value(index, value);
    }

    let invalid = form.invalid_fields();
    if !invalid.is_empty() {
        for field in &invalid {
            eprintln!(
                "{} field '{}' (position {}): {}",
                "invalid".red().bold(),
                field.label,
                field.index,
                requirement(field.classification),
            );
        }
        bail!("{} field(s) failed validation", invalid.len());
    }

    Ok(())
}

/// Prompt for each field in order, re-prompting while the value is invalid.
///
/// Reads lines from `input` and writes prompts to `prompt_out` (stderr in
/// production, a buffer in tests). EOF at any point cancels the whole
/// session: the form is reset and an error is returned so no URI escapes.
fn fill_interactively<R: BufRead, W: Write>(
    form: &mut FormState,
    input: &mut R,
    prompt_out: &mut W,
) -> Result<()> {
    for index in 0..form.len() {
        loop {
            write!(
                prompt_out,
                "{} ({}): ",
                form.label(index).bold(),
                requirement(form.classification(index)),
            )
            .context("failed to write prompt")?;
            prompt_out.flush().context("failed to flush prompt")?;

            let mut line = String::new();
            let read = input.read_line(&mut line).context("failed to read value")?;
            if read == 0 {
                debug!(index, "EOF during prompt, cancelling session");
                form.reset();
                bail!("cancelled");
            }

            let value = line.trim_end_matches(['\n', '\r']);
            form.set_value(index, value);
            if form.is_field_valid(index) {
                break;
            }

            writeln!(
                prompt_out,
                "{} {}",
                "invalid:".red().bold(),
                requirement(form.classification(index)),
            )
            .context("failed to write prompt")?;
        }
    }

    // Every field was accepted individually, so the aggregate must hold.
    form.ensure_valid()?;
    Ok(())
}

fn requirement(classification: Classification) -> &'static str {
    match classification {
        Classification::Numeric => "digits only",
        Classification::Text => "must not be blank",
    }
}
