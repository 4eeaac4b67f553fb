//! Configuration validation command implementation.

#![allow(clippy::needless_pass_by_value)]

use super::output::{JsonGridSummary, format_text};
use super::{CliError, OutputFormat};
use asciigol::config;
use std::path::PathBuf;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error carrying the result code if the file is rejected.
pub(crate) fn execute(file: PathBuf, format: OutputFormat) -> Result<(), CliError> {
    let grid = config::load(&file)?;
    let summary = JsonGridSummary::from_grid(file.display().to_string(), &grid);

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&summary));
            println!();
            println!("Validation successful!");
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
