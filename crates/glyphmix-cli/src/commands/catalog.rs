//! Catalog command implementation
//!
//! Prints the fixed glyph table.

use anyhow::Result;
use colored::Colorize;
use glyphmix_core::catalog::{Glyph, REQUIRED_SOURCE_WIDTH};
use std::process::ExitCode;

use super::json_output::{CatalogEntry, CatalogOutput};

/// Run the catalog command
///
/// # Arguments
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = CatalogOutput {
            glyphs: Glyph::ALL.into_iter().map(CatalogEntry::from).collect(),
            required_source_width: REQUIRED_SOURCE_WIDTH,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Glyph catalog:".cyan().bold());
    println!(
        "  {:<6} {:<4} {:>6} {:>6}",
        "glyph".dimmed(),
        "id".dimmed(),
        "offset".dimmed(),
        "width".dimmed()
    );
    for glyph in Glyph::ALL {
        println!(
            "  {:<6} {:<4} {:>6} {:>6}",
            glyph.character(),
            glyph.romaji(),
            glyph.offset(),
            glyph.width()
        );
    }
    println!(
        "{} {}px",
        "Required source width:".dimmed(),
        REQUIRED_SOURCE_WIDTH
    );

    Ok(ExitCode::SUCCESS)
}
