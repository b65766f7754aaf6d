//! Generate command implementation
//!
//! Loads the source logo, picks a display sequence (random or given) and
//! exports the composition as PNG.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphmix_backend_raster::png::write_png_file;
use glyphmix_backend_raster::LogoWidget;
use glyphmix_core::rng::DeterministicRng;
use glyphmix_core::sequence::{parse_sequence, sequence_text};
use glyphmix_core::strings::EXPORT_FILE_NAME;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{
    error_codes, Failure, FailureCode, GenerateOutput, GenerateResult,
};
use crate::input::{load_layout, read_source};

/// Arguments of the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateArgs<'a> {
    /// Path to the source logo PNG
    pub source: &'a str,
    /// Seed for the random draw
    pub seed: Option<u32>,
    /// Fixed display sequence instead of a random one
    pub glyphs: Option<&'a str>,
    /// Output PNG path (default: `saizeriya-logo.png`)
    pub out: Option<&'a str>,
    /// Layout JSON file
    pub layout: Option<&'a str>,
}

/// Run the generate command
///
/// # Arguments
/// * `args` - Source, seed, sequence, output and layout options
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &GenerateArgs<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run generate with human-readable (colored) output
fn run_human(args: &GenerateArgs<'_>) -> Result<ExitCode> {
    println!("{} {}", "Source:".cyan().bold(), args.source);
    if let Some(seed) = args.seed {
        println!("{} {}", "Seed:".dimmed(), seed);
    }

    let result = generate(args).map_err(|f| f.error)?;

    println!("{} {}", "Sequence:".cyan().bold(), result.text.bold());
    println!("{} {}x{}", "Canvas:".dimmed(), result.width, result.height);
    println!("{} {}", "Hash:".dimmed(), &result.hash[..16]);
    println!(
        "\n{} {} ({} bytes)",
        "Saved:".green().bold(),
        result.output,
        result.size
    );

    Ok(ExitCode::SUCCESS)
}

/// Run generate with machine-readable JSON output
fn run_json(args: &GenerateArgs<'_>) -> Result<ExitCode> {
    let (output, code) = match generate(args) {
        Ok(result) => (GenerateOutput::success(result), ExitCode::SUCCESS),
        Err(failure) => {
            let error = failure.to_json_error(args.source);
            (GenerateOutput::failure(vec![error]), ExitCode::from(1))
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(code)
}

/// Load, pick a sequence, export and write the PNG.
pub fn generate(args: &GenerateArgs<'_>) -> Result<GenerateResult, Failure> {
    let layout = load_layout(args.layout).code(error_codes::INVALID_LAYOUT)?;
    let fixed = args
        .glyphs
        .map(|text| {
            parse_sequence(text).with_context(|| format!("Invalid glyph sequence: {}", text))
        })
        .transpose()
        .code(error_codes::INVALID_SEQUENCE)?;

    let png_data = read_source(args.source).code(error_codes::FILE_READ)?;
    let mut rng = DeterministicRng::from_seed_option(args.seed);
    let mut widget = LogoWidget::new(layout);
    widget
        .load_png(&png_data, &mut rng)
        .with_context(|| format!("Failed to load source logo: {}", args.source))
        .code(error_codes::SOURCE_LOAD)?;
    if let Some(sequence) = fixed {
        widget
            .show(sequence)
            .context("Failed to show glyph sequence")
            .code(error_codes::INVALID_SEQUENCE)?;
    }

    let exported = widget
        .export()
        .context("Failed to export composition")
        .code(error_codes::EXPORT)?;

    let out = args.out.unwrap_or(EXPORT_FILE_NAME);
    write_png_file(&exported.png_data, Path::new(out))
        .with_context(|| format!("Failed to write output: {}", out))
        .code(error_codes::FILE_WRITE)?;

    Ok(GenerateResult {
        text: sequence_text(widget.display()),
        sequence: widget.display().to_vec(),
        seed: args.seed,
        output: out.to_string(),
        width: exported.composition.width,
        height: exported.composition.height,
        size: exported.png_data.len() as u64,
        hash: exported.hash,
    })
}
