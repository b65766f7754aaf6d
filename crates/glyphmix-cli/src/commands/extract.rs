//! Extract command implementation
//!
//! Slices the source logo and writes one PNG per glyph.

use anyhow::{Context, Result};
use colored::Colorize;
use glyphmix_backend_raster::png::{decode_png, write_png_file};
use glyphmix_backend_raster::extract_glyphs;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, ExtractOutput, ExtractedGlyph, Failure, FailureCode};
use crate::input::read_source;

/// Run the extract command
///
/// # Arguments
/// * `source` - Path to the source logo PNG
/// * `out_dir` - Directory the glyph PNGs are written to
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(source: &str, out_dir: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        let output = match extract_to_dir(source, out_dir) {
            Ok(glyphs) => ExtractOutput {
                success: true,
                errors: Vec::new(),
                glyphs,
            },
            Err(failure) => ExtractOutput {
                success: false,
                errors: vec![failure.to_json_error(source)],
                glyphs: Vec::new(),
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(if output.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(1)
        });
    }

    println!("{} {}", "Extracting from:".cyan().bold(), source);
    let glyphs = extract_to_dir(source, out_dir).map_err(|f| f.error)?;
    for glyph in &glyphs {
        println!(
            "  {} {} {}x{} {} bytes {}",
            glyph.glyph.character(),
            glyph.path,
            glyph.width,
            glyph.height,
            glyph.size,
            glyph.hash[..16].dimmed()
        );
    }
    println!(
        "\n{} {} glyphs written to {}",
        "Done:".green().bold(),
        glyphs.len(),
        out_dir
    );

    Ok(ExitCode::SUCCESS)
}

/// Extract every glyph and write `<romaji>.png` files into `out_dir`.
pub fn extract_to_dir(source: &str, out_dir: &str) -> Result<Vec<ExtractedGlyph>, Failure> {
    let png_data = read_source(source).code(error_codes::FILE_READ)?;
    let logo = decode_png(&png_data)
        .with_context(|| format!("Failed to decode source logo: {}", source))
        .code(error_codes::SOURCE_LOAD)?;
    let cache = extract_glyphs(&logo)
        .with_context(|| format!("Failed to extract glyphs from: {}", source))
        .code(error_codes::SOURCE_LOAD)?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))
        .code(error_codes::FILE_WRITE)?;

    cache
        .iter()
        .map(|entry| {
            let path = Path::new(out_dir).join(format!("{}.png", entry.glyph.romaji()));
            write_png_file(&entry.png_data, &path)
                .with_context(|| format!("Failed to write glyph: {}", path.display()))
                .code(error_codes::FILE_WRITE)?;

            Ok(ExtractedGlyph {
                glyph: entry.glyph,
                path: path.display().to_string(),
                width: entry.raster.width,
                height: entry.raster.height,
                size: entry.png_data.len() as u64,
                hash: entry.hash.clone(),
                data_uri_len: entry.data_uri().len(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphmix_backend_raster::png::{encode_rgba, PngConfig};
    use glyphmix_backend_raster::{Raster, Rgba};

    fn write_logo(dir: &Path) -> String {
        let logo = Raster::new(436, 10, Rgba::rgb(255, 255, 255));
        let path = dir.join("logo.png");
        fs::write(&path, encode_rgba(&logo, &PngConfig::default()).unwrap()).unwrap();
        path.display().to_string()
    }

    fn failure_code(source: &str, out_dir: &str) -> &'static str {
        extract_to_dir(source, out_dir).unwrap_err().code
    }

    #[test]
    fn test_missing_source_is_file_read() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("glyphs");
        assert_eq!(
            failure_code("/nonexistent/logo.png", out_dir.to_str().unwrap()),
            error_codes::FILE_READ
        );
    }

    #[test]
    fn test_undecodable_source_is_source_load() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("broken.png");
        fs::write(&source, b"not a png").unwrap();
        let out_dir = dir.path().join("glyphs");
        assert_eq!(
            failure_code(source.to_str().unwrap(), out_dir.to_str().unwrap()),
            error_codes::SOURCE_LOAD
        );
    }

    #[test]
    fn test_unwritable_out_dir_is_file_write() {
        let dir = tempfile::tempdir().unwrap();
        let source = write_logo(dir.path());
        // A regular file where the output directory should go.
        let blocker = dir.path().join("glyphs");
        fs::write(&blocker, b"").unwrap();
        assert_eq!(
            failure_code(&source, blocker.to_str().unwrap()),
            error_codes::FILE_WRITE
        );
    }
}
