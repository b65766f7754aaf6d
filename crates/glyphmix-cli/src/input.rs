//! Reading of the source logo and layout file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glyphmix_core::layout::ExportLayout;

/// Read the source logo bytes.
pub fn read_source(path: &str) -> Result<Vec<u8>> {
    fs::read(Path::new(path)).with_context(|| format!("Failed to read source logo: {}", path))
}

/// Load the export layout from an optional JSON file.
///
/// Without a file the default layout is used.
pub fn load_layout(path: Option<&str>) -> Result<ExportLayout> {
    let Some(path) = path else {
        return Ok(ExportLayout::default());
    };

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path))?;
    ExportLayout::from_json(&json).with_context(|| format!("Invalid layout file: {}", path))
}
