//! Export canvas configuration.
//!
//! The layout describes the container the glyphs are shown in: its minimum
//! size, the height each glyph is displayed at, and the flat background the
//! export is painted on. It can be loaded from a JSON file where every field
//! is optional.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default background color (`bg-green-600`).
pub const DEFAULT_BACKGROUND: &str = "#16a34a";

/// Default minimum container width in pixels.
pub const DEFAULT_MIN_WIDTH: u32 = 576;

/// Default minimum container height in pixels.
pub const DEFAULT_MIN_HEIGHT: u32 = 200;

/// Largest canvas side, and largest value any size field may take.
pub const MAX_CANVAS_DIMENSION: u32 = 16384;

/// Errors from layout parsing and validation.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The layout file is not valid JSON for this schema.
    #[error("Invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric field is out of range.
    #[error("Invalid layout field '{field}': {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// The background is not a `#rrggbb` color.
    #[error("Invalid background color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

/// Export container layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ExportLayout {
    /// Minimum container width; the container grows to fit wider sequences.
    pub min_width: u32,
    /// Minimum container height; the container grows to fit taller glyphs.
    pub min_height: u32,
    /// Display height of each glyph. `None` keeps the glyph's native height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glyph_height: Option<u32>,
    /// Opaque background color as `#rrggbb`.
    pub background: String,
}

impl Default for ExportLayout {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            glyph_height: None,
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

impl ExportLayout {
    /// Parse and validate a layout from JSON.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: ExportLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Check field ranges and the background color.
    pub fn validate(&self) -> Result<(), LayoutError> {
        check_dimension("min_width", self.min_width)?;
        check_dimension("min_height", self.min_height)?;
        if let Some(glyph_height) = self.glyph_height {
            check_dimension("glyph_height", glyph_height)?;
        }
        self.background_rgb()?;
        Ok(())
    }

    /// The background as 8-bit RGB.
    pub fn background_rgb(&self) -> Result<[u8; 3], LayoutError> {
        parse_hex_rgb(&self.background)
    }
}

fn check_dimension(field: &'static str, value: u32) -> Result<(), LayoutError> {
    if value == 0 || value > MAX_CANVAS_DIMENSION {
        return Err(LayoutError::InvalidField {
            field,
            message: format!("must be between 1 and {}, got {}", MAX_CANVAS_DIMENSION, value),
        });
    }
    Ok(())
}

/// Parse a `#rrggbb` (or `rrggbb`) color.
pub fn parse_hex_rgb(s: &str) -> Result<[u8; 3], LayoutError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LayoutError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| LayoutError::InvalidColor(s.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_layout_is_valid() {
        let layout = ExportLayout::default();
        layout.validate().unwrap();
        assert_eq!(layout.background_rgb().unwrap(), [0x16, 0xa3, 0x4a]);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let layout = ExportLayout::from_json(r#"{"glyph_height": 96}"#).unwrap();
        assert_eq!(
            layout,
            ExportLayout {
                glyph_height: Some(96),
                ..ExportLayout::default()
            }
        );
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = ExportLayout::from_json(r#"{"gap": 4}"#).unwrap_err();
        assert!(matches!(err, LayoutError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let err = ExportLayout::from_json(r#"{"min_width": 0}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidField { field: "min_width", .. }));

        let err = ExportLayout::from_json(r#"{"glyph_height": 0}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidField { field: "glyph_height", .. }));
    }

    #[test]
    fn test_validate_rejects_oversized_dimensions() {
        let err = ExportLayout::from_json(r#"{"glyph_height": 4000000000}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidField { field: "glyph_height", .. }));

        let err = ExportLayout::from_json(r#"{"min_height": 16385}"#).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidField { field: "min_height", .. }));

        let layout = ExportLayout::from_json(r#"{"min_width": 16384}"#).unwrap();
        assert_eq!(layout.min_width, MAX_CANVAS_DIMENSION);
    }

    #[test]
    fn test_parse_hex_rgb() {
        assert_eq!(parse_hex_rgb("#ffffff").unwrap(), [255, 255, 255]);
        assert_eq!(parse_hex_rgb("0a0B0c").unwrap(), [10, 11, 12]);
        assert!(parse_hex_rgb("#fff").is_err());
        assert!(parse_hex_rgb("#gggggg").is_err());
    }

    #[test]
    fn test_serialization_omits_unset_glyph_height() {
        let json = serde_json::to_value(ExportLayout::default()).unwrap();
        assert!(json.get("glyph_height").is_none());
        assert_eq!(json["background"], "#16a34a");
    }
}
