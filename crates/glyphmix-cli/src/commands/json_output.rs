//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `catalog`, `extract` and `generate`.

use glyphmix_core::catalog::Glyph;
use serde::{Deserialize, Serialize};

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Layout file is invalid
    pub const INVALID_LAYOUT: &str = "CLI_002";
    /// Source logo could not be decoded or sliced
    pub const SOURCE_LOAD: &str = "CLI_003";
    /// Glyph sequence argument is invalid
    pub const INVALID_SEQUENCE: &str = "CLI_004";
    /// Export failed
    pub const EXPORT: &str = "CLI_005";
    /// Output could not be written
    pub const FILE_WRITE: &str = "CLI_006";
}

/// A failure tagged with the stable error code it maps to.
#[derive(Debug)]
pub struct Failure {
    /// Stable error code from [`error_codes`]
    pub code: &'static str,
    /// Underlying error with context
    pub error: anyhow::Error,
}

impl Failure {
    /// Convert into a JSON error attributed to `file`.
    pub fn to_json_error(&self, file: &str) -> JsonError {
        JsonError::new(self.code, format!("{:#}", self.error)).with_file(file)
    }
}

/// Tags an `anyhow` result with an error code.
pub(crate) trait FailureCode<T> {
    fn code(self, code: &'static str) -> Result<T, Failure>;
}

impl<T> FailureCode<T> for anyhow::Result<T> {
    fn code(self, code: &'static str) -> Result<T, Failure> {
        self.map_err(|error| Failure { code, error })
    }
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File the error relates to (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// One row of the glyph catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Glyph identifier
    pub glyph: Glyph,
    /// Katakana character
    pub character: String,
    /// Left edge in the source logo
    pub offset: u32,
    /// Width in the source logo
    pub width: u32,
}

impl From<Glyph> for CatalogEntry {
    fn from(glyph: Glyph) -> Self {
        Self {
            glyph,
            character: glyph.character().to_string(),
            offset: glyph.offset(),
            width: glyph.width(),
        }
    }
}

/// JSON output for the `catalog` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogOutput {
    /// Catalog rows in logo order
    pub glyphs: Vec<CatalogEntry>,
    /// Minimum source width that contains every glyph
    pub required_source_width: u32,
}

/// One glyph written by the `extract` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedGlyph {
    /// Glyph identifier
    pub glyph: Glyph,
    /// Output file path
    pub path: String,
    /// Glyph width in pixels
    pub width: u32,
    /// Glyph height in pixels
    pub height: u32,
    /// PNG size in bytes
    pub size: u64,
    /// BLAKE3 hash of the PNG data
    pub hash: String,
    /// Length of the equivalent data URI
    pub data_uri_len: usize,
}

/// JSON output for the `extract` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOutput {
    /// Whether extraction succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Extracted glyphs (on success)
    pub glyphs: Vec<ExtractedGlyph>,
}

/// Details of a successful `generate` run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateResult {
    /// Display sequence as katakana
    pub text: String,
    /// Display sequence identifiers
    pub sequence: Vec<Glyph>,
    /// Seed used for the random draw (if given)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Output file path
    pub output: String,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// PNG size in bytes
    pub size: u64,
    /// BLAKE3 hash of the PNG data
    pub hash: String,
}

/// JSON output for the `generate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOutput {
    /// Whether generation succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GenerateResult>,
}

impl GenerateOutput {
    /// Creates a successful generate output.
    pub fn success(result: GenerateResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed generate output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
