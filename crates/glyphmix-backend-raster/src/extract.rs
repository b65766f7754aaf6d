//! Sprite extraction.
//!
//! Cuts each catalog glyph out of the source logo into its own raster and
//! encodes it as PNG. The resulting [`GlyphCache`] is built in one go: either
//! all five glyphs are extracted or none are.

use std::collections::BTreeMap;

use glyphmix_core::catalog::{Glyph, REQUIRED_SOURCE_WIDTH};
use thiserror::Error;

use crate::png::{encode_rgba_with_hash, to_data_uri, PngConfig, PngError};
use crate::raster::{Raster, RasterError};

/// Errors that can occur during glyph extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source logo is too narrow to contain every glyph.
    #[error("Source image is {width}px wide; glyph extraction needs at least {required}px")]
    SourceTooNarrow { width: u32, required: u32 },

    /// The source logo has no rows.
    #[error("Source image has zero height")]
    EmptySource,

    /// Cropping a glyph failed.
    #[error("Failed to crop glyph {0}: {1}")]
    Crop(Glyph, RasterError),

    /// PNG encoding error.
    #[error("Failed to encode glyph {0}: {1}")]
    Encode(Glyph, PngError),
}

/// One extracted glyph.
#[derive(Debug, Clone)]
pub struct EncodedGlyph {
    /// Which glyph this is.
    pub glyph: Glyph,
    /// Decoded pixels.
    pub raster: Raster,
    /// PNG-encoded pixels.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
}

impl EncodedGlyph {
    /// The glyph as a `data:image/png;base64,` URI.
    pub fn data_uri(&self) -> String {
        to_data_uri(&self.png_data)
    }
}

/// All five glyphs, extracted once from the source logo.
#[derive(Debug, Clone)]
pub struct GlyphCache {
    entries: BTreeMap<Glyph, EncodedGlyph>,
}

impl GlyphCache {
    /// Look up an extracted glyph.
    pub fn get(&self, glyph: Glyph) -> &EncodedGlyph {
        // Construction guarantees every catalog glyph is present.
        &self.entries[&glyph]
    }

    /// Iterate over extracted glyphs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &EncodedGlyph> {
        self.entries.values()
    }
}

/// Cut one glyph out of the source logo.
pub fn extract_glyph(source: &Raster, glyph: Glyph) -> Result<EncodedGlyph, ExtractError> {
    let raster = source
        .crop(glyph.offset(), 0, glyph.width(), source.height)
        .map_err(|e| ExtractError::Crop(glyph, e))?;
    let (png_data, hash) = encode_rgba_with_hash(&raster, &PngConfig::default())
        .map_err(|e| ExtractError::Encode(glyph, e))?;

    Ok(EncodedGlyph {
        glyph,
        raster,
        png_data,
        hash,
    })
}

/// Extract every catalog glyph from the source logo.
pub fn extract_glyphs(source: &Raster) -> Result<GlyphCache, ExtractError> {
    if source.height == 0 {
        return Err(ExtractError::EmptySource);
    }
    if source.width < REQUIRED_SOURCE_WIDTH {
        return Err(ExtractError::SourceTooNarrow {
            width: source.width,
            required: REQUIRED_SOURCE_WIDTH,
        });
    }

    let entries = Glyph::ALL
        .into_iter()
        .map(|glyph| extract_glyph(source, glyph).map(|encoded| (glyph, encoded)))
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    Ok(GlyphCache { entries })
}
