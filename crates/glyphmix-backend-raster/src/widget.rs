//! Logo widget state.
//!
//! The widget owns the glyph cache, the readiness flag and the current
//! display sequence. Until a source logo has been decoded and every glyph
//! extracted, the widget shows the loading placeholder and refuses both
//! regenerate and export.

use glyphmix_core::catalog::Glyph;
use glyphmix_core::layout::ExportLayout;
use glyphmix_core::sequence::{
    generate_sequence, sequence_text, validate_sequence, GlyphDraw, SequenceError,
};
use glyphmix_core::strings::LOADING_PLACEHOLDER;
use thiserror::Error;

use crate::compose::{export, ComposeError, ExportResult};
use crate::extract::{extract_glyphs, ExtractError, GlyphCache};
use crate::png::{decode_png, PngError};
use crate::raster::Raster;

/// Errors from widget actions.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// Glyphs have not been extracted yet.
    #[error("Widget is not ready: the source logo has not been loaded")]
    NotReady,

    /// The source logo could not be decoded.
    #[error("Failed to decode source logo: {0}")]
    Decode(#[from] PngError),

    /// Glyph extraction failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// A hand-built sequence was rejected.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// Export failed.
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// The logo widget.
#[derive(Debug, Clone, Default)]
pub struct LogoWidget {
    layout: ExportLayout,
    cache: Option<GlyphCache>,
    display: Vec<Glyph>,
}

impl LogoWidget {
    /// Create a widget in the loading state.
    pub fn new(layout: ExportLayout) -> Self {
        Self {
            layout,
            cache: None,
            display: Vec::new(),
        }
    }

    /// Decode the source logo, extract the glyphs and show a first sequence.
    ///
    /// Loading happens once. On failure the widget stays in the loading
    /// state.
    pub fn load_png<D: GlyphDraw + ?Sized>(
        &mut self,
        png_data: &[u8],
        draw: &mut D,
    ) -> Result<(), WidgetError> {
        let source = decode_png(png_data)?;
        self.load_raster(&source, draw)
    }

    /// Extract the glyphs from an already decoded logo and show a first
    /// sequence.
    pub fn load_raster<D: GlyphDraw + ?Sized>(
        &mut self,
        source: &Raster,
        draw: &mut D,
    ) -> Result<(), WidgetError> {
        if self.cache.is_some() {
            return Ok(());
        }

        let cache = extract_glyphs(source)?;
        self.cache = Some(cache);
        self.display = generate_sequence(draw);
        Ok(())
    }

    /// Whether the glyphs are extracted and actions are enabled.
    pub fn is_ready(&self) -> bool {
        self.cache.is_some()
    }

    /// The extracted glyphs, once ready.
    pub fn cache(&self) -> Option<&GlyphCache> {
        self.cache.as_ref()
    }

    /// The current display sequence; empty while loading.
    pub fn display(&self) -> &[Glyph] {
        &self.display
    }

    /// What the widget shows: the sequence as katakana, or the loading
    /// placeholder.
    pub fn display_text(&self) -> String {
        if self.is_ready() {
            sequence_text(&self.display)
        } else {
            LOADING_PLACEHOLDER.to_string()
        }
    }

    /// Replace the display sequence with a fresh random one.
    pub fn regenerate<D: GlyphDraw + ?Sized>(
        &mut self,
        draw: &mut D,
    ) -> Result<&[Glyph], WidgetError> {
        if !self.is_ready() {
            return Err(WidgetError::NotReady);
        }
        self.display = generate_sequence(draw);
        Ok(&self.display)
    }

    /// Replace the display sequence with a given one.
    pub fn show(&mut self, sequence: Vec<Glyph>) -> Result<(), WidgetError> {
        if !self.is_ready() {
            return Err(WidgetError::NotReady);
        }
        validate_sequence(&sequence)?;
        self.display = sequence;
        Ok(())
    }

    /// Composite the display sequence and encode it as PNG.
    pub fn export(&self) -> Result<ExportResult, WidgetError> {
        let cache = self.cache.as_ref().ok_or(WidgetError::NotReady)?;
        Ok(export(&self.display, cache, &self.layout)?)
    }
}
