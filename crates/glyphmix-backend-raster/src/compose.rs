//! Compositing and export.
//!
//! Export happens in two phases. [`measure`] lays out the container and
//! computes where every glyph of the display sequence goes; [`render`] fills
//! a canvas of exactly the container size with the background and draws every
//! placed glyph. The PNG is encoded only after every glyph has been drawn.

use std::collections::BTreeMap;

use glyphmix_core::catalog::Glyph;
use glyphmix_core::layout::{ExportLayout, LayoutError, MAX_CANVAS_DIMENSION};
use glyphmix_core::sequence::{validate_sequence, SequenceError};
use thiserror::Error;

use crate::color::Rgba;
use crate::extract::GlyphCache;
use crate::png::{encode_rgba_with_hash, PngConfig, PngError};
use crate::raster::Raster;

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Invalid layout configuration.
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// The display sequence is empty or too long.
    #[error(transparent)]
    Sequence(#[from] SequenceError),

    /// The measured canvas exceeds the largest allowed side.
    #[error("Canvas of {width}x{height} exceeds the {max}px limit")]
    CanvasTooLarge { width: u64, height: u64, max: u32 },

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    Png(#[from] PngError),
}

/// Where one glyph of the sequence is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// The glyph drawn.
    pub glyph: Glyph,
    /// Left edge on the canvas.
    pub x: u32,
    /// Top edge on the canvas.
    pub y: u32,
    /// Rendered width.
    pub width: u32,
    /// Rendered height.
    pub height: u32,
}

/// A measured container with every glyph placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    /// Canvas width; equals the container width.
    pub width: u32,
    /// Canvas height; equals the container height.
    pub height: u32,
    /// Opaque background fill.
    pub background: Rgba,
    /// One placement per glyph, in display order.
    pub placements: Vec<Placement>,
}

impl Composition {
    /// Sum of the rendered glyph widths.
    pub fn content_width(&self) -> u32 {
        self.placements.iter().map(|p| p.width).sum()
    }
}

/// Result of an export.
#[derive(Debug)]
pub struct ExportResult {
    /// PNG-encoded canvas.
    pub png_data: Vec<u8>,
    /// BLAKE3 hash of the PNG data.
    pub hash: String,
    /// The layout that was drawn.
    pub composition: Composition,
}

/// Rendered size of a glyph raster at an optional display height.
///
/// Width is scaled to keep the aspect ratio and never drops below 1px.
pub fn rendered_size(
    raster: &Raster,
    glyph_height: Option<u32>,
) -> Result<(u32, u32), ComposeError> {
    match glyph_height {
        Some(target) if raster.height > 0 && target != raster.height => {
            let scaled = (raster.width as u64 * target as u64 + raster.height as u64 / 2)
                / raster.height as u64;
            let width = u32::try_from(scaled).map_err(|_| ComposeError::CanvasTooLarge {
                width: scaled,
                height: target as u64,
                max: MAX_CANVAS_DIMENSION,
            })?;
            Ok((width.max(1), target))
        }
        _ => Ok((raster.width, raster.height)),
    }
}

/// Lay out the container for a display sequence.
pub fn measure(
    sequence: &[Glyph],
    cache: &GlyphCache,
    layout: &ExportLayout,
) -> Result<Composition, ComposeError> {
    layout.validate()?;
    validate_sequence(sequence)?;
    let background = Rgba::from_rgb8(layout.background_rgb()?);

    let sizes = sequence
        .iter()
        .map(|&glyph| rendered_size(&cache.get(glyph).raster, layout.glyph_height))
        .collect::<Result<Vec<(u32, u32)>, _>>()?;
    let content_width = sizes
        .iter()
        .try_fold(0u32, |total, &(w, _)| total.checked_add(w));
    let content_height = sizes.iter().map(|&(_, h)| h).max().unwrap_or(0);

    let too_large = |width: u64| ComposeError::CanvasTooLarge {
        width,
        height: layout.min_height.max(content_height) as u64,
        max: MAX_CANVAS_DIMENSION,
    };
    let content_width = content_width
        .ok_or_else(|| too_large(sizes.iter().map(|&(w, _)| w as u64).sum()))?;
    let width = layout.min_width.max(content_width);
    let height = layout.min_height.max(content_height);
    if width > MAX_CANVAS_DIMENSION || height > MAX_CANVAS_DIMENSION {
        return Err(too_large(width as u64));
    }

    let mut x = (width - content_width) / 2;
    let placements = sequence
        .iter()
        .zip(&sizes)
        .map(|(&glyph, &(w, h))| {
            let placement = Placement {
                glyph,
                x,
                y: (height - h) / 2,
                width: w,
                height: h,
            };
            x += w;
            placement
        })
        .collect();

    Ok(Composition {
        width,
        height,
        background,
        placements,
    })
}

/// Paint a measured composition.
pub fn render(composition: &Composition, cache: &GlyphCache) -> Raster {
    let mut canvas = Raster::new(composition.width, composition.height, composition.background);

    // Every placement of the same glyph shares one rendered size.
    let mut scaled: BTreeMap<Glyph, Raster> = BTreeMap::new();
    for placement in &composition.placements {
        let stamp = scaled.entry(placement.glyph).or_insert_with(|| {
            cache
                .get(placement.glyph)
                .raster
                .scale_nearest(placement.width, placement.height)
        });
        canvas.draw(stamp, placement.x as i64, placement.y as i64);
    }

    canvas
}

/// Measure, paint and encode a display sequence.
pub fn export(
    sequence: &[Glyph],
    cache: &GlyphCache,
    layout: &ExportLayout,
) -> Result<ExportResult, ComposeError> {
    let composition = measure(sequence, cache, layout)?;
    let canvas = render(&composition, cache);
    let (png_data, hash) = encode_rgba_with_hash(&canvas, &PngConfig::default())?;

    Ok(ExportResult {
        png_data,
        hash,
        composition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::extract_glyphs;

    fn opaque_source(height: u32) -> Raster {
        Raster::new(440, height, Rgba::rgb(250, 250, 250))
    }

    #[test]
    fn test_rendered_size_scales_width() {
        let raster = Raster::transparent(83, 50);
        assert_eq!(rendered_size(&raster, None).unwrap(), (83, 50));
        assert_eq!(rendered_size(&raster, Some(100)).unwrap(), (166, 100));
        assert_eq!(rendered_size(&raster, Some(25)).unwrap(), (42, 25));
    }

    #[test]
    fn test_rendered_size_rejects_unrepresentable_width() {
        let raster = Raster::transparent(84, 1);
        assert!(matches!(
            rendered_size(&raster, Some(u32::MAX)),
            Err(ComposeError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn test_oversized_canvas_is_an_error() {
        // ヤ from a 1px tall logo is 84 * 16384 wide at the maximum height.
        let cache = extract_glyphs(&opaque_source(1)).unwrap();
        let layout = ExportLayout {
            glyph_height: Some(MAX_CANVAS_DIMENSION),
            ..ExportLayout::default()
        };
        assert!(matches!(
            measure(&[Glyph::Ya; 7], &cache, &layout),
            Err(ComposeError::CanvasTooLarge { max: 16384, .. })
        ));
    }

    #[test]
    fn test_unvalidated_layout_is_rejected_before_drawing() {
        let cache = extract_glyphs(&opaque_source(60)).unwrap();
        let layout = ExportLayout {
            glyph_height: Some(4_000_000_000),
            ..ExportLayout::default()
        };
        assert!(matches!(
            export(&[Glyph::Ya; 7], &cache, &layout),
            Err(ComposeError::Layout(LayoutError::InvalidField {
                field: "glyph_height",
                ..
            }))
        ));
    }

    #[test]
    fn test_measure_centers_sequence() {
        let cache = extract_glyphs(&opaque_source(40)).unwrap();
        let composition =
            measure(&[Glyph::Sa, Glyph::I], &cache, &ExportLayout::default()).unwrap();

        assert_eq!((composition.width, composition.height), (576, 200));
        assert_eq!(composition.content_width(), 150);
        assert_eq!(composition.placements[0].x, 213);
        assert_eq!(composition.placements[1].x, 296);
        assert_eq!(composition.placements[0].y, 80);
    }

    #[test]
    fn test_container_grows_for_wide_sequences() {
        let cache = extract_glyphs(&opaque_source(40)).unwrap();
        let sequence = [Glyph::Ya; 7];
        let composition = measure(&sequence, &cache, &ExportLayout::default()).unwrap();

        assert_eq!(composition.width, 7 * 84);
        assert_eq!(composition.placements[0].x, 0);
        assert_eq!(composition.placements[6].x, 6 * 84);
    }

    #[test]
    fn test_measure_rejects_empty_sequence() {
        let cache = extract_glyphs(&opaque_source(10)).unwrap();
        assert!(matches!(
            measure(&[], &cache, &ExportLayout::default()),
            Err(ComposeError::Sequence(SequenceError::Empty))
        ));
    }

    #[test]
    fn test_render_draws_glyph_pixels() {
        let cache = extract_glyphs(&opaque_source(40)).unwrap();
        let composition =
            measure(&[Glyph::Ri], &cache, &ExportLayout::default()).unwrap();
        let canvas = render(&composition, &cache);

        let p = composition.placements[0];
        assert_eq!(canvas.get(p.x, p.y), Rgba::rgb(250, 250, 250));
        assert_eq!(canvas.get(p.x - 1, p.y), Rgba::rgb(0x16, 0xa3, 0x4a));
        assert_eq!(canvas.get(p.x + p.width, p.y), Rgba::rgb(0x16, 0xa3, 0x4a));
    }
}
