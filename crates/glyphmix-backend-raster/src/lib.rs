//! Glyphmix Raster Backend
//!
//! This crate does the pixel work behind the logo widget: it cuts the five
//! catalog glyphs out of the source logo, composites a display sequence onto
//! a flat background, and encodes the result as PNG.
//!
//! # Features
//!
//! - **Sprite extraction**: fixed-offset crops into a [`extract::GlyphCache`]
//! - **Compositing**: centered layout on a container-sized canvas
//! - **Reproducible PNG**: fixed compression settings, BLAKE3 hashes
//! - **Widget state**: readiness gating for regenerate and export
//!
//! # Example
//!
//! ```no_run
//! use glyphmix_backend_raster::widget::LogoWidget;
//! use glyphmix_core::layout::ExportLayout;
//! use glyphmix_core::rng::DeterministicRng;
//!
//! let logo = std::fs::read("logo.png").unwrap();
//! let mut rng = DeterministicRng::new(42);
//!
//! let mut widget = LogoWidget::new(ExportLayout::default());
//! widget.load_png(&logo, &mut rng).unwrap();
//! widget.regenerate(&mut rng).unwrap();
//!
//! let result = widget.export().unwrap();
//! std::fs::write("saizeriya-logo.png", &result.png_data).unwrap();
//! ```

pub mod color;
pub mod compose;
pub mod extract;
pub mod png;
pub mod raster;
pub mod widget;

// Re-export main types for convenience
pub use color::Rgba;
pub use compose::{export, measure, render, ComposeError, Composition, ExportResult, Placement};
pub use extract::{extract_glyphs, EncodedGlyph, ExtractError, GlyphCache};
pub use crate::png::{PngConfig, PngError};
pub use raster::{Raster, RasterError};
pub use widget::{LogoWidget, WidgetError};
