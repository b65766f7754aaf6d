//! Glyphmix Core Library
//!
//! This crate holds the pieces of the logo widget that do not touch pixels:
//! the fixed glyph catalog, the random display-sequence generator, the
//! seeded RNG that drives it, and the export layout configuration.
//!
//! # Example
//!
//! ```
//! use glyphmix_core::rng::DeterministicRng;
//! use glyphmix_core::sequence::{generate_sequence, MAX_SEQUENCE_LEN};
//!
//! let mut rng = DeterministicRng::new(42);
//! let sequence = generate_sequence(&mut rng);
//! assert!(!sequence.is_empty() && sequence.len() <= MAX_SEQUENCE_LEN);
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: The five glyphs and their pixel spans in the source logo
//! - [`sequence`]: Display sequence generation and parsing
//! - [`rng`]: PCG32-backed random source
//! - [`layout`]: Export canvas configuration
//! - [`strings`]: Fixed user-facing text

pub mod catalog;
pub mod layout;
pub mod rng;
pub mod sequence;
pub mod strings;

pub use catalog::{CatalogError, Glyph, REQUIRED_SOURCE_WIDTH};
pub use layout::{ExportLayout, LayoutError};
pub use rng::DeterministicRng;
pub use sequence::{generate_sequence, parse_sequence, GlyphDraw, ScriptedDraw, SequenceError};
