//! Fixed glyph catalog.
//!
//! The source logo carries five katakana glyphs side by side. Each glyph
//! occupies a hand-measured horizontal span and the full image height. The
//! table is co-designed with the logo asset and is not configurable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from glyph lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The token names no glyph in the catalog.
    #[error("Unknown glyph '{0}' (expected one of サ, イ, ゼ, リ, ヤ or sa, i, ze, ri, ya)")]
    UnknownGlyph(String),
}

/// One of the five glyphs cut from the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    /// サ
    Sa,
    /// イ
    I,
    /// ゼ
    Ze,
    /// リ
    Ri,
    /// ヤ
    Ya,
}

impl Glyph {
    /// All glyphs in logo order (left to right).
    pub const ALL: [Glyph; 5] = [Glyph::Sa, Glyph::I, Glyph::Ze, Glyph::Ri, Glyph::Ya];

    /// The katakana character this glyph depicts.
    pub const fn character(self) -> char {
        match self {
            Glyph::Sa => 'サ',
            Glyph::I => 'イ',
            Glyph::Ze => 'ゼ',
            Glyph::Ri => 'リ',
            Glyph::Ya => 'ヤ',
        }
    }

    /// Lowercase romanization, used for file names and ASCII input.
    pub const fn romaji(self) -> &'static str {
        match self {
            Glyph::Sa => "sa",
            Glyph::I => "i",
            Glyph::Ze => "ze",
            Glyph::Ri => "ri",
            Glyph::Ya => "ya",
        }
    }

    /// Left edge of the glyph in the source logo, in pixels.
    pub const fn offset(self) -> u32 {
        match self {
            Glyph::Sa => 56,
            Glyph::I => 139,
            Glyph::Ze => 205,
            Glyph::Ri => 284,
            Glyph::Ya => 352,
        }
    }

    /// Width of the glyph in the source logo, in pixels.
    pub const fn width(self) -> u32 {
        match self {
            Glyph::Sa => 83,
            Glyph::I => 67,
            Glyph::Ze => 78,
            Glyph::Ri => 68,
            Glyph::Ya => 84,
        }
    }

    /// One past the rightmost source column this glyph reads.
    pub const fn end(self) -> u32 {
        self.offset() + self.width()
    }

    /// Position of this glyph in [`Glyph::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks up a glyph by its katakana character.
    pub fn from_char(c: char) -> Option<Glyph> {
        Glyph::ALL.into_iter().find(|g| g.character() == c)
    }
}

/// Minimum source width that contains every glyph span.
pub const REQUIRED_SOURCE_WIDTH: u32 = required_source_width();

const fn required_source_width() -> u32 {
    let mut max = 0;
    let mut i = 0;
    while i < Glyph::ALL.len() {
        let end = Glyph::ALL[i].end();
        if end > max {
            max = end;
        }
        i += 1;
    }
    max
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}

impl FromStr for Glyph {
    type Err = CatalogError;

    /// Accepts either the katakana character or its romanization
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let mut chars = token.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(glyph) = Glyph::from_char(c) {
                return Ok(glyph);
            }
        }

        let lower = token.to_ascii_lowercase();
        Glyph::ALL
            .into_iter()
            .find(|g| g.romaji() == lower)
            .ok_or_else(|| CatalogError::UnknownGlyph(token.to_string()))
    }
}
