//! Glyphmix CLI library.
//!
//! This crate provides the command implementations behind the `glyphmix`
//! binary: catalog listing, glyph extraction, one-shot generation and the
//! interactive widget session.

pub mod commands;
pub mod input;
