//! CLI command implementations

pub mod catalog;
pub mod extract;
pub mod generate;
pub mod json_output;
pub mod play;
