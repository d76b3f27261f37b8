//! Parsing for the supported input format.
//!
//! This module decodes keyboard-layout-editor.com raw data into the grid
//! structure the rest of the converter works from.

pub mod kle;

// Re-export commonly used items
pub use kle::{decode_raw, KleLayout, KleMetadata, KlePlacement};
