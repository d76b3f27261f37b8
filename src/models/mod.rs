//! Data models for keys, keyboards, and footprint selection.
//!
//! This module contains the core data structures of the converter.
//! Models render their own script fragments but know nothing about
//! files or the CLI.

pub mod footprint;
pub mod key;
pub mod keyboard;

// Re-export all model types
pub use footprint::footprint_for_width;
pub use key::{Key, SchCursor};
pub use keyboard::Keyboard;
