//! EAGLE script generation.
//!
//! This module handles everything that is specifically about the EAGLE
//! script dialect: fixed preambles and footers, coordinate formatting,
//! the free-dialect coordinate translation, and the column-topology
//! synthesis that wires keys into matrix columns.

pub mod columns;
pub mod script;

// Re-export the pieces the models and CLI use
pub use columns::column_scr;
pub use script::{float_to_str, translate_board_coords};
