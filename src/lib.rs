//! kle2eagle library
//!
//! This library converts keyboard layouts exported from
//! keyboard-layout-editor.com into EAGLE schematic and board scripts,
//! including label translation, footprint selection, and the column
//! wiring for a matrix-scan keyboard.

// Module declarations
pub mod config;
pub mod constants;
pub mod eagle;
pub mod labels;
pub mod models;
pub mod parser;
