//! Shared helpers for emitting EAGLE script text.
//!
//! EAGLE scripts are plain command text; everything here is string assembly:
//! the fixed preambles and footers, coordinate formatting, and the
//! coordinate-translation pass required by the free EAGLE dialect.

use crate::constants::FREE_BOARD_HEIGHT_MM;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Preamble placed at the top of every schematic script.
///
/// Sets up an inch grid matching the 0.1 in pin pitch of the switch symbols
/// and right-angle wire bends so NET statements route predictably.
pub fn schematic_preamble() -> String {
    [
        "GRID ON;",
        "GRID IN 0.1 1;",
        "GRID ALT IN 0.01;",
        "SET WIRE_BEND 2;",
        "",
        "",
    ]
    .join("\n")
}

/// Footer placed at the bottom of every schematic script.
pub fn schematic_footer() -> &'static str {
    "\n\nWINDOW FIT;"
}

/// Preamble placed at the top of every board script.
pub fn board_preamble() -> String {
    ["GRID ON;", "GRID MM 1 10;", "GRID ALT MM .1;", "", ""].join("\n")
}

/// Footer placed at the bottom of every board script.
pub fn board_footer() -> &'static str {
    "\n\nRATSNEST;\nWINDOW FIT;"
}

/// Formats a coordinate for script output.
///
/// EAGLE rejects scientific notation, so values are rendered as plain
/// decimals with trailing zeros trimmed. Negative zero collapses to `0`.
pub fn float_to_str(value: f64) -> String {
    let mut text = format!("{value:.4}");

    if text.contains('.') {
        text = text.trim_end_matches('0').trim_end_matches('.').to_string();
    }

    if text == "-0" {
        text = "0".to_string();
    }

    text
}

fn coord_pair_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\((-?\d+(?:\.\d+)?) (-?\d+(?:\.\d+)?)\)").expect("coordinate regex is valid")
    })
}

/// Shifts every board coordinate pair into the free dialect's editing area.
///
/// The free EAGLE dialect confines boards to a 100 x 80 mm region in the
/// positive quadrant. Generated board coordinates grow downward from the
/// origin, so each `(x y)` pair has its y raised by the region height.
pub fn translate_board_coords(script: &str) -> String {
    coord_pair_regex()
        .replace_all(script, |caps: &Captures<'_>| {
            let x: f64 = caps[1].parse().unwrap_or(0.0);
            let y: f64 = caps[2].parse().unwrap_or(0.0);
            format!(
                "({} {})",
                float_to_str(x),
                float_to_str(y + FREE_BOARD_HEIGHT_MM)
            )
        })
        .into_owned()
}
