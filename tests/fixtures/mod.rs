//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every suite uses every fixture

use kle2eagle::config::Config;
use kle2eagle::models::Keyboard;

/// Raw data for a 2x2 grid: Q W / A S.
pub const TWO_BY_TWO: &str = r#"[["Q","W"],["A","S"]]"#;

/// Raw data for a single row of three keys.
pub const ONE_ROW_OF_THREE: &str = r#"[["Z","X","C"]]"#;

/// Raw data with jagged row lengths.
pub const JAGGED: &str = r#"[["Q","W","E","R"],["A","S"],["Z","X","C"]]"#;

/// A small layout exercising metadata, offsets, wide keys and legends.
pub const SIXTY_SLICE: &str = r#"[
  {"name": "Sixty Slice", "author": "fixture"},
  ["~\n`", "!\n1", "@\n2"],
  [{"w": 1.5}, "Tab", "Q", "W"],
  [{"x": 0.5}, "A", "S", "D"]
]"#;

/// Builds a keyboard from raw data with default settings.
pub fn keyboard(raw: &str) -> Keyboard {
    Keyboard::new(raw, &Config::default()).expect("fixture layout should parse")
}

/// Builds a keyboard from raw data with the given settings.
pub fn keyboard_with(raw: &str, config: &Config) -> Keyboard {
    Keyboard::new(raw, config).expect("fixture layout should parse")
}

/// Counts the schematic net statements for one column number.
pub fn column_net_count(script: &str, column: usize) -> usize {
    script
        .lines()
        .filter(|line| line.starts_with(&format!("NET COLUMN{column} ")))
        .count()
}

/// Lists the distinct column numbers that appear in a script, in first-use
/// order.
pub fn column_numbers(script: &str) -> Vec<usize> {
    let mut numbers = Vec::new();
    for line in script.lines() {
        if let Some(rest) = line.strip_prefix("NET COLUMN") {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            if let Ok(number) = digits.parse::<usize>() {
                if !numbers.contains(&number) {
                    numbers.push(number);
                }
            }
        }
    }
    numbers
}
