//! Column topology synthesis.
//!
//! Matrix-scan keyboards wire every key into one electrical row (isolated
//! by its diode) and one electrical column (a shared net running through
//! one key per row). This module walks the parsed rows column-by-column,
//! chains vertically adjacent keys with NET statements, and renumbers the
//! columns left-to-right for the final script.
//!
//! Keys are consumed from alternating ends of each row: even traversal
//! indices take the left end, odd ones the right. Walking outside-in keeps
//! column nets short instead of dragging diagonals across the whole grid;
//! the renumbering pass afterwards restores left-to-right column names so
//! the output stays readable.

use crate::config::EagleVersion;
use crate::constants::{COLUMN_BOTTOM_CLEARANCE_IN, COLUMN_TOP_CLEARANCE_IN};
use crate::eagle::script::{float_to_str, translate_board_coords};
use crate::models::Key;
use std::collections::{BTreeMap, HashMap, VecDeque};

/// Placeholder substituted with the final column number during renumbering.
const COLUMN_PLACEHOLDER: &str = "{column}";

/// Synthesizes the column wiring for the whole keyboard.
///
/// `rows` is the canonical row structure (never mutated here: the traversal
/// runs on a disposable working copy), `keys` resolves names to keys, and
/// `max_col` bounds the traversal. Returns the schematic and board column
/// fragments; the board fragment mirrors the schematic's column structure
/// and passes through the free-dialect coordinate translation when that
/// dialect is selected.
pub fn column_scr(
    rows: &[Vec<String>],
    keys: &HashMap<String, Key>,
    max_col: usize,
    eagle_version: EagleVersion,
) -> (String, String) {
    let mut work: Vec<VecDeque<&String>> =
        rows.iter().map(|row| row.iter().collect()).collect();
    let mut row_positions: VecDeque<usize> = (1..=max_col).collect();

    let mut schematic_columns: BTreeMap<usize, Vec<String>> = BTreeMap::new();
    let mut board_columns: BTreeMap<usize, Vec<String>> = BTreeMap::new();

    for column in 1..=max_col {
        let mut last_key: Option<&Key> = None;
        let mut row_position = None;
        let take_left = column % 2 == 0;

        for row in &mut work {
            let Some(name) = (if take_left {
                row.pop_front()
            } else {
                row.pop_back()
            }) else {
                // Exhausted row: skip it, the chain bridges to the next
                // row that still yields a key.
                continue;
            };
            let key = &keys[name.as_str()];

            // The first row to yield a key claims the slot number for
            // everything popped during this traversal index.
            let position = *row_position.get_or_insert_with(|| {
                let claimed = if take_left {
                    row_positions.pop_front()
                } else {
                    row_positions.pop_back()
                };
                claimed.expect("one slot is claimed per traversal index")
            });

            let nets = schematic_columns.entry(position).or_default();
            board_columns.entry(position).or_default();

            if let Some(upper) = last_key {
                nets.push(net_triplet(upper, key));
            }
            last_key = Some(key);
        }
    }

    // Renumber left to right: slots were claimed outside-in, the script
    // should read in physical column order.
    let schematic = renumber(&schematic_columns);
    let mut board = renumber(&board_columns);

    if eagle_version == EagleVersion::Free {
        board = translate_board_coords(&board);
    }

    (schematic, board)
}

/// Three NET statements chaining `upper` to `lower` in the same column.
///
/// The wire leaves the upper pin straight down, crosses over to the lower
/// key, and drops onto its pin from below. The fixed clearances keep the
/// path from crossing either switch symbol.
fn net_triplet(upper: &Key, lower: &Key) -> String {
    let (ux, uy) = upper.column_pin_scr();
    let (lx, ly) = lower.column_pin_scr();
    let top = uy - COLUMN_TOP_CLEARANCE_IN;
    let bottom = ly + COLUMN_BOTTOM_CLEARANCE_IN;

    [
        format!(
            "NET COLUMN{COLUMN_PLACEHOLDER} ({} {}) ({} {});",
            float_to_str(ux),
            float_to_str(uy),
            float_to_str(ux),
            float_to_str(top)
        ),
        format!(
            "NET COLUMN{COLUMN_PLACEHOLDER} ({} {}) ({} {});",
            float_to_str(ux),
            float_to_str(top),
            float_to_str(lx),
            float_to_str(bottom)
        ),
        format!(
            "NET COLUMN{COLUMN_PLACEHOLDER} ({} {}) ({} {});",
            float_to_str(lx),
            float_to_str(bottom),
            float_to_str(lx),
            float_to_str(ly)
        ),
    ]
    .join("\n")
}

/// Joins each slot's fragments in ascending slot order, substituting the
/// slot number for the column placeholder.
fn renumber(columns: &BTreeMap<usize, Vec<String>>) -> String {
    columns
        .iter()
        .map(|(position, fragments)| {
            fragments
                .join("\n")
                .replace(COLUMN_PLACEHOLDER, &position.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, DiodeType, LedMode};
    use crate::models::footprint::footprint_for_width;
    use crate::models::key::SchCursor;
    use crate::parser::kle::KlePlacement;

    /// Builds rows/keys the way the layout parser would, from plain names.
    fn build(names: &[&[&str]]) -> (Vec<Vec<String>>, HashMap<String, Key>, usize) {
        let config = Config::default();
        let mut rows = Vec::new();
        let mut keys = HashMap::new();
        let mut max_col = 0;
        let mut cursor: Option<SchCursor> = None;

        for (row_index, row_names) in names.iter().enumerate() {
            let mut row = Vec::new();
            for (col, name) in row_names.iter().enumerate() {
                let placement = KlePlacement {
                    label: (*name).to_string(),
                    width: 1.0,
                    height: 1.0,
                    column: col,
                    row: row_index,
                    x_mm: (col as f64 + 0.5) * 19.05,
                    y_mm: (row_index as f64 + 0.5) * 19.05,
                };
                let key = Key::new(
                    (*name).to_string(),
                    cursor.as_ref(),
                    &placement,
                    footprint_for_width(&config.switch_footprint, 1.0),
                    DiodeType::ThroughHole,
                    LedMode::No,
                    EagleVersion::Standard,
                );
                cursor = Some(key.cursor());
                row.push((*name).to_string());
                keys.insert((*name).to_string(), key);
            }
            max_col = max_col.max(row.len());
            rows.push(row);
        }

        (rows, keys, max_col)
    }

    fn net_count(script: &str, column: usize) -> usize {
        script
            .lines()
            .filter(|line| line.starts_with(&format!("NET COLUMN{column} ")))
            .count()
    }

    #[test]
    fn test_two_by_two_gives_two_columns_of_one_triplet() {
        let (rows, keys, max_col) = build(&[&["Q", "W"], &["A", "S"]]);
        let (schematic, _) = column_scr(&rows, &keys, max_col, EagleVersion::Standard);

        assert_eq!(net_count(&schematic, 1), 3);
        assert_eq!(net_count(&schematic, 2), 3);
        assert_eq!(net_count(&schematic, 3), 0);
    }

    #[test]
    fn test_single_row_emits_no_nets() {
        let (rows, keys, max_col) = build(&[&["A", "B", "C"]]);
        let (schematic, board) = column_scr(&rows, &keys, max_col, EagleVersion::Standard);

        assert!(!schematic.contains("NET"));
        assert!(!board.contains("NET"));
    }

    #[test]
    fn test_columns_are_renumbered_left_to_right() {
        let (rows, keys, max_col) = build(&[&["Q", "W", "E"], &["A", "S", "D"]]);
        let (schematic, _) = column_scr(&rows, &keys, max_col, EagleVersion::Standard);

        let first = schematic.find("NET COLUMN1 ").expect("column 1 present");
        let second = schematic.find("NET COLUMN2 ").expect("column 2 present");
        let third = schematic.find("NET COLUMN3 ").expect("column 3 present");
        assert!(first < second);
        assert!(second < third);
    }

    #[test]
    fn test_leftmost_column_connects_leftmost_keys() {
        let (rows, keys, max_col) = build(&[&["Q", "W"], &["A", "S"]]);
        let (schematic, _) = column_scr(&rows, &keys, max_col, EagleVersion::Standard);

        // Column 1 must chain Q over A: its first statement starts at Q's
        // column pin.
        let (qx, qy) = keys["Q"].column_pin_scr();
        let expected = format!(
            "NET COLUMN1 ({} {}) (",
            float_to_str(qx),
            float_to_str(qy)
        );
        assert!(
            schematic.contains(&expected),
            "column 1 should start at Q's pin:\n{schematic}"
        );
    }

    #[test]
    fn test_jagged_rows_skip_missing_neighbors() {
        let (rows, keys, max_col) = build(&[&["Q", "W", "E"], &["A", "S"]]);
        let (schematic, _) = column_scr(&rows, &keys, max_col, EagleVersion::Standard);

        // Two slots pair up across the rows, the surplus key wires nothing.
        let total_nets = schematic
            .lines()
            .filter(|line| line.starts_with("NET COLUMN"))
            .count();
        assert_eq!(total_nets, 6);
    }

    #[test]
    fn test_canonical_rows_are_not_mutated() {
        let (rows, keys, max_col) = build(&[&["Q", "W"], &["A", "S"]]);
        let before = rows.clone();
        let _ = column_scr(&rows, &keys, max_col, EagleVersion::Standard);
        assert_eq!(rows, before);
    }

    #[test]
    fn test_net_triplet_applies_clearances() {
        let (rows, keys, max_col) = build(&[&["Q"], &["A"]]);
        let (schematic, _) = column_scr(&rows, &keys, max_col, EagleVersion::Standard);

        let (ux, uy) = keys["Q"].column_pin_scr();
        let (lx, ly) = keys["A"].column_pin_scr();
        let top = float_to_str(uy - COLUMN_TOP_CLEARANCE_IN);
        let bottom = float_to_str(ly + COLUMN_BOTTOM_CLEARANCE_IN);

        assert!(schematic.contains(&format!(
            "({} {}) ({} {});",
            float_to_str(ux),
            float_to_str(uy),
            float_to_str(ux),
            top
        )));
        assert!(schematic.contains(&format!(
            "({} {}) ({} {});",
            float_to_str(lx),
            bottom,
            float_to_str(lx),
            float_to_str(ly)
        )));
    }
}
