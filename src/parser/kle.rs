//! keyboard-layout-editor.com raw-data decoding.
//!
//! KLE's "raw data" export is a JSON5 dialect (unquoted property names,
//! trailing commas) listing one array per physical row. Strings are key
//! caps; objects adjust the placement cursor for the keys that follow them
//! (`x`/`y` offsets in key units, `w`/`h` sizes). A leading object carries
//! keyboard metadata. This module decodes that text into a grid of key
//! records with resolved millimeter center coordinates.

use crate::constants::MM_PER_UNIT;
use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Keyboard metadata from the optional leading object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KleMetadata {
    /// Keyboard name.
    pub name: Option<String>,
    /// Layout author.
    pub author: Option<String>,
    /// Case background color.
    pub backcolor: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
}

/// One decoded key record.
#[derive(Debug, Clone, PartialEq)]
pub struct KlePlacement {
    /// Raw key-cap label, legend lines separated by newlines.
    pub label: String,
    /// Key width in units.
    pub width: f64,
    /// Key height in units.
    pub height: f64,
    /// Grid column: index of this key within its row.
    pub column: usize,
    /// Grid row: index of the row within the layout.
    pub row: usize,
    /// Key center x in millimeters.
    pub x_mm: f64,
    /// Key center y in millimeters, growing downward.
    pub y_mm: f64,
}

/// A fully decoded layout: metadata plus the row/key grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KleLayout {
    /// Keyboard metadata, empty if the export had no metadata block.
    pub metadata: KleMetadata,
    /// Rows of key records in source order.
    pub rows: Vec<Vec<KlePlacement>>,
}

impl KleLayout {
    /// Total number of decoded keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Size carried forward to the next key, reset after each placement.
struct PendingPlacement {
    width: f64,
    height: f64,
}

impl Default for PendingPlacement {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

/// Decodes KLE raw data into a layout grid.
///
/// Accepts both the downloaded JSON form (a single top-level array) and the
/// pasteable raw-data form (row arrays joined by commas, no outer brackets).
///
/// # Errors
///
/// Returns an error if the text is not parseable as KLE raw data, if the
/// top level is not an array of rows, or if no keys are decoded at all.
pub fn decode_raw(raw: &str) -> Result<KleLayout> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        bail!("Layout is empty: expected keyboard-layout-editor raw data");
    }

    let value: Value = match json5::from_str(trimmed) {
        Ok(value) => value,
        // The pasteable form omits the outer brackets; wrap and retry.
        Err(_) => json5::from_str(&format!("[{trimmed}]"))
            .context("Failed to parse layout as keyboard-layout-editor raw data")?,
    };

    let items = match value {
        Value::Array(items) => items,
        other => bail!(
            "Layout must be an array of rows, got a single {}",
            value_kind(&other)
        ),
    };

    // A pasted single row arrives as a bare array of labels; treat it as
    // a one-row layout instead of rejecting it.
    let items = if items.iter().any(Value::is_array) || items.iter().all(Value::is_object) {
        items
    } else {
        vec![Value::Array(items)]
    };

    let mut layout = KleLayout::default();
    let mut cursor_y = 0.0;

    for item in &items {
        match item {
            Value::Object(props) => {
                if !layout.rows.is_empty() {
                    bail!("Metadata block must come before the first row");
                }
                read_metadata(props, &mut layout.metadata);
            }
            Value::Array(cells) => {
                let row = decode_row(cells, layout.rows.len(), &mut cursor_y)?;
                layout.rows.push(row);
                cursor_y += 1.0;
            }
            other => {
                bail!("Unexpected {} at the top level of the layout", value_kind(other));
            }
        }
    }

    if layout.key_count() == 0 {
        bail!("Layout contains no keys");
    }

    Ok(layout)
}

/// Decodes one row of cells, advancing the vertical cursor for offsets.
fn decode_row(
    cells: &[Value],
    row_index: usize,
    cursor_y: &mut f64,
) -> Result<Vec<KlePlacement>> {
    let mut row = Vec::new();
    let mut cursor_x = 0.0;
    let mut pending = PendingPlacement::default();

    for cell in cells {
        match cell {
            Value::String(label) => {
                row.push(KlePlacement {
                    label: label.clone(),
                    width: pending.width,
                    height: pending.height,
                    column: row.len(),
                    row: row_index,
                    x_mm: (cursor_x + pending.width / 2.0) * MM_PER_UNIT,
                    y_mm: (*cursor_y + pending.height / 2.0) * MM_PER_UNIT,
                });
                cursor_x += pending.width;
                pending = PendingPlacement::default();
            }
            Value::Object(props) => {
                if let Some(dx) = props.get("x").and_then(Value::as_f64) {
                    cursor_x += dx;
                }
                if let Some(dy) = props.get("y").and_then(Value::as_f64) {
                    *cursor_y += dy;
                }
                if let Some(w) = props.get("w").and_then(Value::as_f64) {
                    pending.width = w;
                }
                if let Some(h) = props.get("h").and_then(Value::as_f64) {
                    pending.height = h;
                }
                // Color, profile and alignment properties don't affect
                // placement and are skipped.
            }
            other => {
                bail!(
                    "Unexpected {} in row {}: rows hold labels and property objects",
                    value_kind(other),
                    row_index
                );
            }
        }
    }

    Ok(row)
}

/// Copies the recognized metadata fields out of a leading object.
fn read_metadata(props: &serde_json::Map<String, Value>, metadata: &mut KleMetadata) {
    let field = |key: &str| props.get(key).and_then(Value::as_str).map(String::from);

    metadata.name = field("name");
    metadata.author = field("author");
    metadata.backcolor = field("backcolor");
    metadata.notes = field("notes");
}

/// Human-readable JSON value kind for error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
