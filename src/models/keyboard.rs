//! Keyboard aggregate: layout parsing and script assembly.
//!
//! A [`Keyboard`] is built once from raw keyboard-layout-editor data. The
//! constructor runs the whole pipeline: decode the grid, translate labels
//! and resolve collisions, place keys, synthesize the column topology, and
//! assemble both scripts. A built keyboard is immutable; the script
//! accessors return the precomputed text.

use crate::config::{Config, DiodeType, EagleVersion, LedMode};
use crate::eagle::columns::column_scr;
use crate::eagle::script::{
    board_footer, board_preamble, schematic_footer, schematic_preamble,
};
use crate::labels::translate_label;
use crate::models::footprint::footprint_for_width;
use crate::models::key::{Key, SchCursor};
use crate::parser::kle::{decode_raw, KleLayout, KleMetadata};
use anyhow::{bail, Result};
use std::collections::HashMap;

/// A parsed keyboard and its generated scripts.
#[derive(Debug, Clone)]
pub struct Keyboard {
    eagle_version: EagleVersion,
    switch_footprint: String,
    diode: DiodeType,
    led_mode: LedMode,
    metadata: KleMetadata,
    rows: Vec<Vec<String>>,
    keys: HashMap<String, Key>,
    max_col: usize,
    warnings: Vec<String>,
    schematic_scr: String,
    board_scr: String,
}

impl Keyboard {
    /// Builds a keyboard from raw keyboard-layout-editor data.
    ///
    /// Parsing runs exactly once, here. Both scripts are rendered before
    /// the constructor returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw data cannot be decoded or describes an
    /// empty layout. There is no partial-keyboard recovery: any failure
    /// aborts construction.
    pub fn new(raw: &str, config: &Config) -> Result<Self> {
        let layout = decode_raw(raw)?;

        let mut keyboard = Self {
            eagle_version: config.eagle_version,
            switch_footprint: config.switch_footprint.clone(),
            diode: config.diode,
            led_mode: config.led_mode,
            metadata: layout.metadata.clone(),
            rows: Vec::new(),
            keys: HashMap::new(),
            max_col: 0,
            warnings: Vec::new(),
            schematic_scr: String::new(),
            board_scr: String::new(),
        };

        keyboard.parse_layout(&layout)?;
        keyboard.render_scripts();

        Ok(keyboard)
    }

    /// Walks the decoded grid and builds the ordered key collection.
    fn parse_layout(&mut self, layout: &KleLayout) -> Result<()> {
        if layout.rows.is_empty() {
            bail!("Layout has no rows");
        }

        let mut cursor: Option<SchCursor> = None;

        for grid_row in &layout.rows {
            let mut row = Vec::with_capacity(grid_row.len());

            for placement in grid_row {
                let translation =
                    translate_label(&placement.label, |name| self.keys.contains_key(name));
                if let Some(original) = &translation.renamed_from {
                    self.warnings.push(format!(
                        "Duplicate key {original}! Renaming to {}!",
                        translation.name
                    ));
                }

                let footprint = footprint_for_width(&self.switch_footprint, placement.width);
                let key = Key::new(
                    translation.name.clone(),
                    cursor.as_ref(),
                    placement,
                    footprint,
                    self.diode,
                    self.led_mode,
                    self.eagle_version,
                );

                cursor = Some(key.cursor());
                row.push(translation.name.clone());
                self.keys.insert(translation.name, key);
            }

            if row.len() > self.max_col {
                self.max_col = row.len();
            }
            self.rows.push(row);
        }

        if self.keys.is_empty() {
            bail!("Layout contains no keys");
        }

        Ok(())
    }

    /// Assembles both scripts from the per-key and column fragments.
    fn render_scripts(&mut self) {
        let key_schematic = self
            .iter()
            .map(Key::schematic_scr)
            .collect::<Vec<_>>()
            .join("\n");
        let key_board = self
            .iter()
            .map(Key::board_scr)
            .collect::<Vec<_>>()
            .join("\n");

        let (column_schematic, column_board) =
            column_scr(&self.rows, &self.keys, self.max_col, self.eagle_version);

        self.schematic_scr = [
            schematic_preamble(),
            key_schematic,
            column_schematic,
            schematic_footer().to_string(),
        ]
        .join("\n");

        self.board_scr = [
            board_preamble(),
            key_board,
            column_board,
            board_footer().to_string(),
        ]
        .join("\n");
    }

    /// The schematic script.
    #[must_use]
    pub fn schematic_scr(&self) -> &str {
        &self.schematic_scr
    }

    /// The board script.
    #[must_use]
    pub fn board_scr(&self) -> &str {
        &self.board_scr
    }

    /// Both scripts, schematic first.
    #[must_use]
    pub fn generate(&self) -> (&str, &str) {
        (&self.schematic_scr, &self.board_scr)
    }

    /// Keyboard metadata from the layout's metadata block.
    #[must_use]
    pub fn metadata(&self) -> &KleMetadata {
        &self.metadata
    }

    /// Key names per row, in placement order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Length of the longest row.
    #[must_use]
    pub fn max_col(&self) -> usize {
        self.max_col
    }

    /// Warnings recorded during parsing (duplicate-label renames).
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Looks up a key by its electrical name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Key> {
        self.keys.get(name)
    }

    /// Total number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Iterates keys in canonical order: row-major, left to right.
    pub fn iter(&self) -> impl Iterator<Item = &Key> {
        self.rows
            .iter()
            .flatten()
            .map(|name| &self.keys[name.as_str()])
    }
}

impl<'a> IntoIterator for &'a Keyboard {
    type Item = &'a Key;
    type IntoIter = Box<dyn Iterator<Item = &'a Key> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
