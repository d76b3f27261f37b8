//! Key model and per-key script fragments.
//!
//! A [`Key`] carries one switch's geometry and renders its own script
//! snippets: the schematic symbol with its row-isolation diode, and the
//! board placement of the matching footprints. Column wiring between keys
//! is not rendered here; the column synthesizer only consumes
//! [`Key::column_pin_scr`].

use crate::config::{DiodeType, EagleVersion, LedMode};
use crate::constants::{
    BRD_DIODE_OFFSET_MM, BRD_LED_OFFSET_MM, KEY_SPACING_IN, ROW_SPACING_IN, SCH_COL_OFFSET,
    SCH_DIODE_OFFSET, SCH_LED_OFFSET, SCH_ROW_OFFSET,
};
use crate::eagle::script::{float_to_str, translate_board_coords};
use crate::parser::kle::KlePlacement;

/// Positional metadata from the previously placed key.
///
/// Carried through the parsing loop so each key can derive its schematic
/// position from its predecessor. This is a value snapshot, not a reference:
/// placement order is the only relationship it encodes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchCursor {
    /// Schematic x of the previous key, in inches.
    pub x: f64,
    /// Grid row the previous key belongs to.
    pub row: usize,
}

/// One physical key switch.
#[derive(Debug, Clone, PartialEq)]
pub struct Key {
    /// Unique electrical name (after collision resolution).
    pub name: String,
    /// Grid coordinate (column, row) as laid out.
    pub coord: (usize, usize),
    /// Key center on the board, in millimeters (y grows downward).
    pub coord_mm: (f64, f64),
    /// Width class in keyboard units.
    pub width: f64,
    /// Resolved footprint identifier.
    pub footprint: String,
    /// Diode mounting style.
    pub diode: DiodeType,
    /// Per-key LED population.
    pub led: LedMode,
    eagle_version: EagleVersion,
    sch_coord: (f64, f64),
}

impl Key {
    /// Builds a key from a decoded placement.
    ///
    /// `prev` is the cursor of the previously placed key; keys in the same
    /// row advance one symbol pitch from it, and each new row restarts at
    /// the sheet's left edge.
    pub fn new(
        name: String,
        prev: Option<&SchCursor>,
        placement: &KlePlacement,
        footprint: String,
        diode: DiodeType,
        led: LedMode,
        eagle_version: EagleVersion,
    ) -> Self {
        let sch_x = match prev {
            Some(cursor) if cursor.row == placement.row => cursor.x + KEY_SPACING_IN,
            _ => 0.0,
        };
        let sch_y = -(placement.row as f64) * ROW_SPACING_IN;

        Self {
            name,
            coord: (placement.column, placement.row),
            coord_mm: (placement.x_mm, placement.y_mm),
            width: placement.width,
            footprint,
            diode,
            led,
            eagle_version,
            sch_coord: (sch_x, sch_y),
        }
    }

    /// This key's cursor, for placing the next key.
    #[must_use]
    pub const fn cursor(&self) -> SchCursor {
        SchCursor {
            x: self.sch_coord.0,
            row: self.coord.1,
        }
    }

    /// Schematic position of the switch symbol, in inches.
    #[must_use]
    pub const fn sch_coord(&self) -> (f64, f64) {
        self.sch_coord
    }

    /// Schematic coordinate of the switch's column pin, in inches.
    ///
    /// This is the electrical attachment point for column wiring.
    #[must_use]
    pub fn column_pin_scr(&self) -> (f64, f64) {
        (
            self.sch_coord.0 + SCH_COL_OFFSET.0,
            self.sch_coord.1 + SCH_COL_OFFSET.1,
        )
    }

    /// Part name of this key's diode.
    #[must_use]
    pub fn diode_name(&self) -> String {
        format!("D_{}", self.name)
    }

    /// Part name of this key's LED, if one is populated.
    #[must_use]
    pub fn led_name(&self) -> String {
        format!("LED_{}", self.name)
    }

    /// Renders the schematic fragment: switch symbol, diode, row wiring.
    #[must_use]
    pub fn schematic_scr(&self) -> String {
        let (x, y) = self.sch_coord;
        let (rx, ry) = (x + SCH_ROW_OFFSET.0, y + SCH_ROW_OFFSET.1);
        let (dx, dy) = (x + SCH_DIODE_OFFSET.0, y + SCH_DIODE_OFFSET.1);
        let row = self.coord.1;

        let mut lines = vec![
            format!(
                "ADD {} '{}' R0 ({} {});",
                self.footprint,
                self.name,
                float_to_str(x),
                float_to_str(y)
            ),
            format!(
                "ADD {} '{}' R90 ({} {});",
                self.diode.device(),
                self.diode_name(),
                float_to_str(dx),
                float_to_str(dy)
            ),
            // Row pin down to the diode anode.
            format!(
                "NET ROW{} ({} {}) ({} {});",
                row,
                float_to_str(rx),
                float_to_str(ry),
                float_to_str(rx),
                float_to_str(dy + 0.1)
            ),
            // Cathode stub out to the left; segments of one row share the
            // net name, so EAGLE joins them electrically.
            format!(
                "NET ROW{} ({} {}) ({} {});",
                row,
                float_to_str(dx),
                float_to_str(dy - 0.1),
                float_to_str(x + SCH_COL_OFFSET.0),
                float_to_str(dy - 0.1)
            ),
        ];

        if let Some(device) = self.led.device() {
            lines.push(format!(
                "ADD {} '{}' R0 ({} {});",
                device,
                self.led_name(),
                float_to_str(x + SCH_LED_OFFSET.0),
                float_to_str(y + SCH_LED_OFFSET.1)
            ));
        }

        lines.join("\n")
    }

    /// Renders the board fragment placing this key's parts.
    ///
    /// Board y grows upward, so the layout's downward-growing millimeter
    /// rows are negated. The free dialect's coordinate translation is
    /// applied here so every fragment this key contributes is already in
    /// the allowed area.
    #[must_use]
    pub fn board_scr(&self) -> String {
        let (x, y) = (self.coord_mm.0, -self.coord_mm.1);

        let mut lines = vec![
            format!(
                "MOVE '{}' ({} {});",
                self.name,
                float_to_str(x),
                float_to_str(y)
            ),
            format!(
                "MOVE '{}' ({} {});",
                self.diode_name(),
                float_to_str(x),
                float_to_str(y + BRD_DIODE_OFFSET_MM)
            ),
            format!("ROTATE R90 '{}';", self.diode_name()),
        ];

        if self.diode.is_smd() {
            // SMD diodes sit on the solder side, under the switch.
            lines.push(format!("MIRROR '{}';", self.diode_name()));
        }

        if self.led.device().is_some() {
            lines.push(format!(
                "MOVE '{}' ({} {});",
                self.led_name(),
                float_to_str(x),
                float_to_str(y + BRD_LED_OFFSET_MM)
            ));
        }

        let script = lines.join("\n");
        match self.eagle_version {
            EagleVersion::Free => translate_board_coords(&script),
            EagleVersion::Standard => script,
        }
    }
}
