//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fixed geometry used when
//! placing symbols and footprints.

/// The display name of the application (human-readable).
pub const APP_NAME: &str = "kle2eagle";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "kle2eagle";

/// Millimeters per keyboard unit (1u key pitch).
pub const MM_PER_UNIT: f64 = 19.05;

/// Horizontal spacing between key symbols on the schematic sheet, in inches.
pub const KEY_SPACING_IN: f64 = 0.8;

/// Vertical spacing between key rows on the schematic sheet, in inches.
pub const ROW_SPACING_IN: f64 = 1.0;

/// Offset from a key's schematic position to its column pin, in inches.
pub const SCH_COL_OFFSET: (f64, f64) = (-0.3, 0.1);

/// Offset from a key's schematic position to its row pin, in inches.
pub const SCH_ROW_OFFSET: (f64, f64) = (0.1, -0.1);

/// Offset from a key's schematic position to its diode symbol, in inches.
pub const SCH_DIODE_OFFSET: (f64, f64) = (0.1, -0.45);

/// Offset from a key's schematic position to its LED symbol, in inches.
pub const SCH_LED_OFFSET: (f64, f64) = (-0.2, -0.45);

/// Clearance above the upper key's column pin when wiring a column, in inches.
pub const COLUMN_TOP_CLEARANCE_IN: f64 = 0.5;

/// Clearance below the lower key's column pin when wiring a column, in inches.
pub const COLUMN_BOTTOM_CLEARANCE_IN: f64 = 0.75;

/// Vertical offset from a switch footprint to its diode on the board, in mm.
pub const BRD_DIODE_OFFSET_MM: f64 = 4.5;

/// Vertical offset from a switch footprint to its LED on the board, in mm.
pub const BRD_LED_OFFSET_MM: f64 = -5.08;

/// Height of the editing area available in the free EAGLE dialect, in mm.
///
/// Board coordinates are shifted up by this amount so a layout whose rows
/// grow downward from the origin lands inside the positive quadrant.
pub const FREE_BOARD_HEIGHT_MM: f64 = 80.0;
