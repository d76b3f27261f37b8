//! Switch footprint selection.
//!
//! Maps a key's physical width to the footprint variant of the configured
//! switch library, with suffixing for illuminated variants.

/// Substring marking a single-color LED switch library.
const LED_MARKER: &str = "-LED-";

/// Substring marking an RGB LED switch library.
const RGB_MARKER: &str = "-RGBLED-";

/// Returns the footprint identifier for a key of the given width.
///
/// Widths are bucketed by exact match: 2, 2.25, 2.75 and 4 unit keys share
/// the stabilized 2U footprint; 6.25, 6.5 and 7 unit spacebars get their own;
/// everything else falls back to the plain 1U footprint. Library names
/// carrying an LED or RGB marker get the matching pad-variant suffix.
pub fn footprint_for_width(base: &str, width: f64) -> String {
    let suffix = match (width * 100.0).round() as u64 {
        200 | 225 | 275 | 400 => "-2U",
        625 => "-6.25U",
        650 => "-6.5U",
        700 => "-7U",
        _ => "-1U",
    };

    let mut footprint = format!("{base}{suffix}");

    if footprint.contains(LED_MARKER) {
        footprint.push_str("-LED");
    } else if footprint.contains(RGB_MARKER) {
        footprint.push_str("-RGB");
    }

    footprint
}
