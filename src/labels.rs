//! Key-cap label translation.
//!
//! Maps the raw label text on a key cap to the canonical electrical name
//! used for the schematic part, substituting legend symbols (arrows, shifted
//! punctuation) and resolving collisions between identically labeled keys.

/// Legend symbol to electrical name substitutions.
///
/// Keys are matched against the uppercased first line of the label. Shifted
/// legends map to the name of their unshifted key; keypad-only legends map
/// to keypad names.
const KEY_TRANSLATION: &[(&str, &str)] = &[
    ("", "SPACE"),
    ("\u{2190}", "LEFT"),
    ("\u{2191}", "UP"),
    ("\u{2192}", "RIGHT"),
    ("\u{2193}", "DOWN"),
    ("~", "GRAVE"),
    ("\u{ac}", "GRAVE"),
    ("!", "1"),
    ("@", "2"),
    ("#", "3"),
    ("\u{a3}", "3"),
    ("$", "4"),
    ("%", "5"),
    ("^", "6"),
    ("&", "7"),
    ("*", "8"),
    ("(", "9"),
    (")", "0"),
    ("_", "DASH"),
    ("+", "EQUAL"),
    ("{", "LBRACKET"),
    ("}", "RBRACKET"),
    ("|", "BACKSLASH"),
    (":", "SEMICOLON"),
    ("\"", "QUOTE"),
    ("<", "COMMA"),
    (">", "PERIOD"),
    ("?", "SLASH"),
    ("/", "KP_SLASH"),
    ("-", "KP_DASH"),
    (".", "KP_DEL"),
];

/// Result of translating one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The unique electrical name to use for this key.
    pub name: String,
    /// The canonical name this key would have used before collision
    /// renaming, if a rename was required.
    pub renamed_from: Option<String>,
}

/// Translates a raw key-cap label into a unique electrical name.
///
/// Only the first line of the label is considered; secondary legends below
/// it are ignored. The literal label `*` always becomes the keypad asterisk
/// regardless of the substitution table.
///
/// `taken` reports whether a candidate name is already in use on the
/// keyboard. When the canonical name collides, purely numeric names gain the
/// `KP_` prefix (and that prefixed name becomes the base for further
/// probing); all other names probe integer suffixes starting at 2.
pub fn translate_label(label: &str, taken: impl Fn(&str) -> bool) -> Translation {
    let first_line = label.split('\n').next().unwrap_or("");
    let mut key_name = first_line.to_uppercase();

    if label == "*" {
        key_name = "KP_ASTERISK".to_string();
    }

    if let Some((_, mapped)) = KEY_TRANSLATION.iter().find(|(raw, _)| *raw == key_name) {
        key_name = (*mapped).to_string();
    }

    if !taken(&key_name) {
        return Translation {
            name: key_name,
            renamed_from: None,
        };
    }

    let renamed_from = key_name.clone();

    // Numeric labels become keypad keys instead of getting a numeric suffix
    // (a second "5" must read KP_5, never 52).
    if !key_name.is_empty() && key_name.chars().all(|c| c.is_ascii_digit()) {
        key_name = format!("KP_{key_name}");
        if !taken(&key_name) {
            return Translation {
                name: key_name,
                renamed_from: Some(renamed_from),
            };
        }
    }

    let mut suffix = 2u32;
    let mut candidate = format!("{key_name}{suffix}");
    while taken(&candidate) {
        suffix += 1;
        candidate = format!("{key_name}{suffix}");
    }

    Translation {
        name: candidate,
        renamed_from: Some(renamed_from),
    }
}
