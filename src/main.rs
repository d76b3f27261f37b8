//! kle2eagle - EAGLE script generator for keyboard layouts
//!
//! This binary reads a layout exported from keyboard-layout-editor.com and
//! writes a pair of EAGLE scripts: one building the schematic, one placing
//! the footprints on the board.

use anyhow::{Context, Result};
use clap::Parser;
use kle2eagle::config::{Config, DiodeType, EagleVersion, LedMode};
use kle2eagle::constants::APP_BINARY_NAME;
use kle2eagle::models::Keyboard;
use std::fs;
use std::path::PathBuf;

/// Convert keyboard-layout-editor.com layouts into EAGLE scripts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the raw data file downloaded from keyboard-layout-editor.com
    #[arg(value_name = "LAYOUT")]
    layout_path: PathBuf,

    /// Base path for the generated scripts (defaults to the layout path
    /// without its extension)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Target EAGLE dialect
    #[arg(long, value_enum, value_name = "VERSION")]
    eagle_version: Option<EagleVersion>,

    /// Switch library base name
    #[arg(long, value_name = "NAME")]
    footprint: Option<String>,

    /// Diode mounting style
    #[arg(long, value_enum, value_name = "TYPE")]
    diode: Option<DiodeType>,

    /// Per-key LED population
    #[arg(long, value_enum, value_name = "MODE")]
    led: Option<LedMode>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.layout_path.exists() {
        eprintln!("Error: Layout file not found: {}", cli.layout_path.display());
        eprintln!();
        eprintln!("Please provide the raw data file downloaded from");
        eprintln!("keyboard-layout-editor.com, for example:");
        eprintln!("  {} my-keyboard.json", APP_BINARY_NAME);
        std::process::exit(1);
    }

    // Config file supplies the defaults; flags override per run.
    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            Config::default()
        }
    };

    if let Some(eagle_version) = cli.eagle_version {
        config.eagle_version = eagle_version;
    }
    if let Some(footprint) = cli.footprint {
        config.switch_footprint = footprint;
    }
    if let Some(diode) = cli.diode {
        config.diode = diode;
    }
    if let Some(led) = cli.led {
        config.led_mode = led;
    }

    let raw = fs::read_to_string(&cli.layout_path).with_context(|| {
        format!("Failed to read layout file: {}", cli.layout_path.display())
    })?;

    let keyboard = Keyboard::new(&raw, &config).with_context(|| {
        format!("Failed to parse layout file: {}", cli.layout_path.display())
    })?;

    for warning in keyboard.warnings() {
        eprintln!("Warning: {warning}");
    }

    let base = cli
        .output
        .unwrap_or_else(|| cli.layout_path.with_extension(""));
    let schematic_path = PathBuf::from(format!("{}.sch.scr", base.display()));
    let board_path = PathBuf::from(format!("{}.brd.scr", base.display()));

    let (schematic, board) = keyboard.generate();

    fs::write(&schematic_path, schematic).with_context(|| {
        format!("Failed to write schematic script: {}", schematic_path.display())
    })?;
    fs::write(&board_path, board).with_context(|| {
        format!("Failed to write board script: {}", board_path.display())
    })?;

    println!(
        "Parsed {} keys in {} rows",
        keyboard.key_count(),
        keyboard.rows().len()
    );
    println!("Wrote {}", schematic_path.display());
    println!("Wrote {}", board_path.display());

    Ok(())
}
