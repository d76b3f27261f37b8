//! Integration tests for column topology synthesis.
//!
//! These tests pin the externally visible wiring contract: how many nets a
//! column gets, which physical keys a column chains, and how the
//! alternating traversal maps onto the final left-to-right numbering.

mod fixtures;

use fixtures::*;

#[test]
fn test_net_count_is_keys_minus_one_per_slot() {
    // Three full columns of three keys each: every slot chains 3 keys
    // with 2 triplets (6 NET statements).
    let kb = keyboard(r#"[["Q","W","E"],["A","S","D"],["Z","X","C"]]"#);
    let schematic = kb.schematic_scr();

    for column in 1..=3 {
        assert_eq!(
            column_net_count(schematic, column),
            2 * 3,
            "column {column} should chain three keys"
        );
    }
}

#[test]
fn test_slots_with_one_key_emit_no_nets() {
    let kb = keyboard(ONE_ROW_OF_THREE);
    let schematic = kb.schematic_scr();
    for column in 1..=3 {
        assert_eq!(column_net_count(schematic, column), 0);
    }
}

#[test]
fn test_jagged_rows_bridge_across_exhausted_rows() {
    // Middle row has 2 keys, outer rows 3. The outer columns chain
    // through all three rows where keys exist; the middle column only
    // pairs the rows that reach it.
    let kb = keyboard(r#"[["Q","W","E"],["A","S"],["Z","X","C"]]"#);
    let schematic = kb.schematic_scr();

    let total: usize = (1..=3).map(|c| column_net_count(schematic, c)).sum();
    // 8 keys chained into 3 slots: slots of 3, 3 and 2 keys give
    // (2 + 2 + 1) triplets = 15 NET statements.
    assert_eq!(total, 15);
}

#[test]
fn test_missing_neighbors_emit_nothing() {
    let kb = keyboard(JAGGED);
    let schematic = kb.schematic_scr();

    // 4 + 2 + 3 keys over 4 slots: the short middle row leaves slot 2
    // with a single key (no nets) while the outer slots chain 3, 2 and
    // 3 keys.
    let counts: Vec<usize> = (1..=4)
        .map(|c| column_net_count(schematic, c) / 3)
        .collect();
    let total: usize = counts.iter().sum();
    assert_eq!(total, 5, "triplets per slot: {counts:?}");
}

#[test]
fn test_column_one_chains_leftmost_keys() {
    let kb = keyboard(TWO_BY_TWO);
    let schematic = kb.schematic_scr();

    let (qx, qy) = kb.get("Q").unwrap().column_pin_scr();
    let start = format!(
        "NET COLUMN1 ({} {}) (",
        kle2eagle::eagle::float_to_str(qx),
        kle2eagle::eagle::float_to_str(qy)
    );
    assert!(
        schematic.contains(&start),
        "column 1 should start at Q's column pin:\n{schematic}"
    );

    let (wx, wy) = kb.get("W").unwrap().column_pin_scr();
    let second = format!(
        "NET COLUMN2 ({} {}) (",
        kle2eagle::eagle::float_to_str(wx),
        kle2eagle::eagle::float_to_str(wy)
    );
    assert!(
        schematic.contains(&second),
        "column 2 should start at W's column pin:\n{schematic}"
    );
}

#[test]
fn test_numbering_ascends_even_for_wide_grids() {
    let kb = keyboard(
        r#"[["1","2","3","4","5","6","7"],["Q","W","E","R","T","Y","U"]]"#,
    );
    let numbers = column_numbers(kb.schematic_scr());
    assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_single_key_keyboard() {
    let kb = keyboard(r#"[["Esc"]]"#);
    assert!(column_numbers(kb.schematic_scr()).is_empty());
    assert!(kb.schematic_scr().contains("ADD KEYSW-MX-1U 'ESC'"));
}

#[test]
fn test_rows_survive_synthesis_untouched() {
    let kb = keyboard(TWO_BY_TWO);
    // The canonical row order feeds iteration; synthesis must not have
    // consumed it.
    assert_eq!(kb.rows()[0], vec!["Q".to_string(), "W".to_string()]);
    assert_eq!(kb.rows()[1], vec!["A".to_string(), "S".to_string()]);
}

#[test]
fn test_each_triplet_touches_both_pins() {
    let kb = keyboard(TWO_BY_TWO);
    let schematic = kb.schematic_scr();
    let (ax, ay) = kb.get("A").unwrap().column_pin_scr();

    // The last statement of column 1's triplet lands exactly on A's pin.
    let landing = format!(
        "({} {});",
        kle2eagle::eagle::float_to_str(ax),
        kle2eagle::eagle::float_to_str(ay)
    );
    let column_one: Vec<&str> = schematic
        .lines()
        .filter(|line| line.starts_with("NET COLUMN1 "))
        .collect();
    assert_eq!(column_one.len(), 3);
    assert!(column_one[2].ends_with(&landing));
}
