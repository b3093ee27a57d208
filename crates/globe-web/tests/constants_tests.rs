// Host-side tests for the web frontend's constants and override parsing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_ids_are_plain_identifiers() {
    for id in [CANVAS_ID, HEADER_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'));
        assert!(!id.contains(char::is_whitespace));
    }
}

#[test]
fn clear_color_is_opaque_and_normalized() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(CLEAR_COLOR[3], 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn device_pixel_ratio_cap_is_sane() {
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
}

#[test]
fn point_count_override_accepts_numbers() {
    assert_eq!(parse_point_count(Some("30000")), Some(30_000));
    assert_eq!(parse_point_count(Some("  500 ")), Some(500));
    assert_eq!(parse_point_count(Some("0")), Some(0));
}

#[test]
fn point_count_override_ignores_junk() {
    assert_eq!(parse_point_count(None), None);
    assert_eq!(parse_point_count(Some("")), None);
    assert_eq!(parse_point_count(Some("lots")), None);
    assert_eq!(parse_point_count(Some("-5")), None);
    assert_eq!(parse_point_count(Some("1e4")), None);
}

#[test]
fn point_count_override_is_capped() {
    assert_eq!(
        parse_point_count(Some(&MAX_POINT_COUNT_OVERRIDE.to_string())),
        Some(MAX_POINT_COUNT_OVERRIDE)
    );
    assert_eq!(
        parse_point_count(Some(&(MAX_POINT_COUNT_OVERRIDE + 1).to_string())),
        None
    );
}
