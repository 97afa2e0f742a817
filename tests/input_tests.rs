// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn space_and_enter_hold_the_switch() {
    assert!(is_press_key(" "));
    assert!(is_press_key("Enter"));
    assert!(is_press_key("Spacebar")); // legacy key name
    assert!(!is_press_key("a"));
    assert!(!is_press_key("Escape"));
}

#[test]
fn key_transitions_map_to_press_intent() {
    assert_eq!(press_intent_for_key(" ", true, false), Some(true));
    assert_eq!(press_intent_for_key(" ", false, false), Some(false));
    assert_eq!(press_intent_for_key("Enter", true, false), Some(true));
    assert_eq!(press_intent_for_key("Enter", false, false), Some(false));
}

#[test]
fn auto_repeat_and_unbound_keys_are_ignored() {
    assert_eq!(press_intent_for_key(" ", true, true), None);
    assert_eq!(press_intent_for_key("x", true, false), None);
    assert_eq!(press_intent_for_key("x", false, false), None);
}

#[test]
fn motion_sample_missing_axes_read_as_zero() {
    assert_eq!(tilt_from_motion(None, None), [0.0, 0.0]);
    assert_eq!(tilt_from_motion(Some(1.5), None), [1.5, 0.0]);
    assert_eq!(tilt_from_motion(None, Some(-9.5)), [0.0, -9.5]);
    assert_eq!(tilt_from_motion(Some(f64::NAN), Some(f64::INFINITY)), [0.0, 0.0]);
}

#[test]
fn only_primary_pointer_button_presses() {
    assert!(is_primary_button(0));
    assert!(!is_primary_button(1));
    assert!(!is_primary_button(2));
}
