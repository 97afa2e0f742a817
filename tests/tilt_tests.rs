// Host-side tests for the accelerometer handoff.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tilt {
    include!("../src/core/tilt.rs");
}

use glam::Vec2;
use std::sync::Arc;
use std::thread;
use tilt::*;

#[test]
fn unset_until_first_reading() {
    let t = TiltInput::new();
    assert!(!t.is_set());
    assert_eq!(t.load(), None);
    assert_eq!(t.load_or_zero(), Vec2::ZERO);
}

#[test]
fn stores_and_loads_the_pair() {
    let t = TiltInput::new();
    t.store(-9.81, 0.25);
    assert_eq!(t.load(), Some(Vec2::new(-9.81, 0.25)));
    t.store(0.0, 0.0);
    assert_eq!(t.load(), Some(Vec2::ZERO));
    t.clear();
    assert_eq!(t.load(), None);
}

#[test]
fn non_finite_components_read_as_zero() {
    let t = TiltInput::new();
    t.store(f32::NAN, f32::INFINITY);
    assert_eq!(t.load(), Some(Vec2::ZERO));
    t.store(2.0, f32::NAN);
    assert_eq!(t.load(), Some(Vec2::new(2.0, 0.0)));
}

#[test]
fn concurrent_reader_never_sees_a_torn_pair() {
    let t = Arc::new(TiltInput::new());
    let writer = {
        let t = Arc::clone(&t);
        thread::spawn(move || {
            for i in 0..20_000 {
                let x = i as f32;
                t.store(x, -x);
            }
        })
    };
    for _ in 0..20_000 {
        if let Some(v) = t.load() {
            assert_eq!(v.y, -v.x, "torn read: {:?}", v);
        }
    }
    writer.join().expect("writer thread panicked");
}
