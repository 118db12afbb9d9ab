// Host-side tests for the keyboard tilt source.
// The native front-end is a binary, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keyboard {
    include!("../src/keyboard.rs");
}

use glam::Vec2;
use keyboard::*;
use petal_core::{PlatformProfile, TiltTracker};

fn gravity(sample: &petal_core::MotionSample) -> Vec2 {
    let a = sample.acceleration_including_gravity.expect("gravity payload");
    Vec2::new(a.x.unwrap_or(0.0), a.y.unwrap_or(0.0))
}

#[test]
fn idle_keyboard_is_level() {
    let kb = KeyboardTilt::default();
    assert_eq!(gravity(&kb.sample()), Vec2::ZERO);
    assert_eq!(kb.screen_angle(), 0.0);
}

#[test]
fn arrows_map_to_device_axes() {
    let mut kb = KeyboardTilt::default();
    kb.set_key(TiltKey::Right, true);
    kb.set_key(TiltKey::Up, true);
    let g = gravity(&kb.sample());
    assert!(g.x > 0.0 && g.y > 0.0);

    kb.set_key(TiltKey::Right, false);
    kb.set_key(TiltKey::Left, true);
    assert!(gravity(&kb.sample()).x < 0.0);
}

#[test]
fn opposite_arrows_cancel() {
    let mut kb = KeyboardTilt::default();
    kb.set_key(TiltKey::Left, true);
    kb.set_key(TiltKey::Right, true);
    kb.set_key(TiltKey::Up, true);
    kb.set_key(TiltKey::Down, true);
    assert_eq!(gravity(&kb.sample()), Vec2::ZERO);
}

#[test]
fn digits_select_rotation() {
    let mut kb = KeyboardTilt::default();
    assert!(kb.set_rotation_from_digit("2"));
    assert_eq!(kb.screen_angle(), 90.0);
    assert!(kb.set_rotation_from_digit("4"));
    assert_eq!(kb.screen_angle(), 270.0);
    assert!(!kb.set_rotation_from_digit("9"));
    assert_eq!(kb.screen_angle(), 270.0);
}

#[test]
fn held_arrow_drives_tracker_toward_key_tilt() {
    let mut kb = KeyboardTilt::default();
    kb.set_key(TiltKey::Right, true);
    let mut tracker = TiltTracker::new(PlatformProfile::Default);
    for _ in 0..200 {
        tracker.ingest(&kb.sample(), kb.screen_angle()).expect("valid sample");
    }
    assert!((tracker.tilt().x - KEY_TILT).abs() < 1e-4);
    assert!(tracker.tilt().y.abs() < 1e-6);
}
