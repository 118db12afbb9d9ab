// Host-side tests for screen-frame normalization and tilt smoothing.

use glam::Vec2;
use petal_core::*;

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).abs().max_element() < 1e-6
}

#[test]
fn normalize_quarter_turns() {
    assert_eq!(normalize(3.0, 4.0, 0.0), Vec2::new(3.0, 4.0));
    assert_eq!(normalize(3.0, 4.0, 90.0), Vec2::new(4.0, -3.0));
    assert_eq!(normalize(3.0, 4.0, 180.0), Vec2::new(-3.0, -4.0));
    assert_eq!(normalize(3.0, 4.0, 270.0), Vec2::new(-4.0, 3.0));
}

#[test]
fn normalize_unknown_angle_is_identity() {
    assert_eq!(normalize(3.0, 4.0, 45.0), Vec2::new(3.0, 4.0));
    assert_eq!(normalize(3.0, 4.0, 89.5), Vec2::new(3.0, 4.0));
    assert_eq!(normalize(3.0, 4.0, f32::NAN), Vec2::new(3.0, 4.0));
    assert_eq!(normalize(3.0, 4.0, f32::INFINITY), Vec2::new(3.0, 4.0));
}

#[test]
fn normalize_wraps_out_of_range_angles() {
    // -90 is the legacy landscape-right reading; same as 270
    assert_eq!(normalize(3.0, 4.0, -90.0), normalize(3.0, 4.0, 270.0));
    assert_eq!(normalize(3.0, 4.0, 450.0), normalize(3.0, 4.0, 90.0));
    assert_eq!(normalize(3.0, 4.0, -180.0), normalize(3.0, 4.0, 180.0));
    assert_eq!(normalize(3.0, 4.0, 720.0), normalize(3.0, 4.0, 0.0));
}

#[test]
fn screen_rotation_reports_degrees() {
    assert_eq!(ScreenRotation::from_degrees(-90.0).degrees(), 270);
    assert_eq!(ScreenRotation::from_degrees(45.0).degrees(), 0);
    assert_eq!(ScreenRotation::default(), ScreenRotation::Deg0);
}

#[test]
fn unit_tilt_scales_by_gravity_and_clamps() {
    assert!(approx(to_unit_tilt(Vec2::new(4.9, -4.9)), Vec2::new(0.5, -0.5)));
    assert_eq!(to_unit_tilt(Vec2::new(19.6, -30.0)), Vec2::new(1.0, -1.0));
    assert_eq!(to_unit_tilt(Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn smooth_lies_strictly_between_prev_and_target() {
    let cases = [(0.0, 1.0), (1.0, -1.0), (-0.3, 0.25), (0.9, 0.8)];
    for (prev, target) in cases {
        for k in [0.01_f32, 0.12, 0.5, 0.99] {
            let next = smooth(prev, target, k);
            let (lo, hi) = if prev < target { (prev, target) } else { (target, prev) };
            assert!(next > lo && next < hi, "smooth({prev}, {target}, {k}) = {next}");
        }
    }
}

#[test]
fn smooth_is_fixed_point_at_target() {
    for v in [-1.0_f32, 0.0, 0.42, 1.0] {
        assert_eq!(smooth(v, v, TILT_SMOOTHING_GAIN), v);
    }
}

#[test]
fn platform_profile_sign() {
    assert_eq!(PlatformProfile::Default.x_sign(), 1.0);
    assert_eq!(PlatformProfile::InvertedXAxis.x_sign(), -1.0);
}

#[test]
fn tracker_starts_at_rest() {
    let tracker = TiltTracker::default();
    assert_eq!(tracker.tilt(), Vec2::ZERO);
    assert_eq!(tracker.samples_accepted(), 0);
}

#[test]
fn tracker_applies_one_gain_step() {
    let mut tracker = TiltTracker::new(PlatformProfile::Default);
    let tilt = tracker
        .ingest(&MotionSample::with_gravity(9.8, -4.9, 0.0), 0.0)
        .expect("valid sample");
    assert!(approx(tilt, Vec2::new(0.12, -0.06)));
    assert_eq!(tracker.samples_accepted(), 1);
}

#[test]
fn tracker_inverts_x_for_inverted_profile() {
    let mut tracker = TiltTracker::new(PlatformProfile::InvertedXAxis);
    let tilt = tracker
        .ingest(&MotionSample::with_gravity(9.8, 9.8, 0.0), 0.0)
        .expect("valid sample");
    assert!(approx(tilt, Vec2::new(-0.12, 0.12)));
}

#[test]
fn tracker_rotates_before_smoothing() {
    let mut tracker = TiltTracker::new(PlatformProfile::Default);
    // device x acceleration shows up as screen -y in a 90 degree rotation
    let tilt = tracker
        .ingest(&MotionSample::with_gravity(9.8, 0.0, 0.0), 90.0)
        .expect("valid sample");
    assert!(approx(tilt, Vec2::new(0.0, -0.12)));
}

#[test]
fn tracker_maps_each_sample_with_its_own_angle() {
    let mut tracker = TiltTracker::with_gain(PlatformProfile::Default, 1.0);
    tracker
        .ingest(&MotionSample::with_gravity(9.8, 0.0, 0.0), 270.0)
        .expect("valid sample");
    assert!(approx(tracker.tilt(), Vec2::new(0.0, 1.0)));

    // a rejected sample must not leave any orientation behind for the next one
    assert!(tracker.ingest(&MotionSample::default(), 0.0).is_err());
    let tilt = tracker
        .ingest(&MotionSample::with_gravity(9.8, 0.0, 0.0), 0.0)
        .expect("valid sample");
    assert!(approx(tilt, Vec2::new(1.0, 0.0)));
}

#[test]
fn tracker_ignores_samples_without_gravity() {
    let mut tracker = TiltTracker::new(PlatformProfile::Default);
    tracker
        .ingest(&MotionSample::with_gravity(9.8, 0.0, 0.0), 0.0)
        .expect("valid sample");
    let before = tracker.tilt();

    let err = tracker.ingest(&MotionSample::default(), 0.0).unwrap_err();
    assert_eq!(err, SensorError::MalformedSample);
    assert_eq!(tracker.tilt(), before);
    assert_eq!(tracker.samples_accepted(), 1);
}

#[test]
fn tracker_treats_missing_axes_as_zero() {
    let mut tracker = TiltTracker::new(PlatformProfile::Default);
    let sample = MotionSample {
        acceleration_including_gravity: Some(Acceleration {
            x: None,
            y: Some(9.8),
            z: None,
        }),
    };
    let tilt = tracker.ingest(&sample, 0.0).expect("valid sample");
    assert!(approx(tilt, Vec2::new(0.0, 0.12)));
}

#[test]
fn tracker_converges_without_overshoot() {
    let mut tracker = TiltTracker::new(PlatformProfile::Default);
    let sample = MotionSample::with_gravity(4.9, -2.45, 9.0);
    let target = Vec2::new(0.5, -0.25);
    let mut prev = tracker.tilt();
    for _ in 0..300 {
        let tilt = tracker.ingest(&sample, 0.0).expect("valid sample");
        assert!(tilt.x >= prev.x && tilt.x <= target.x + 1e-6);
        assert!(tilt.y <= prev.y && tilt.y >= target.y - 1e-6);
        prev = tilt;
    }
    assert!(approx(prev, target));
}
