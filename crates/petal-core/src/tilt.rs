use crate::constants::{STANDARD_GRAVITY, TILT_SMOOTHING_GAIN};
use crate::error::SensorError;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScreenRotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl ScreenRotation {
    // Wrapped into [0, 360) first; anything off a quarter turn (NaN too) is Deg0.
    pub fn from_degrees(angle: f32) -> Self {
        match angle.rem_euclid(360.0) {
            a if a == 90.0 => Self::Deg90,
            a if a == 180.0 => Self::Deg180,
            a if a == 270.0 => Self::Deg270,
            _ => Self::Deg0,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    #[inline]
    pub fn apply(self, ax: f32, ay: f32) -> Vec2 {
        match self {
            Self::Deg0 => Vec2::new(ax, ay),
            Self::Deg90 => Vec2::new(ay, -ax),
            Self::Deg180 => Vec2::new(-ax, -ay),
            Self::Deg270 => Vec2::new(-ay, ax),
        }
    }
}

#[inline]
pub fn normalize(ax: f32, ay: f32, screen_angle: f32) -> Vec2 {
    ScreenRotation::from_degrees(screen_angle).apply(ax, ay)
}

#[inline]
pub fn to_unit_tilt(screen: Vec2) -> Vec2 {
    (screen / STANDARD_GRAVITY).clamp(Vec2::NEG_ONE, Vec2::ONE)
}

#[inline]
pub fn smooth(prev: f32, target: f32, k: f32) -> f32 {
    prev + (target - prev) * k
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlatformProfile {
    #[default]
    Default,
    /// Reports x with the opposite sign (Android-class browsers).
    InvertedXAxis,
}

impl PlatformProfile {
    #[inline]
    pub fn x_sign(self) -> f32 {
        match self {
            Self::Default => 1.0,
            Self::InvertedXAxis => -1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Acceleration {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSample {
    pub acceleration_including_gravity: Option<Acceleration>,
}

impl MotionSample {
    pub fn with_gravity(x: f32, y: f32, z: f32) -> Self {
        Self {
            acceleration_including_gravity: Some(Acceleration {
                x: Some(x),
                y: Some(y),
                z: Some(z),
            }),
        }
    }
}

/// Smoothed tilt shared between the sensor callback and the frame loop.
#[derive(Clone, Debug)]
pub struct TiltTracker {
    tilt: Vec2,
    profile: PlatformProfile,
    gain: f32,
    samples_accepted: u64,
}

impl TiltTracker {
    pub fn new(profile: PlatformProfile) -> Self {
        Self::with_gain(profile, TILT_SMOOTHING_GAIN)
    }

    pub fn with_gain(profile: PlatformProfile, gain: f32) -> Self {
        Self {
            tilt: Vec2::ZERO,
            profile,
            gain,
            samples_accepted: 0,
        }
    }

    /// `screen_angle` is read fresh by the caller for every sample. Samples
    /// without a gravity payload leave the estimate untouched.
    pub fn ingest(&mut self, sample: &MotionSample, screen_angle: f32) -> Result<Vec2, SensorError> {
        let a = sample
            .acceleration_including_gravity
            .ok_or(SensorError::MalformedSample)?;
        let rotation = ScreenRotation::from_degrees(screen_angle);
        let unit = to_unit_tilt(rotation.apply(a.x.unwrap_or(0.0), a.y.unwrap_or(0.0)));

        self.tilt.x = smooth(self.tilt.x, unit.x * self.profile.x_sign(), self.gain);
        self.tilt.y = smooth(self.tilt.y, unit.y, self.gain);
        self.samples_accepted += 1;
        log::trace!(
            "[tilt] angle={} raw=({:.2},{:.2}) tilt=({:.3},{:.3})",
            rotation.degrees(),
            unit.x,
            unit.y,
            self.tilt.x,
            self.tilt.y
        );
        Ok(self.tilt)
    }

    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.tilt
    }

    pub fn samples_accepted(&self) -> u64 {
        self.samples_accepted
    }
}

impl Default for TiltTracker {
    fn default() -> Self {
        Self::new(PlatformProfile::Default)
    }
}
