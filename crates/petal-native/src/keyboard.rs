// Arrow keys stand in for the accelerometer on desktop.
//
// Held arrows produce a device-frame gravity reading just as a tilted phone
// would; digit keys 1-4 rotate the virtual screen so the normalization path
// is exercised too.

use petal_core::{MotionSample, STANDARD_GRAVITY};

/// Fraction of full tilt a held arrow key represents.
pub const KEY_TILT: f32 = 0.8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TiltKey {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct KeyboardTilt {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    screen_angle: f32,
}

impl KeyboardTilt {
    pub fn set_key(&mut self, key: TiltKey, pressed: bool) {
        match key {
            TiltKey::Left => self.left = pressed,
            TiltKey::Right => self.right = pressed,
            TiltKey::Up => self.up = pressed,
            TiltKey::Down => self.down = pressed,
        }
    }

    /// Digit keys 1-4 select 0/90/180/270 degrees.
    pub fn set_rotation_from_digit(&mut self, digit: &str) -> bool {
        let angle = match digit {
            "1" => 0.0,
            "2" => 90.0,
            "3" => 180.0,
            "4" => 270.0,
            _ => return false,
        };
        self.screen_angle = angle;
        true
    }

    pub fn screen_angle(&self) -> f32 {
        self.screen_angle
    }

    /// The reading a phone held this way would report.
    pub fn sample(&self) -> MotionSample {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32 * KEY_TILT * STANDARD_GRAVITY;
        MotionSample::with_gravity(axis(self.left, self.right), axis(self.down, self.up), 0.0)
    }
}
