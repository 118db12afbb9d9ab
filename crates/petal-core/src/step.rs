use crate::constants::*;
use crate::field::{rand_between, respawn, Particle, ParticleField, SpawnOrigin, SpawnRanges};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// Horizontal spawn bias toward the windward edge while the wind is strong.
#[derive(Clone, Debug, PartialEq)]
pub struct WindwardReseed {
    pub threshold: f32,
    pub left_min: f32,
    pub left_max_frac: f32,
    pub right_min_frac: f32,
    pub right_overhang: f32,
}

impl Default for WindwardReseed {
    fn default() -> Self {
        Self {
            threshold: WINDWARD_THRESHOLD,
            left_min: WINDWARD_LEFT_MIN,
            left_max_frac: WINDWARD_LEFT_MAX_FRAC,
            right_min_frac: WINDWARD_RIGHT_MIN_FRAC,
            right_overhang: WINDWARD_RIGHT_OVERHANG,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StepParams {
    pub max_dt: f32,
    pub wind_scale: f32,
    pub gravity_boost_scale: f32,
    pub exit_margin_bottom: f32,
    pub exit_margin_side: f32,
    pub windward: WindwardReseed,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            max_dt: MAX_FRAME_DT_SEC,
            wind_scale: WIND_PX_PER_SEC,
            gravity_boost_scale: GRAVITY_BOOST_PX_PER_SEC,
            exit_margin_bottom: EXIT_MARGIN_BOTTOM,
            exit_margin_side: EXIT_MARGIN_SIDE,
            windward: WindwardReseed::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Forces {
    pub wind: f32,          // px/sec
    pub gravity_boost: f32, // px/sec
}

impl Forces {
    #[inline]
    pub fn from_tilt(tilt: Vec2, params: &StepParams) -> Self {
        Self {
            wind: tilt.x * params.wind_scale,
            gravity_boost: tilt.y * params.gravity_boost_scale,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub respawned: usize,
}

// Non-finite input counts as no time passing.
#[inline]
pub fn clamp_dt(dt: f32, max_dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, max_dt)
    } else {
        0.0
    }
}

#[inline]
pub fn advance(p: &mut Particle, forces: Forces, dt: f32) {
    p.wobble_phase += p.wobble_speed * dt;
    let wobble = p.wobble_phase.sin() * p.wobble_amplitude;
    let vx = p.drift_speed + forces.wind;
    let vy = p.fall_speed + forces.gravity_boost;
    p.position.x += vx * dt + wobble * dt;
    p.position.y += vy * dt;
    p.rotation += p.rotation_speed * dt;
}

#[inline]
pub fn has_exited(p: &Particle, viewport: Viewport, params: &StepParams) -> bool {
    p.position.y > viewport.height() + params.exit_margin_bottom
        || p.position.x < -params.exit_margin_side
        || p.position.x > viewport.width() + params.exit_margin_side
}

/// Respawn an exited petal at the top, then pull its x toward the windward
/// edge when the wind is strong.
pub fn respawn_exited<R: Rng + ?Sized>(
    p: &mut Particle,
    wind: f32,
    viewport: Viewport,
    ranges: &SpawnRanges,
    windward: &WindwardReseed,
    rng: &mut R,
) {
    respawn(p, SpawnOrigin::Top, viewport, ranges, rng);
    let w = viewport.width();
    if wind > windward.threshold {
        p.position.x = rand_between(rng, windward.left_min, w * windward.left_max_frac);
    }
    if wind < -windward.threshold {
        p.position.x = rand_between(rng, w * windward.right_min_frac, w + windward.right_overhang);
    }
}

pub fn step<R: Rng>(field: &mut ParticleField<R>, tilt: Vec2, dt: f32, viewport: Viewport) -> StepReport {
    step_with(field, tilt, dt, viewport, &StepParams::default())
}

pub fn step_with<R: Rng>(
    field: &mut ParticleField<R>,
    tilt: Vec2,
    dt: f32,
    viewport: Viewport,
    params: &StepParams,
) -> StepReport {
    let dt = clamp_dt(dt, params.max_dt);
    let forces = Forces::from_tilt(tilt, params);
    let (particles, ranges, rng) = field.parts_mut();
    let mut report = StepReport::default();
    for p in particles.iter_mut() {
        advance(p, forces, dt);
        if has_exited(p, viewport, params) {
            respawn_exited(p, forces.wind, viewport, ranges, &params.windward, rng);
            report.respawned += 1;
        }
    }
    report
}
