//! The petal pool.
//!
//! A field owns a fixed number of particles for its whole life. Petals that
//! leave the screen are re-randomized in place, never dropped or reallocated.

use crate::constants::*;
use crate::render::ParticlePose;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub fall_speed: f32,
    pub drift_speed: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
    pub wobble_phase: f32,
    pub wobble_amplitude: f32,
    pub wobble_speed: f32,
    pub alpha: f32,
}

impl Particle {
    #[inline]
    pub fn pose(&self) -> ParticlePose {
        ParticlePose {
            x: self.position.x,
            y: self.position.y,
            size: self.size,
            rotation: self.rotation,
            alpha: self.alpha,
        }
    }
}

/// Where a (re)spawned petal is placed vertically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpawnOrigin {
    Top,
    // first frame only
    Scattered,
}

/// Uniform ranges every randomized petal attribute is drawn from. Each
/// range is half-open `[lo, hi)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnRanges {
    pub top_band_frac: f32,
    pub size: (f32, f32),
    pub fall_speed: (f32, f32),
    pub drift_speed: (f32, f32),
    pub rotation: (f32, f32),
    pub rotation_speed: (f32, f32),
    pub wobble_phase: (f32, f32),
    pub wobble_amplitude: (f32, f32),
    pub wobble_speed: (f32, f32),
    pub alpha: (f32, f32),
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            top_band_frac: TOP_SPAWN_BAND_FRAC,
            size: SIZE_RANGE,
            fall_speed: FALL_SPEED_RANGE,
            drift_speed: DRIFT_SPEED_RANGE,
            rotation: ROTATION_RANGE,
            rotation_speed: ROTATION_SPEED_RANGE,
            wobble_phase: WOBBLE_PHASE_RANGE,
            wobble_amplitude: WOBBLE_AMPLITUDE_RANGE,
            wobble_speed: WOBBLE_SPEED_RANGE,
            alpha: ALPHA_RANGE,
        }
    }
}

/// Uniform draw from `[lo, hi)`; a degenerate range yields `lo`.
#[inline]
pub fn rand_between<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}

pub fn respawn<R: Rng + ?Sized>(
    p: &mut Particle,
    origin: SpawnOrigin,
    viewport: Viewport,
    ranges: &SpawnRanges,
    rng: &mut R,
) {
    let (w, h) = (viewport.width(), viewport.height());
    let x = rand_between(rng, 0.0, w);
    let y = match origin {
        SpawnOrigin::Top => rand_between(rng, -h * ranges.top_band_frac, 0.0),
        SpawnOrigin::Scattered => rand_between(rng, 0.0, h),
    };
    p.position = Vec2::new(x, y);
    p.size = rand_between(rng, ranges.size.0, ranges.size.1);
    p.fall_speed = rand_between(rng, ranges.fall_speed.0, ranges.fall_speed.1);
    p.drift_speed = rand_between(rng, ranges.drift_speed.0, ranges.drift_speed.1);
    p.rotation = rand_between(rng, ranges.rotation.0, ranges.rotation.1);
    p.rotation_speed = rand_between(rng, ranges.rotation_speed.0, ranges.rotation_speed.1);
    p.wobble_phase = rand_between(rng, ranges.wobble_phase.0, ranges.wobble_phase.1);
    p.wobble_amplitude = rand_between(rng, ranges.wobble_amplitude.0, ranges.wobble_amplitude.1);
    p.wobble_speed = rand_between(rng, ranges.wobble_speed.0, ranges.wobble_speed.1);
    p.alpha = rand_between(rng, ranges.alpha.0, ranges.alpha.1);
}

pub struct ParticleField<R: Rng = StdRng> {
    particles: Vec<Particle>,
    ranges: SpawnRanges,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn seeded(count: usize, viewport: Viewport, seed: u64) -> Self {
        Self::initialize(count, viewport, SpawnRanges::default(), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn initialize(count: usize, viewport: Viewport, ranges: SpawnRanges, mut rng: R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let mut p = Particle::default();
                respawn(&mut p, SpawnOrigin::Scattered, viewport, &ranges, &mut rng);
                p
            })
            .collect::<Vec<_>>();
        log::info!(
            "[field] petals={} viewport={:.0}x{:.0}",
            particles.len(),
            viewport.width(),
            viewport.height()
        );
        Self {
            particles,
            ranges,
            rng,
        }
    }

    /// Re-randomize the petal at `index`. Out-of-range indices are ignored.
    pub fn respawn(&mut self, index: usize, origin: SpawnOrigin, viewport: Viewport) {
        if let Some(p) = self.particles.get_mut(index) {
            respawn(p, origin, viewport, &self.ranges, &mut self.rng);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn ranges(&self) -> &SpawnRanges {
        &self.ranges
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut [Particle], &SpawnRanges, &mut R) {
        (&mut self.particles, &self.ranges, &mut self.rng)
    }

    pub fn poses(&self) -> impl Iterator<Item = ParticlePose> + '_ {
        self.particles.iter().map(Particle::pose)
    }
}
