use crate::constants::{PETAL_COUNT, TILT_SMOOTHING_GAIN};
use crate::error::SensorError;
use crate::field::{ParticleField, SpawnRanges};
use crate::render::RenderAdapter;
use crate::step::{step_with, StepParams, StepReport};
use crate::tilt::{MotionSample, PlatformProfile, TiltTracker};
use crate::viewport::{Viewport, ViewportSource};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub petal_count: usize,
    pub smoothing_gain: f32,
    pub step: StepParams,
    pub spawn: SpawnRanges,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            petal_count: PETAL_COUNT,
            smoothing_gain: TILT_SMOOTHING_GAIN,
            step: StepParams::default(),
            spawn: SpawnRanges::default(),
        }
    }
}

/// Owns the petals and the tilt estimate that steers them.
pub struct Scene<R: Rng = StdRng> {
    field: ParticleField<R>,
    tracker: TiltTracker,
    params: SceneParams,
    viewport: Viewport,
}

impl Scene<StdRng> {
    pub fn seeded(params: SceneParams, profile: PlatformProfile, viewport: Viewport, seed: u64) -> Self {
        Self::new(params, profile, viewport, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Scene<R> {
    pub fn new(params: SceneParams, profile: PlatformProfile, viewport: Viewport, rng: R) -> Self {
        let field = ParticleField::initialize(params.petal_count, viewport, params.spawn.clone(), rng);
        let tracker = TiltTracker::with_gain(profile, params.smoothing_gain);
        Self {
            field,
            tracker,
            params,
            viewport,
        }
    }

    pub fn ingest(&mut self, sample: &MotionSample, screen_angle: f32) -> Result<Vec2, SensorError> {
        self.tracker.ingest(sample, screen_angle)
    }

    pub fn advance(&mut self, dt: f32, viewport: Viewport) -> StepReport {
        if viewport != self.viewport {
            log::debug!(
                "[scene] viewport {:.0}x{:.0} -> {:.0}x{:.0}",
                self.viewport.width(),
                self.viewport.height(),
                viewport.width(),
                viewport.height()
            );
            self.viewport = viewport;
        }
        step_with(&mut self.field, self.tracker.tilt(), dt, viewport, &self.params.step)
    }

    /// One full frame: simulate, then hand every petal to the renderer.
    pub fn frame<V, A>(&mut self, dt: f32, viewport: &V, adapter: &mut A) -> Result<StepReport, A::Error>
    where
        V: ViewportSource + ?Sized,
        A: RenderAdapter + ?Sized,
    {
        let viewport = viewport.viewport();
        let report = self.advance(dt, viewport);
        adapter.begin_frame(viewport);
        for pose in self.field.poses() {
            adapter.draw_petal(pose);
        }
        adapter.end_frame()?;
        Ok(report)
    }

    #[inline]
    pub fn tilt(&self) -> Vec2 {
        self.tracker.tilt()
    }

    pub fn field(&self) -> &ParticleField<R> {
        &self.field
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
