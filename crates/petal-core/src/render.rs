//! Drawing seam between the simulation and a concrete renderer.

use crate::viewport::Viewport;

/// Everything a renderer needs to draw one petal.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticlePose {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub rotation: f32,
    pub alpha: f32,
}

/// Implemented by each front-end. A frame is always
/// `begin_frame`, then `draw_petal` once per petal in field order, then
/// `end_frame`.
pub trait RenderAdapter {
    type Error;

    /// Clear and fill the background for a frame of the given size.
    fn begin_frame(&mut self, viewport: Viewport);
    fn draw_petal(&mut self, pose: ParticlePose);
    fn end_frame(&mut self) -> Result<(), Self::Error>;
}

/// Per-instance vertex data for GPU renderers. Layout matches
/// `PETAL_WGSL`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PetalInstance {
    pub pos: [f32; 2],
    pub size: f32,
    pub rotation: f32,
    pub alpha: f32,
    pub _pad: [f32; 3],
}

impl From<ParticlePose> for PetalInstance {
    fn from(p: ParticlePose) -> Self {
        Self {
            pos: [p.x, p.y],
            size: p.size,
            rotation: p.rotation,
            alpha: p.alpha,
            _pad: [0.0; 3],
        }
    }
}
