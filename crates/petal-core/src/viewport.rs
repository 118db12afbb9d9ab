/// Visible area in CSS pixels. Both sides are kept at least one pixel so
/// spawn ranges are never empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Canvas backing-store size for a device pixel ratio. Ratios below 1 are
    /// treated as 1.
    pub fn backing_size(&self, device_pixel_ratio: f64) -> (u32, u32) {
        let dpr = if device_pixel_ratio.is_finite() {
            device_pixel_ratio.max(1.0)
        } else {
            1.0
        };
        let w = (self.width as f64 * dpr).floor() as u32;
        let h = (self.height as f64 * dpr).floor() as u32;
        (w.max(1), h.max(1))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

fn sanitize(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

/// Anything that can report the current viewport. Queried once per frame so
/// resizes take effect immediately.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}
