use crate::constants::*;
use petal_core::{ParticlePose, RenderAdapter, Viewport, PETAL_GRADIENT_CENTER, PETAL_GRADIENT_RADIUS, PETAL_RIB_EXTENT};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Canvas 2D petal renderer. Coordinates are CSS pixels; the context
/// transform set on resize takes care of devicePixelRatio.
pub struct CanvasRenderer {
    ctx: web::CanvasRenderingContext2d,
    errors: usize,
}

impl CanvasRenderer {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx, errors: 0 }
    }

    fn petal(&self, pose: ParticlePose) -> Result<(), JsValue> {
        let ctx = &self.ctx;
        let s = pose.size as f64;
        ctx.save();
        ctx.translate(pose.x as f64, pose.y as f64)?;
        ctx.rotate(pose.rotation as f64)?;
        ctx.set_global_alpha(pose.alpha as f64);

        let c = PETAL_GRADIENT_CENTER as f64 * s;
        let g = ctx.create_radial_gradient(c, c, 1.0, 0.0, 0.0, s * PETAL_GRADIENT_RADIUS as f64)?;
        g.add_color_stop(0.0, PETAL_INNER_FILL)?;
        g.add_color_stop(1.0, PETAL_OUTER_FILL)?;
        ctx.set_fill_style_canvas_gradient(&g);

        let (c1x, c1y) = PETAL_CP1;
        let (c2x, c2y) = PETAL_CP2;
        ctx.begin_path();
        ctx.move_to(0.0, -s);
        ctx.bezier_curve_to(s * c1x, s * c1y, s * c2x, s * c2y, 0.0, s);
        ctx.bezier_curve_to(-s * c2x, s * c2y, -s * c1x, s * c1y, 0.0, -s);
        ctx.close_path();
        ctx.fill();

        let rib = PETAL_RIB_EXTENT as f64 * s;
        ctx.set_stroke_style_str(PETAL_RIB_STROKE);
        ctx.set_line_width(PETAL_RIB_WIDTH);
        ctx.begin_path();
        ctx.move_to(0.0, -rib);
        ctx.line_to(0.0, rib);
        ctx.stroke();

        ctx.restore();
        Ok(())
    }
}

impl RenderAdapter for CanvasRenderer {
    type Error = JsValue;

    fn begin_frame(&mut self, viewport: Viewport) {
        let (w, h) = (viewport.width() as f64, viewport.height() as f64);
        self.errors = 0;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.ctx.set_fill_style_str(BACKGROUND_FILL);
        self.ctx.fill_rect(0.0, 0.0, w, h);
    }

    fn draw_petal(&mut self, pose: ParticlePose) {
        if self.petal(pose).is_err() {
            // a failed transform would leave the context state pushed
            self.ctx.restore();
            self.errors += 1;
        }
    }

    fn end_frame(&mut self) -> Result<(), JsValue> {
        if self.errors > 0 {
            return Err(JsValue::from_str(&format!("{} petals failed to draw", self.errors)));
        }
        Ok(())
    }
}
