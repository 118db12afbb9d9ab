use petal_core::{Viewport, ViewportSource};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Err(e) = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        log::warn!("click listener error: {:?}", e);
    }
    closure.forget();
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// CSS-pixel size of the window's layout viewport.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(1.0);
    Viewport::new(w as f32, h as f32)
}

/// Reads the window size fresh every frame.
pub struct WindowViewport {
    pub window: web::Window,
}

impl ViewportSource for WindowViewport {
    fn viewport(&self) -> Viewport {
        window_viewport(&self.window)
    }
}

/// Size the canvas backing store to CSS size * devicePixelRatio and scale the
/// 2D context so drawing stays in CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, ctx: &web::CanvasRenderingContext2d) {
    let Some(window) = web::window() else {
        return;
    };
    let viewport = window_viewport(&window);
    let dpr = window.device_pixel_ratio().max(1.0);
    let (w_px, h_px) = viewport.backing_size(dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width()));
    _ = style.set_property("height", &format!("{}px", viewport.height()));
    if let Err(e) = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
        log::warn!("setTransform error: {:?}", e);
    }
    log::debug!(
        "[resize] css={:.0}x{:.0} dpr={:.2} backing={}x{}",
        viewport.width(),
        viewport.height(),
        dpr,
        w_px,
        h_px
    );
}
