#![cfg(target_arch = "wasm32")]
use petal_core::{Scene, SceneParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod frame;
mod platform;
mod sensor;
mod ui;

use constants::*;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, ctx: &web::CanvasRenderingContext2d) {
    dom::sync_canvas_backing_size(canvas, ctx);
    let canvas_resize = canvas.clone();
    let ctx_resize = ctx.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, &ctx_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

fn host_os(window: &web::Window) -> platform::HostOs {
    let navigator = window.navigator();
    let ua = navigator
        .user_agent()
        .ok()
        .filter(|s| !s.is_empty())
        .or_else(|| {
            js_sys::Reflect::get(&navigator, &JsValue::from_str("vendor"))
                .ok()
                .and_then(|v| v.as_string())
        })
        .unwrap_or_default();
    platform::HostOs::detect(&ua)
}

fn scene_rng() -> StdRng {
    StdRng::from_rng(rand::rngs::OsRng).unwrap_or_else(|e| {
        log::warn!("entropy unavailable ({e}); using fixed seed");
        StdRng::seed_from_u64(FALLBACK_SEED)
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("petal-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    wire_canvas_resize(&canvas, &ctx);

    // resolved once; the simulation only ever sees the profile
    let os = host_os(&window);
    let viewport = dom::window_viewport(&window);
    let scene = Rc::new(RefCell::new(Scene::new(
        SceneParams::default(),
        os.profile(),
        viewport,
        scene_rng(),
    )));
    log::info!("[host] os={} profile={:?}", os.label(), os.profile());

    match document
        .get_element_by_id(PERMISSION_BUTTON_ID)
        .and_then(|el| el.dyn_into::<web::HtmlButtonElement>().ok())
    {
        Some(button) => ui::wire_permission_button(&window, button, scene.clone(), os),
        None => log::warn!("missing #{PERMISSION_BUTTON_ID}; tilt stays off"),
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        renderer: canvas::CanvasRenderer::new(ctx),
        viewport: dom::WindowViewport {
            window: window.clone(),
        },
        last_instant: instant::Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
