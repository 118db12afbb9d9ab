//! DeviceMotion as the tilt source.
//!
//! Permission is requested only where the browser exposes
//! `DeviceMotionEvent.requestPermission` (iOS 13+); elsewhere the listener is
//! attached straight away.

use crate::constants::DEBUG_READOUT_ID;
use crate::dom;
use crate::platform::{debug_line, HostOs};
use petal_core::{Acceleration, MotionSample, PermissionOutcome, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn device_motion_ctor(window: &web::Window) -> Option<JsValue> {
    js_sys::Reflect::get(window, &JsValue::from_str("DeviceMotionEvent"))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Ask for motion access. Resolves to `Unavailable` when the browser has no
/// DeviceMotion API at all.
pub async fn request_permission(window: &web::Window) -> PermissionOutcome {
    let Some(ctor) = device_motion_ctor(window) else {
        return PermissionOutcome::Unavailable;
    };
    let request = js_sys::Reflect::get(&ctor, &JsValue::from_str("requestPermission"))
        .ok()
        .and_then(|f| f.dyn_into::<js_sys::Function>().ok());
    let Some(request) = request else {
        return PermissionOutcome::Granted;
    };
    let promise = match request.call0(&ctor) {
        Ok(p) => js_sys::Promise::resolve(&p),
        Err(e) => return PermissionOutcome::Failed(format!("{:?}", e)),
    };
    match JsFuture::from(promise).await {
        Ok(v) if v.as_string().as_deref() == Some("granted") => PermissionOutcome::Granted,
        Ok(_) => PermissionOutcome::Denied,
        Err(e) => PermissionOutcome::Failed(format!("{:?}", e)),
    }
}

/// Current screen rotation in degrees, read fresh for each sample:
/// `screen.orientation.angle`, then legacy `window.orientation`, then 0.
pub fn screen_angle(window: &web::Window) -> f32 {
    if let Some(angle) = window
        .screen()
        .ok()
        .and_then(|s| s.orientation().angle().ok())
    {
        return angle as f32;
    }
    js_sys::Reflect::get(window, &JsValue::from_str("orientation"))
        .ok()
        .and_then(|v| v.as_f64())
        .map(|a| a as f32)
        .unwrap_or(0.0)
}

pub fn motion_sample(ev: &web::DeviceMotionEvent) -> MotionSample {
    MotionSample {
        acceleration_including_gravity: ev.acceleration_including_gravity().map(|a| Acceleration {
            x: a.x().map(|v| v as f32),
            y: a.y().map(|v| v as f32),
            z: a.z().map(|v| v as f32),
        }),
    }
}

/// Attach a passive `devicemotion` listener feeding the scene's tilt.
pub fn subscribe(window: &web::Window, scene: Rc<RefCell<Scene>>, os: HostOs) -> anyhow::Result<()> {
    let window_cb = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::DeviceMotionEvent| {
        let angle = screen_angle(&window_cb);
        let sample = motion_sample(&ev);
        match scene.borrow_mut().ingest(&sample, angle) {
            Ok(tilt) => {
                if let Some(doc) = window_cb.document() {
                    dom::set_text(&doc, DEBUG_READOUT_ID, &debug_line(os, angle, tilt.x));
                }
            }
            Err(e) => log::trace!("[sensor] {e}"),
        }
    }) as Box<dyn FnMut(_)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "devicemotion",
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    log::info!("[sensor] devicemotion subscribed ({})", os.label());
    Ok(())
}
