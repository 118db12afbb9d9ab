//! The single permission trigger and its status text.

use crate::dom;
use crate::platform::HostOs;
use crate::sensor;
use petal_core::{PermissionGate, PermissionOutcome, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn reflect(button: &web::HtmlButtonElement, gate: &PermissionGate) {
    button.set_text_content(Some(gate.status_text()));
    button.set_disabled(!gate.trigger_enabled());
}

pub fn wire_permission_button(
    window: &web::Window,
    button: web::HtmlButtonElement,
    scene: Rc<RefCell<Scene>>,
    os: HostOs,
) {
    let gate = Rc::new(RefCell::new(PermissionGate::new()));
    reflect(&button, &gate.borrow());

    let element: web::Element = button.clone().unchecked_into();
    let window = window.clone();
    dom::add_click_listener(&element, move || {
        if !gate.borrow_mut().begin() {
            return;
        }
        reflect(&button, &gate.borrow());
        let gate = gate.clone();
        let button = button.clone();
        let scene = scene.clone();
        let window = window.clone();
        spawn_local(async move {
            let outcome = match sensor::request_permission(&window).await {
                PermissionOutcome::Granted => match sensor::subscribe(&window, scene, os) {
                    Ok(()) => PermissionOutcome::Granted,
                    Err(e) => PermissionOutcome::Failed(e.to_string()),
                },
                other => other,
            };
            let status = gate.borrow_mut().resolve(outcome);
            if gate.borrow().is_streaming() {
                log::info!("[permission] granted, streaming motion samples");
            } else {
                log::info!("[permission] {:?}", status);
            }
            reflect(&button, &gate.borrow());
        });
    });
}
