use std::time::Instant;
use winit::event::*;
use winit::event_loop::EventLoop;
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

use petal_core::{PlatformProfile, Scene, SceneParams, Viewport, ViewportSource};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod gpu;
mod keyboard;

use gpu::GpuState;
use keyboard::{KeyboardTilt, TiltKey};

struct WindowViewport<'w>(&'w winit::window::Window);

impl ViewportSource for WindowViewport<'_> {
    fn viewport(&self) -> Viewport {
        gpu::logical_viewport(self.0)
    }
}

fn tilt_key(key: &Key) -> Option<TiltKey> {
    match key {
        Key::Named(NamedKey::ArrowLeft) => Some(TiltKey::Left),
        Key::Named(NamedKey::ArrowRight) => Some(TiltKey::Right),
        Key::Named(NamedKey::ArrowUp) => Some(TiltKey::Up),
        Key::Named(NamedKey::ArrowDown) => Some(TiltKey::Down),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Petal Fall (native) - arrows tilt, 1-4 rotate")
        .build(&event_loop)?;

    let params = SceneParams::default();
    let mut state = pollster::block_on(GpuState::new(&window, params.petal_count))?;
    let mut scene = Scene::new(
        params,
        PlatformProfile::Default,
        gpu::logical_viewport(&window),
        StdRng::from_entropy(),
    );
    let mut keys = KeyboardTilt::default();
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => state.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: key_state,
                            ..
                        },
                    ..
                },
            ..
        } => {
            let pressed = key_state == ElementState::Pressed;
            if let Some(k) = tilt_key(&logical_key) {
                keys.set_key(k, pressed);
            } else if let Key::Named(NamedKey::Escape) = logical_key {
                elwt.exit();
            } else if let Key::Character(c) = &logical_key {
                if pressed && keys.set_rotation_from_digit(c.as_str()) {
                    log::info!("[keys] virtual screen rotation {}", keys.screen_angle());
                }
            }
        }
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;

            // the keyboard "sensor" reports once per frame
            if let Err(e) = scene.ingest(&keys.sample(), keys.screen_angle()) {
                log::trace!("[keys] {e}");
            }
            let viewport = WindowViewport(state.window);
            match scene.frame(dt, &viewport, &mut state) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
