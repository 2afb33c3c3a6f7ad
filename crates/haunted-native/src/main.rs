use haunted_core::{
    build_scene, capped_pixel_ratio, AppContext, FrameLoop, OutputSize, PointerButton,
    SceneConfig, ViewportSize,
};
use haunted_gpu::GpuRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{ElementState, Event, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowBuilder;

const SEED_VAR: &str = "HAUNTED_SEED";

fn scene_rng() -> StdRng {
    match std::env::var(SEED_VAR) {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => {
                log::info!("[scene] seed {} from {}", seed, SEED_VAR);
                StdRng::seed_from_u64(seed)
            }
            Err(e) => {
                log::warn!("[scene] ignoring {}={:?}: {}", SEED_VAR, raw, e);
                StdRng::from_entropy()
            }
        },
        Err(_) => StdRng::from_entropy(),
    }
}

/// Window size in logical pixels; the scale factor plays the browser's devicePixelRatio.
fn viewport(size: PhysicalSize<u32>, scale_factor: f64) -> ViewportSize {
    let logical: LogicalSize<f64> = size.to_logical(scale_factor);
    ViewportSize::new(logical.width.round() as u32, logical.height.round() as u32)
}

fn pointer_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Middle => Some(PointerButton::Middle),
        MouseButton::Right => Some(PointerButton::Secondary),
        _ => None,
    }
}

/// The same names the browser reports in `KeyboardEvent.key`.
fn key_name(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::PageUp) => Some("PageUp"),
        Key::Named(NamedKey::PageDown) => Some("PageDown"),
        Key::Character(c) => Some(c.as_str()),
        _ => None,
    }
}

fn log_panel(app: &AppContext) {
    if !app.panel.visible {
        log::info!("[panel] hidden");
        return;
    }
    for line in app.panel.lines(&app.scene.lights) {
        log::info!("[panel] {}", line);
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Haunted House")
        .with_inner_size(LogicalSize::new(1280.0, 720.0))
        .build(&event_loop)?;

    let mut scale_factor = window.scale_factor();
    let size = viewport(window.inner_size(), scale_factor);
    let initial = ViewportSize::new(size.width.max(1), size.height.max(1));
    let scene = build_scene(&mut scene_rng(), &SceneConfig::default());
    let mut app = AppContext::new(scene, initial)?;
    let mut renderer = pollster::block_on(GpuRenderer::new(
        &window,
        OutputSize::new(initial, capped_pixel_ratio(scale_factor)),
        &app.scene,
    ))?;
    app.attach(&mut renderer, scale_factor);
    log_panel(&app);

    let mut frames = FrameLoop::new();
    let mut cursor = [0.0_f32; 2];
    let window = &window;

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::ScaleFactorChanged {
                    scale_factor: factor,
                    ..
                } => scale_factor = factor,
                WindowEvent::Resized(size) => {
                    let size = viewport(size, scale_factor);
                    if let Err(e) = app.resize(size, scale_factor, &mut renderer) {
                        log::debug!("[resize] {}", e);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let logical = position.to_logical::<f32>(scale_factor);
                    cursor = [logical.x, logical.y];
                    let height = app.viewport().height as f32;
                    app.controls
                        .pointer_move(cursor[0], cursor[1], height, &app.camera);
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    match (state, pointer_button(button)) {
                        (ElementState::Pressed, Some(b)) => {
                            app.controls.pointer_down(b, cursor[0], cursor[1])
                        }
                        (ElementState::Released, Some(_)) => app.controls.pointer_up(),
                        _ => {}
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports scrolling up as positive, the browser as negative
                    let dy = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(p) => p.y as f32,
                    };
                    app.controls.wheel(-dy);
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => {
                    if let Some(name) = key_name(&logical_key) {
                        if app.handle_key(name) {
                            log_panel(&app);
                        }
                    }
                }
                _ => {}
            },
            Event::AboutToWait => match frames.tick(&mut app, &mut renderer) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.recover(),
                Err(e) => {
                    log::error!("[frame] render failed: {:?}", e);
                    elwt.exit();
                }
            },
            _ => {}
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::SmolStr;

    #[test]
    fn panel_keys_use_browser_names() {
        assert_eq!(key_name(&Key::Named(NamedKey::ArrowUp)), Some("ArrowUp"));
        assert_eq!(key_name(&Key::Named(NamedKey::PageDown)), Some("PageDown"));
        assert_eq!(key_name(&Key::Character(SmolStr::new("3"))), Some("3"));
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)), None);
    }

    #[test]
    fn viewport_is_measured_in_logical_pixels() {
        assert_eq!(viewport(PhysicalSize::new(1600, 900), 1.0), ViewportSize::new(1600, 900));
        assert_eq!(viewport(PhysicalSize::new(2560, 1440), 2.0), ViewportSize::new(1280, 720));
        assert_eq!(viewport(PhysicalSize::new(3840, 2160), 3.0), ViewportSize::new(1280, 720));
    }

    #[test]
    fn high_density_windows_render_at_most_twice_logical() {
        let size = viewport(PhysicalSize::new(3840, 2160), 3.0);
        let out = OutputSize::new(size, capped_pixel_ratio(3.0));
        assert_eq!(out.drawing_buffer_size(), (2560, 1440));
    }

    #[test]
    fn mouse_buttons_map_to_orbit_actions() {
        assert_eq!(pointer_button(MouseButton::Left), Some(PointerButton::Primary));
        assert_eq!(pointer_button(MouseButton::Right), Some(PointerButton::Secondary));
        assert_eq!(pointer_button(MouseButton::Other(7)), None);
    }
}
