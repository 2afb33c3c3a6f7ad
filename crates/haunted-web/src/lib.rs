#![cfg(target_arch = "wasm32")]
use haunted_core::{build_scene, AppContext, FrameLoop, OutputSize, SceneConfig};
use haunted_gpu::GpuRenderer;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod panel;

const CANVAS_SELECTOR: &str = "canvas.webgl";

/// Everything the rAF closure and the DOM listeners share.
pub(crate) struct WebApp {
    pub(crate) app: AppContext,
    pub(crate) renderer: GpuRenderer<'static>,
    pub(crate) frames: FrameLoop,
    pub(crate) document: web::Document,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("haunted-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {CANVAS_SELECTOR}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewport = dom::viewport_size(&window)?;
    let dpr = window.device_pixel_ratio();
    dom::sync_canvas_backing_size(&canvas, viewport, dpr);

    let mut rng = StdRng::from_entropy();
    let scene = build_scene(&mut rng, &SceneConfig::default());
    let app = AppContext::new(scene, viewport)?;

    let output = OutputSize::new(viewport, haunted_core::capped_pixel_ratio(dpr));
    let mut renderer = GpuRenderer::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        output,
        &app.scene,
    )
    .await?;
    app.attach(&mut renderer, dpr);

    panel::render(&document, &app.panel, &app.scene.lights);

    let state = Rc::new(RefCell::new(WebApp {
        app,
        renderer,
        frames: FrameLoop::new(),
        document,
    }));
    events::wire(&window, &canvas, &state);
    frame::start_loop(state);
    Ok(())
}
