use haunted_core::{capped_pixel_ratio, OutputSize, ViewportSize};
use web_sys as web;

/// Window inner size in CSS pixels.
pub fn viewport_size(window: &web::Window) -> anyhow::Result<ViewportSize> {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    let size = ViewportSize::new(read(window.inner_width()), read(window.inner_height()));
    size.validate().map_err(anyhow::Error::from)
}

/// Match the canvas backing store to the capped drawing-buffer size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: ViewportSize, dpr: f64) {
    let (w_px, h_px) = OutputSize::new(viewport, capped_pixel_ratio(dpr)).drawing_buffer_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
}
