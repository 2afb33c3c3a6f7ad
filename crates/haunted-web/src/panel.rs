use haunted_core::{DebugPanel, Lights};
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_ID: &str = "debug-panel";

/// Draw the slider panel into `#debug-panel` if the page has one.
pub fn render(document: &web::Document, panel: &DebugPanel, lights: &Lights) {
    let Some(el) = document.get_element_by_id(PANEL_ID) else {
        return;
    };
    if !panel.visible {
        let _ = el.set_attribute("style", "display:none");
        return;
    }
    let _ = el.set_attribute("style", "white-space:pre");
    if let Some(div) = el.dyn_ref::<web::HtmlElement>() {
        div.set_inner_text(&panel.lines(lights).join("\n"));
    }
}
