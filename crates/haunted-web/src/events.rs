use crate::{dom, panel, WebApp};
use haunted_core::PointerButton;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn pointer_button(button: i16) -> Option<PointerButton> {
    match button {
        0 => Some(PointerButton::Primary),
        1 => Some(PointerButton::Middle),
        2 => Some(PointerButton::Secondary),
        _ => None,
    }
}

fn listen<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    target: &web::EventTarget,
    name: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref()) {
        log::warn!("[events] could not listen for {}: {:?}", name, e);
    }
    closure.forget();
}

pub fn wire(window: &web::Window, canvas: &web::HtmlCanvasElement, state: &Rc<RefCell<WebApp>>) {
    // Resize: synchronous, no debouncing
    {
        let state = state.clone();
        let canvas = canvas.clone();
        listen(window, "resize", move |_: web::Event| {
            let Some(w) = web::window() else { return };
            let size = match dom::viewport_size(&w) {
                Ok(size) => size,
                Err(e) => {
                    log::debug!("[resize] skipped: {}", e);
                    return;
                }
            };
            let dpr = w.device_pixel_ratio();
            let mut guard = state.borrow_mut();
            let WebApp { app, renderer, .. } = &mut *guard;
            match app.resize(size, dpr, renderer) {
                Ok(()) => dom::sync_canvas_backing_size(&canvas, size, dpr),
                Err(e) => log::warn!("[resize] {}", e),
            }
        });
    }

    {
        let state = state.clone();
        listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
            if let Some(button) = pointer_button(ev.button()) {
                let mut s = state.borrow_mut();
                s.app
                    .controls
                    .pointer_down(button, ev.client_x() as f32, ev.client_y() as f32);
                ev.prevent_default();
            }
        });
    }

    // Move and up go on the window so drags survive leaving the canvas
    {
        let state = state.clone();
        listen(window, "pointermove", move |ev: web::PointerEvent| {
            let mut s = state.borrow_mut();
            if !s.app.controls.is_dragging() {
                return;
            }
            let height = s.app.viewport().height as f32;
            let app = &mut s.app;
            app.controls.pointer_move(
                ev.client_x() as f32,
                ev.client_y() as f32,
                height,
                &app.camera,
            );
        });
    }
    {
        let state = state.clone();
        listen(window, "pointerup", move |_: web::PointerEvent| {
            state.borrow_mut().app.controls.pointer_up();
        });
    }

    {
        let state = state.clone();
        listen(canvas, "wheel", move |ev: web::WheelEvent| {
            state.borrow_mut().app.controls.wheel(ev.delta_y() as f32);
            ev.prevent_default();
        });
    }
    listen(canvas, "contextmenu", |ev: web::Event| ev.prevent_default());

    {
        let state = state.clone();
        listen(window, "keydown", move |ev: web::KeyboardEvent| {
            let mut guard = state.borrow_mut();
            let s = &mut *guard;
            if s.app.handle_key(&ev.key()) {
                panel::render(&s.document, &s.app.panel, &s.app.scene.lights);
                ev.prevent_default();
            }
        });
    }
}
