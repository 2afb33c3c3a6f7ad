use crate::WebApp;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const STATS_EVERY: u64 = 600;

/// Run one frame. Returns false once the renderer has failed.
fn frame(state: &Rc<RefCell<WebApp>>) -> bool {
    let mut guard = state.borrow_mut();
    let WebApp {
        app,
        renderer,
        frames,
        ..
    } = &mut *guard;
    match frames.tick(app, renderer) {
        Ok(stats) => {
            if stats.frame % STATS_EVERY == 0 {
                log::debug!(
                    "[frame] {} frames in {:.1}s",
                    stats.frame,
                    stats.elapsed_secs
                );
            }
            true
        }
        Err(e) => {
            log::error!("[frame] render failed, stopping loop: {:?}", e);
            false
        }
    }
}

pub fn start_loop(state: Rc<RefCell<WebApp>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame(&state) {
            request_next(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_next(&tick);
}

fn request_next(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
