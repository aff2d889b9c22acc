use crate::core::{FrameCallback, FrameScheduler};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler. Every callback becomes a
/// one-shot JS closure that is freed after it runs.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: FrameCallback) -> bool {
        let js = Closure::once_into_js(move || callback());
        match self.window.request_animation_frame(js.unchecked_ref()) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                false
            }
        }
    }
}
