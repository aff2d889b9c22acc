use crate::constants::REVEAL_SELECTOR;
use crate::core::constants::FADE_ELEMENT_CLASS;
use crate::core::reveal::Reveal;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Fades sections in and out as they cross the viewport. Disconnects on drop.
pub struct RevealObserver {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    pub fn observe_all(
        document: &web::Document,
        threshold: f64,
        root_margin: &str,
    ) -> anyhow::Result<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let reveal = Reveal::from_intersecting(entry.is_intersecting());
                    let classes = entry.target().class_list();
                    _ = classes.add_1(reveal.add_class());
                    _ = classes.remove_1(reveal.remove_class());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        for element in dom::query_all(document, REVEAL_SELECTOR) {
            _ = element.class_list().add_1(FADE_ELEMENT_CLASS);
            observer.observe(&element);
        }
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
