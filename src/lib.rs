#![cfg(target_arch = "wasm32")]
use crate::constants::{CTA_SELECTOR, NAVBAR_SELECTOR, ORB_SELECTOR, PARALLAX_STYLE_ID};
use crate::core::{
    ClassTarget, EffectsConfig, FrameScheduler, PageEffects, PageTargets, StyleRule,
    TransformTarget,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod anchors;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod reveal;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glass-fx starting");
    Ok(())
}

/// Live page effects. `stop()`, or freeing the handle from JS, removes
/// every listener, the observer, the orb loop and the managed style rule.
#[wasm_bindgen]
pub struct Effects {
    page: PageEffects,
    listeners: Vec<dom::Listener>,
    reveal: Option<reveal::RevealObserver>,
}

#[wasm_bindgen]
impl Effects {
    pub fn stop(&mut self) {
        if !self.page.is_mounted() {
            return;
        }
        self.listeners.clear();
        self.reveal = None;
        self.page.teardown();
        log::info!("[fx] effects stopped");
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.page.is_mounted()
    }
}

/// Wires every effect against the current document. Call once the DOM is
/// parsed (module scripts and `defer` already guarantee that).
#[wasm_bindgen]
pub fn mount() -> Result<Effects, JsValue> {
    mount_with(EffectsConfig::default()).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

fn mount_with(config: EffectsConfig) -> anyhow::Result<Effects> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let parallax_rule = match style::StyleSlot::install(&document, PARALLAX_STYLE_ID) {
        Ok(slot) => Some(Box::new(slot) as Box<dyn StyleRule>),
        Err(e) => {
            log::warn!("[fx] parallax style unavailable: {e:#}");
            None
        }
    };
    let targets = PageTargets {
        orb: dom::query_html(&document, ORB_SELECTOR)
            .map(|el| Box::new(el) as Box<dyn TransformTarget>),
        navbar: dom::query(&document, NAVBAR_SELECTOR)
            .map(|el| Box::new(el) as Box<dyn ClassTarget>),
        parallax_rule,
    };

    let scheduler: Rc<dyn FrameScheduler> = Rc::new(frame::RafScheduler::new(window.clone()));
    let page = PageEffects::mount(&config, scheduler, targets)?;

    let mut listeners = vec![events::wire_scroll(&window, page.events())?];
    if page.follower().is_some() {
        listeners.push(events::wire_pointer(&window, &document, page.events())?);
    }
    if let Some(button) = dom::query_html(&document, CTA_SELECTOR) {
        listeners.extend(events::wire_highlight(&button)?);
    }
    listeners.extend(anchors::wire_anchor_links(&document));

    let reveal = match reveal::RevealObserver::observe_all(
        &document,
        config.reveal_threshold,
        config.reveal_root_margin,
    ) {
        Ok(observer) => Some(observer),
        Err(e) => {
            log::warn!("[fx] reveal-on-scroll unavailable: {e:#}");
            None
        }
    };

    log::info!("[fx] effects mounted ({} listeners)", listeners.len());
    Ok(Effects {
        page,
        listeners,
        reveal,
    })
}
