use crate::core::{PageEvents, ScrollEvent};
use crate::dom::Listener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Registers the window scroll listener. It is passive: the handler only
/// samples the offset and never cancels scrolling.
pub fn wire_scroll(
    window: &web::Window,
    events: Rc<RefCell<PageEvents>>,
) -> anyhow::Result<Listener> {
    let wnd = window.clone();
    Listener::new(window.as_ref(), "scroll", true, move |_: web::Event| {
        let offset = wnd.scroll_y().unwrap_or(0.0);
        events.borrow_mut().scroll.dispatch(&ScrollEvent { offset });
    })
}
