use crate::constants::HIGHLIGHT_PROPERTY;
use crate::core::constants::HIGHLIGHT_IDLE_PERCENT;
use crate::core::highlight::{highlight_percent, percent_css};
use crate::core::{PageEvents, PointerMove};
use crate::dom::{self, Listener};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feeds document mouse moves, with the viewport size at that moment, into
/// the pointer event source.
pub fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    events: Rc<RefCell<PageEvents>>,
) -> anyhow::Result<Listener> {
    let wnd = window.clone();
    Listener::new(document.as_ref(), "mousemove", true, move |ev: web::MouseEvent| {
        let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
        let viewport = dom::viewport(&wnd);
        events
            .borrow_mut()
            .pointer
            .dispatch(&PointerMove { client, viewport });
    })
}

/// Cursor-following highlight on the CTA button.
pub fn wire_highlight(button: &web::HtmlElement) -> anyhow::Result<Vec<Listener>> {
    let target: &web::EventTarget = button.as_ref();
    let on_move = {
        let button = button.clone();
        Listener::new(target, "mousemove", true, move |ev: web::MouseEvent| {
            let rect = button.get_bounding_client_rect();
            if let Some(percent) = highlight_percent(ev.client_x() as f64, rect.left(), rect.width())
            {
                _ = button
                    .style()
                    .set_property(HIGHLIGHT_PROPERTY, &percent_css(percent));
            }
        })?
    };
    let on_leave = {
        let button = button.clone();
        Listener::new(target, "mouseleave", true, move |_: web::MouseEvent| {
            _ = button
                .style()
                .set_property(HIGHLIGHT_PROPERTY, &percent_css(HIGHLIGHT_IDLE_PERCENT));
        })?
    };
    Ok(vec![on_move, on_leave])
}
