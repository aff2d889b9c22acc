use crate::constants::ANCHOR_SELECTOR;
use crate::core::nav::anchor_target;
use crate::dom::{self, Listener};
use web_sys as web;

/// Smooth scrolling for in-page `#fragment` links.
pub fn wire_anchor_links(document: &web::Document) -> Vec<Listener> {
    dom::query_all(document, ANCHOR_SELECTOR)
        .into_iter()
        .filter_map(|link| {
            let doc = document.clone();
            let source = link.clone();
            let listener = Listener::new(link.as_ref(), "click", false, move |ev: web::MouseEvent| {
                let Some(href) = source.get_attribute("href") else {
                    return;
                };
                let Some(selector) = anchor_target(&href) else {
                    return;
                };
                ev.prevent_default();
                if let Some(target) = dom::query(&doc, selector) {
                    scroll_smoothly(&target);
                }
            });
            match listener {
                Ok(l) => Some(l),
                Err(e) => {
                    log::warn!("[anchors] {e:#}");
                    None
                }
            }
        })
        .collect()
}

fn scroll_smoothly(target: &web::Element) {
    let options = web::ScrollIntoViewOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    options.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
