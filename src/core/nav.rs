/// Whether the navbar carries its scrolled class at `offset`.
#[inline]
pub fn navbar_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Selector for an in-page anchor link. A bare `#` and non-fragment hrefs
/// keep their default behavior.
#[inline]
pub fn anchor_target(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}
