/// Pointer x across an element box, as a percentage of its width.
///
/// Unclamped; `None` for a zero-width (collapsed or hidden) box.
#[inline]
pub fn highlight_percent(client_x: f64, left: f64, width: f64) -> Option<f64> {
    (width > 0.0).then(|| (client_x - left) / width * 100.0)
}

pub fn percent_css(percent: f64) -> String {
    format!("{percent}%")
}
