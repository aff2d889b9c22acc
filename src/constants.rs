// DOM hooks the effects look for. Changing markup means changing these.

pub const ORB_SELECTOR: &str = ".glass-orb";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const CTA_SELECTOR: &str = ".cta-button";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const REVEAL_SELECTOR: &str = ".nav, .section, .step, .app-list, .important";

// Id of the managed <style> element; reused across remounts
pub const PARALLAX_STYLE_ID: &str = "parallax-style";

// Custom property the CTA stylesheet reads for its highlight position
pub const HIGHLIGHT_PROPERTY: &str = "--mouse-x";
