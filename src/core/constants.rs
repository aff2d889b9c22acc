// Tuning constants for the page effects, shared with host-side tests.

// Orb follower
pub const ORB_SENSITIVITY_DIVISOR: f64 = 50.0; // px of pointer offset per px of orb travel
pub const ORB_SMOOTHING: f64 = 0.05; // fraction of the remaining distance closed per frame

// Parallax background
pub const PARALLAX_SCALE: f64 = 0.1; // background moves at 10% of scroll speed

// Navbar
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;
pub const NAVBAR_SCROLLED_CLASS: &str = "scrolled";

// CTA button highlight, parked off the left edge when the pointer leaves
pub const HIGHLIGHT_IDLE_PERCENT: f64 = -30.0;

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.15;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px";
pub const FADE_ELEMENT_CLASS: &str = "fade-element";
pub const REVEAL_VISIBLE_CLASS: &str = "visible";
pub const REVEAL_HIDDEN_CLASS: &str = "hidden";
