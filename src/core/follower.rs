use super::constants::{ORB_SENSITIVITY_DIVISOR, ORB_SMOOTHING};
use glam::DVec2;

/// Viewport size in CSS pixels, sampled with every pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width, self.height) * 0.5
    }
}

/// Where the follower is heading and where it currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub target: DVec2,
    pub current: DVec2,
}

impl PointerState {
    #[inline]
    pub fn remaining(&self) -> DVec2 {
        self.target - self.current
    }
}

/// Exponential smoothing toward a moving target.
///
/// Each `tick` closes a fixed fraction of the remaining distance. There is no
/// delta-time term, so the perceived speed scales with the refresh rate.
#[derive(Clone, Debug)]
pub struct Follower {
    state: PointerState,
    smoothing: f64,
    sensitivity: f64,
}

impl Default for Follower {
    fn default() -> Self {
        Self::new(ORB_SMOOTHING, ORB_SENSITIVITY_DIVISOR)
    }
}

impl Follower {
    pub fn new(smoothing: f64, sensitivity: f64) -> Self {
        Self {
            state: PointerState::default(),
            smoothing,
            sensitivity,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Retargets from a pointer position in client coordinates. Not clamped:
    /// a pointer far from center yields a proportionally large target.
    pub fn on_pointer_move(&mut self, client: DVec2, viewport: Viewport) {
        self.state.target = pointer_offset(client, viewport, self.sensitivity);
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn set_target(&mut self, target: DVec2) {
        self.state.target = target;
    }

    /// Advances one refresh and returns the new position.
    pub fn tick(&mut self) -> DVec2 {
        self.state.current += self.state.remaining() * self.smoothing;
        self.state.current
    }
}

#[inline]
pub fn pointer_offset(client: DVec2, viewport: Viewport, sensitivity: f64) -> DVec2 {
    (client - viewport.center()) / sensitivity
}

pub fn translate_css(offset: DVec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}
