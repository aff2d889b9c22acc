use super::constants::{
    NAVBAR_SCROLL_THRESHOLD, ORB_SENSITIVITY_DIVISOR, ORB_SMOOTHING, PARALLAX_SCALE,
    REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("orb smoothing must be in (0, 1], got {0}")]
    Smoothing(f64),
    #[error("orb sensitivity divisor must be positive and finite, got {0}")]
    Sensitivity(f64),
    #[error("parallax scale must be finite, got {0}")]
    ParallaxScale(f64),
    #[error("navbar threshold must be finite, got {0}")]
    NavbarThreshold(f64),
    #[error("reveal threshold must be in [0, 1], got {0}")]
    RevealThreshold(f64),
}

/// Knobs for every page effect. `Default` reproduces the shipped look.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectsConfig {
    pub orb_smoothing: f64,
    pub orb_sensitivity: f64,
    pub parallax_scale: f64,
    pub navbar_threshold: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            orb_smoothing: ORB_SMOOTHING,
            orb_sensitivity: ORB_SENSITIVITY_DIVISOR,
            parallax_scale: PARALLAX_SCALE,
            navbar_threshold: NAVBAR_SCROLL_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

impl EffectsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.orb_smoothing > 0.0 && self.orb_smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(self.orb_smoothing));
        }
        if !(self.orb_sensitivity.is_finite() && self.orb_sensitivity > 0.0) {
            return Err(ConfigError::Sensitivity(self.orb_sensitivity));
        }
        if !self.parallax_scale.is_finite() {
            return Err(ConfigError::ParallaxScale(self.parallax_scale));
        }
        if !self.navbar_threshold.is_finite() {
            return Err(ConfigError::NavbarThreshold(self.navbar_threshold));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::RevealThreshold(self.reveal_threshold));
        }
        Ok(())
    }
}
