//! Gesture configuration, optionally overridden from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::consts::{DEFAULT_CANCEL_THRESHOLD_PX, DEFAULT_CLICK_SIDE_PX};
use crate::error::BoxDrawError;

pub const CLICK_SIDE_PX_VAR: &str = "BOXDRAW_CLICK_SIDE_PX";
pub const CANCEL_THRESHOLD_PX_VAR: &str = "BOXDRAW_CANCEL_THRESHOLD_PX";

/// Click-versus-drag policy for a draw gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawConfig {
    /// Side of the square a click snaps to, in surface pixels.
    pub click_side_px: f64,
    /// Largest pixel extent (in both axes) still treated as a click.
    pub cancel_threshold_px: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self { click_side_px: DEFAULT_CLICK_SIDE_PX, cancel_threshold_px: DEFAULT_CANCEL_THRESHOLD_PX }
    }
}

impl DrawConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `BOXDRAW_CLICK_SIDE_PX`: default 100, must be > 0
    /// - `BOXDRAW_CANCEL_THRESHOLD_PX`: default 2, must be >= 0
    ///
    /// # Errors
    ///
    /// Returns [`BoxDrawError::InvalidConfig`] when a variable is set but does
    /// not hold a usable number.
    pub fn from_env() -> Result<Self, BoxDrawError> {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`DrawConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BoxDrawError> {
        let defaults = Self::default();
        let click_side_px = parse_px(CLICK_SIDE_PX_VAR, lookup(CLICK_SIDE_PX_VAR), defaults.click_side_px, false)?;
        let cancel_threshold_px =
            parse_px(CANCEL_THRESHOLD_PX_VAR, lookup(CANCEL_THRESHOLD_PX_VAR), defaults.cancel_threshold_px, true)?;
        Ok(Self { click_side_px, cancel_threshold_px })
    }
}

fn parse_px(var: &str, raw: Option<String>, default: f64, allow_zero: bool) -> Result<f64, BoxDrawError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let invalid = || BoxDrawError::InvalidConfig { var: var.to_string(), value: raw.clone() };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    let in_range = if allow_zero { value >= 0.0 } else { value > 0.0 };
    if value.is_finite() && in_range { Ok(value) } else { Err(invalid()) }
}
