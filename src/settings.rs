//! Drill settings
//!
//! The page collects the auto-advance interval in whole seconds from a
//! bounded number input; this module turns that into a validated interval.

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::drill::{Category, validate_interval};
use crate::error::{DrillError, Result};

/// Interval shown in the input before the user changes it
pub const DEFAULT_INTERVAL_SECS: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Auto-advance interval in seconds, valid range 1..=60
    pub interval_secs: i64,
    /// Mode the drill opens in
    pub start_category: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            start_category: Category::Numbers.as_str().to_string(),
        }
    }
}

impl Settings {
    /// Validated interval in milliseconds
    pub fn interval_ms(&self) -> Result<u32> {
        interval_ms_from_secs(self.interval_secs)
    }

    /// Opening category; unknown names fall back to numbers
    pub fn start_category(&self) -> Category {
        Category::from_str(&self.start_category).unwrap_or_else(|| {
            log::warn!("Unknown category {:?}, using numbers", self.start_category);
            Category::Numbers
        })
    }

    /// Parse settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Seconds -> milliseconds, accepting 1..=60 seconds inclusive
pub fn interval_ms_from_secs(secs: i64) -> Result<u32> {
    let interval_ms = secs
        .checked_mul(1000)
        .ok_or(DrillError::IntervalOutOfRange { interval_ms: i64::MAX })?;
    validate_interval(interval_ms)
}

/// Parse the raw text of the interval input; non-numbers fail the same bounds check
pub fn parse_interval_input(raw: &str) -> Result<u32> {
    match raw.trim().parse::<i64>() {
        Ok(secs) => interval_ms_from_secs(secs),
        Err(_) => Err(DrillError::IntervalOutOfRange { interval_ms: 0 }),
    }
}

/// Accepted range in whole seconds, for labelling the input
pub fn interval_bounds_secs() -> (u32, u32) {
    (MIN_INTERVAL_MS / 1000, MAX_INTERVAL_MS / 1000)
}
