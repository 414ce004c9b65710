//! Ref Drill - randomized basketball officiating drills
//!
//! Core modules:
//! - `drill`: Seeded prompt generation, directions, replay timer and session state
//! - `settings`: Timer interval configuration and validation
//! - `error`: Error type for the validated boundaries

pub mod drill;
pub mod error;
pub mod settings;

pub use error::{DrillError, Result};
pub use settings::Settings;

/// Drill configuration constants
pub mod consts {
    /// Shortest accepted auto-advance interval (ms)
    pub const MIN_INTERVAL_MS: u32 = 1_000;
    /// Longest accepted auto-advance interval (ms)
    pub const MAX_INTERVAL_MS: u32 = 60_000;

    /// Chance of rolling "00" instead of a plain number
    pub const DOUBLE_ZERO_CHANCE: f64 = 0.01;
    /// Shot-clock numbers are drawn from [0, NUMBER_RANGE)
    pub const NUMBER_RANGE: u32 = 100;
    /// Highest jersey number (lowest is 1)
    pub const MAX_PLAYER_NUMBER: u32 = 99;
}
