//! Drill errors
//!
//! The only validated input is the auto-advance interval; everything else
//! draws from fixed, non-empty tables and cannot fail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrillError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrillError {
    #[error("Please enter a valid interval between 1 and 60 seconds.")]
    IntervalOutOfRange { interval_ms: i64 },
}
