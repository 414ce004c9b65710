//! Auto-advance timer
//!
//! Time is passed in as milliseconds so the same state machine runs against
//! `Date.now()` in the browser, the wall clock natively, and fake time in tests.

use serde::Serialize;

use crate::consts::{MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::error::{DrillError, Result};

/// Identifies one Running period; ticks carrying an older handle are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TickHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimerState {
    Stopped,
    Running {
        interval_ms: u32,
        /// Time the next interval tick is due
        next_due_ms: u64,
        handle: TickHandle,
    },
}

#[derive(Debug, Clone)]
pub struct ReplayTimer {
    state: TimerState,
    next_handle: u64,
}

impl Default for ReplayTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject intervals outside [MIN_INTERVAL_MS, MAX_INTERVAL_MS]
pub fn validate_interval(interval_ms: i64) -> Result<u32> {
    if interval_ms < MIN_INTERVAL_MS as i64 || interval_ms > MAX_INTERVAL_MS as i64 {
        return Err(DrillError::IntervalOutOfRange { interval_ms });
    }
    Ok(interval_ms as u32)
}

impl ReplayTimer {
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            next_handle: 1,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Handle of the current run, `None` while stopped
    pub fn handle(&self) -> Option<TickHandle> {
        match self.state {
            TimerState::Running { handle, .. } => Some(handle),
            TimerState::Stopped => None,
        }
    }

    pub fn interval_ms(&self) -> Option<u32> {
        match self.state {
            TimerState::Running { interval_ms, .. } => Some(interval_ms),
            TimerState::Stopped => None,
        }
    }

    /// Start ticking every `interval_ms`.
    ///
    /// Returns the new handle on a Stopped -> Running transition, `None` if
    /// already running. An out-of-range interval leaves the state untouched.
    /// The caller owns the immediate first generation.
    pub fn start(&mut self, interval_ms: i64, now_ms: u64) -> Result<Option<TickHandle>> {
        let interval_ms = validate_interval(interval_ms)?;
        if self.is_running() {
            return Ok(None);
        }

        let handle = TickHandle(self.next_handle);
        self.next_handle += 1;
        self.state = TimerState::Running {
            interval_ms,
            next_due_ms: now_ms + interval_ms as u64,
            handle,
        };
        Ok(Some(handle))
    }

    /// Returns true if a running timer was stopped
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = TimerState::Stopped;
        true
    }

    /// Count interval ticks due at `now_ms` and move past them
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let TimerState::Running {
            interval_ms,
            ref mut next_due_ms,
            ..
        } = self.state
        else {
            return 0;
        };

        let mut due = 0;
        while now_ms >= *next_due_ms {
            due += 1;
            *next_due_ms += interval_ms as u64;
        }
        due
    }

    /// Whether a tick scheduled under `handle` may still fire
    pub fn accepts(&self, handle: TickHandle) -> bool {
        self.handle() == Some(handle)
    }
}
