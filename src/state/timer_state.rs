//! Timer state structure and its transitions
//!
//! `TimerState` is the pure state machine behind the controller. It knows
//! nothing about scheduling; the controller reconciles the tick registration
//! against [`TimerState::should_tick`] after every transition.

use serde::{Deserialize, Serialize};

/// Why an intent was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Duration input was empty, non-numeric or not positive
    InvalidDuration,
    /// Start requested with no time left
    NothingToCount,
    /// Pause requested while the countdown was not running
    NotRunning,
}

/// Countdown state: configured duration, remaining seconds and run flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    configured_duration: Option<u64>,
    remaining: u64,
    running: bool,
    paused: bool,
}

impl TimerState {
    /// Create a fresh state: no duration, nothing remaining, stopped
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configured_duration(&self) -> Option<u64> {
        self.configured_duration
    }

    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Start is only meaningful with time left on the clock
    pub fn can_start(&self) -> bool {
        self.remaining > 0
    }

    /// Whether a periodic tick registration should be live
    pub fn should_tick(&self) -> bool {
        self.running && !self.paused
    }

    /// Apply a raw user-entered duration
    pub fn set_duration(&mut self, raw: &str) -> Result<(), Rejection> {
        let seconds = parse_duration(raw).ok_or(Rejection::InvalidDuration)?;
        self.configured_duration = Some(seconds);
        self.remaining = seconds;
        self.running = false;
        self.paused = false;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), Rejection> {
        if !self.can_start() {
            return Err(Rejection::NothingToCount);
        }
        self.running = true;
        self.paused = false;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<(), Rejection> {
        if !self.running {
            return Err(Rejection::NotRunning);
        }
        self.paused = true;
        self.running = false;
        Ok(())
    }

    /// Restore the configured duration and stop; never rejected
    pub fn reset(&mut self) {
        self.running = false;
        self.paused = false;
        self.remaining = self.configured_duration.unwrap_or(0);
    }

    /// Count down one second.
    ///
    /// Frozen unless running. Reaching zero also clears `running`, so a
    /// finished countdown cannot be re-armed by `start` without a reset or a
    /// new duration.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
        }
    }

    /// Remaining time rendered as `MM:SS`
    pub fn display(&self) -> String {
        format_remaining(self.remaining)
    }
}

/// Parse a raw duration as a positive whole number of seconds
pub fn parse_duration(raw: &str) -> Option<u64> {
    let value: i64 = raw.trim().parse().ok()?;
    u64::try_from(value).ok().filter(|&seconds| seconds > 0)
}

/// Format seconds as zero-padded `MM:SS` without rolling minutes into hours
pub fn format_remaining(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
