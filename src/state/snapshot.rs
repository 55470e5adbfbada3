//! Read-only views of the timer handed to the presentation layer

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timer_state::{Rejection, TimerState};

/// Point-in-time copy of the timer, as rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub remaining_seconds: u64,
    /// `remaining_seconds` formatted as `MM:SS`
    pub display: String,
    pub configured_duration: Option<u64>,
    pub running: bool,
    pub paused: bool,
    /// Whether there is time left to count down
    pub can_start: bool,
}

impl From<&TimerState> for TimerSnapshot {
    fn from(state: &TimerState) -> Self {
        Self {
            remaining_seconds: state.remaining(),
            display: state.display(),
            configured_duration: state.configured_duration(),
            running: state.is_running(),
            paused: state.is_paused(),
            can_start: state.can_start(),
        }
    }
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        Self::from(&TimerState::new())
    }
}

/// Result of submitting an intent to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied(TimerSnapshot),
    Ignored(Rejection),
}

impl Transition {
    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

/// Full status: timer snapshot plus session bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub timer: TimerSnapshot,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
    pub uptime: String,
}
