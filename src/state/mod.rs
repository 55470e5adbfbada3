//! State management module
//! 
//! This module contains the timer state machine, its controller and the
//! snapshots handed to the presentation layer.

pub mod timer_state;
pub mod snapshot;
pub mod controller;

// Re-export main types
pub use timer_state::{format_remaining, parse_duration, Rejection, TimerState};
pub use snapshot::{StatusReport, TimerSnapshot, Transition};
pub use controller::{TimerController, DEFAULT_TICK_PERIOD};
