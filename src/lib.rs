//! Countdown Timer - an interactive countdown with start, pause and reset
//! 
//! This library provides the timer controller that owns the countdown state
//! and its periodic tick, plus the console presentation layer used by the
//! `countdown-timer` binary.

pub mod config;
pub mod state;
pub mod console;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{TimerController, TimerSnapshot, Transition};
pub use console::run_console;
pub use utils::signals::shutdown_signal;
