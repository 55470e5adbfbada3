//! Background tasks module
//! 
//! This module contains the periodic task that advances a running countdown.

pub mod ticker;

// Re-export main types
pub use ticker::TickRegistration;
