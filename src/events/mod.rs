//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: posts API interactions
//! - Terminal events: user input and ticks

pub mod network;
pub mod terminal;
