//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: exercise backend interactions
//! - Terminal events: user input and terminal interactions
//! - The request-render handler driving one generate cycle

pub mod generate;
pub mod network;
pub mod terminal;
