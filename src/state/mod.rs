//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that holds the lesson input, result blocks and UI flags
//! - The `RenderTarget` seam written to by the request-render handler
//! - Navigation types and state error handling

mod error;
mod navigation;
mod results;

pub use error::StateError;
pub use navigation::Focus;
pub use results::{result_blocks, ExerciseCard, RenderTarget, ResultBlock, ERROR_PREFIX};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
