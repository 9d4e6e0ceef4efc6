//! Action entry point module
//!
//! This module provides:
//! - `handler`: Wrapping of an action handler with logging and failure reporting

mod handler;

pub use handler::{render_error_chain, run_action, run_action_handler, spawn_action_handler};
