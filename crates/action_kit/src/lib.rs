//! action_kit: helpers for writing GitHub Actions in Rust
//!
//! This library provides:
//! - Input reading from `INPUT_*` variables, with empty values treated as absent
//! - Decoding of the heredoc records in the `GITHUB_OUTPUT` file
//! - A handler wrapper that logs in debug mode, forwards outputs and reports failures
//!
//! # Example
//!
//! ```no_run
//! use action_kit::{get_inputs, run_action, GithubRunner, ProcessEnv};
//! use std::collections::HashMap;
//!
//! #[tokio::main]
//! async fn main() -> std::process::ExitCode {
//!     let runner = GithubRunner::new(ProcessEnv);
//!     run_action(&runner, || async {
//!         let inputs = get_inputs(["who to greet"]);
//!         let who = inputs.get("who to greet").unwrap_or("world");
//!
//!         let mut outputs = HashMap::new();
//!         outputs.insert("greeting", format!("Hello, {}!", who));
//!         Ok::<_, anyhow::Error>(outputs)
//!     })
//!     .await;
//!     runner.exit_code()
//! }
//! ```

// Core modules
pub mod env;
pub mod error;

// Configuration module
pub mod config;

// Core functionality
pub mod actions;
pub mod input;
pub mod outputs;
pub mod runner;

// Re-export commonly used types and functions
pub use error::{ActionError, Result};

pub use env::{Environment, MapEnv, ProcessEnv};

pub use config::{is_debug_enabled, Context};

pub use input::{get_input, get_input_from, get_inputs, get_inputs_from, input_env_key, Input, Inputs};

pub use outputs::{decode_outputs, parse_outputs, parse_outputs_from};

pub use runner::{GithubRunner, Runner, WorkflowCommand};

pub use actions::{render_error_chain, run_action, run_action_handler, spawn_action_handler};
