//! Runner collaborator module
//!
//! This module provides:
//! - `command`: Workflow command formatting and escaping
//! - `github`: The `Runner` trait and its workflow-command implementation

mod command;
mod github;

pub use command::{escape_data, escape_property, WorkflowCommand};
pub use github::{GithubRunner, Runner};

#[cfg(test)]
pub(crate) use github::tests::SharedBuffer;
