//! Configuration module for action_kit
//!
//! This module contains:
//! - `vars`: Names of the environment variables set by the Actions runner
//! - `context`: Execution context of the current workflow run

mod context;
mod vars;

pub use context::Context;
pub use vars::{
    is_debug_enabled, GITHUB_ACTION, GITHUB_ACTOR, GITHUB_API_URL, GITHUB_EVENT_NAME,
    GITHUB_EVENT_PATH, GITHUB_GRAPHQL_URL, GITHUB_JOB, GITHUB_OUTPUT, GITHUB_REF,
    GITHUB_REPOSITORY, GITHUB_RUN_ATTEMPT, GITHUB_RUN_ID, GITHUB_RUN_NUMBER, GITHUB_SERVER_URL,
    GITHUB_SHA, GITHUB_WORKFLOW, INPUT_PREFIX, RUNNER_DEBUG,
};
