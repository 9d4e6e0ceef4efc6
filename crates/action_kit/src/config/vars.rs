//! Environment variables set by the Actions runner

use crate::env::Environment;

/// Prefix of every action input variable
pub const INPUT_PREFIX: &str = "INPUT_";

/// Path of the outputs file
pub const GITHUB_OUTPUT: &str = "GITHUB_OUTPUT";

/// Set to `1` when step debug logging is enabled
pub const RUNNER_DEBUG: &str = "RUNNER_DEBUG";

pub const GITHUB_EVENT_NAME: &str = "GITHUB_EVENT_NAME";
pub const GITHUB_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const GITHUB_SHA: &str = "GITHUB_SHA";
pub const GITHUB_REF: &str = "GITHUB_REF";
pub const GITHUB_WORKFLOW: &str = "GITHUB_WORKFLOW";
pub const GITHUB_ACTION: &str = "GITHUB_ACTION";
pub const GITHUB_ACTOR: &str = "GITHUB_ACTOR";
pub const GITHUB_JOB: &str = "GITHUB_JOB";
pub const GITHUB_RUN_NUMBER: &str = "GITHUB_RUN_NUMBER";
pub const GITHUB_RUN_ATTEMPT: &str = "GITHUB_RUN_ATTEMPT";
pub const GITHUB_RUN_ID: &str = "GITHUB_RUN_ID";
pub const GITHUB_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const GITHUB_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const GITHUB_GRAPHQL_URL: &str = "GITHUB_GRAPHQL_URL";

/// Whether the runner asked for debug output
pub fn is_debug_enabled(env: &dyn Environment) -> bool {
    env.var(RUNNER_DEBUG).as_deref() == Some("1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;

    #[test]
    fn test_debug_only_for_one() {
        assert!(is_debug_enabled(&MapEnv::new().with_var(RUNNER_DEBUG, "1")));
        assert!(!is_debug_enabled(&MapEnv::new().with_var(RUNNER_DEBUG, "true")));
        assert!(!is_debug_enabled(&MapEnv::new()));
    }
}
