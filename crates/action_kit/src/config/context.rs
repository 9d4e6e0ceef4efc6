//! Execution context of the current workflow run

use serde::Serialize;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::warn;

use super::vars::*;
use crate::env::Environment;

const DEFAULT_SERVER_URL: &str = "https://github.com";
const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";

/// Workflow run information exposed by the runner through `GITHUB_*` variables
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    /// Webhook payload of the triggering event
    pub payload: Value,
    pub event_name: String,
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub workflow: String,
    pub action: String,
    pub actor: String,
    pub job: String,
    pub run_number: u64,
    pub run_attempt: u64,
    pub run_id: u64,
    pub repository: Option<String>,
    pub server_url: String,
    pub api_url: String,
    pub graphql_url: String,
}

impl Context {
    /// Build the context from the given environment
    ///
    /// Missing variables become empty strings or zero; the URLs fall back to
    /// github.com. The payload is read from `GITHUB_EVENT_PATH` when that file
    /// exists and holds valid JSON, otherwise it is an empty object.
    pub fn from_env(env: &dyn Environment) -> Self {
        let text = |key: &str| env.var(key).unwrap_or_default();
        let number = |key: &str| {
            env.var(key)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0)
        };
        let url = |key: &str, default: &str| {
            env.var(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            payload: env
                .var(GITHUB_EVENT_PATH)
                .map(|path| load_payload(Path::new(&path)))
                .unwrap_or_else(empty_payload),
            event_name: text(GITHUB_EVENT_NAME),
            sha: text(GITHUB_SHA),
            git_ref: text(GITHUB_REF),
            workflow: text(GITHUB_WORKFLOW),
            action: text(GITHUB_ACTION),
            actor: text(GITHUB_ACTOR),
            job: text(GITHUB_JOB),
            run_number: number(GITHUB_RUN_NUMBER),
            run_attempt: number(GITHUB_RUN_ATTEMPT),
            run_id: number(GITHUB_RUN_ID),
            repository: env.var(GITHUB_REPOSITORY).filter(|v| !v.is_empty()),
            server_url: url(GITHUB_SERVER_URL, DEFAULT_SERVER_URL),
            api_url: url(GITHUB_API_URL, DEFAULT_API_URL),
            graphql_url: url(GITHUB_GRAPHQL_URL, DEFAULT_GRAPHQL_URL),
        }
    }
}

fn empty_payload() -> Value {
    Value::Object(Map::new())
}

fn load_payload(path: &Path) -> Value {
    if !path.exists() {
        warn!("GITHUB_EVENT_PATH {} does not exist", path.display());
        return empty_payload();
    }

    match std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_json::from_str(&text).map_err(anyhow::Error::from))
    {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Failed to load event payload from {}: {}", path.display(), e);
            empty_payload()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_context_defaults() {
        let context = Context::from_env(&MapEnv::new());
        assert_eq!(context.payload, json!({}));
        assert_eq!(context.run_number, 0);
        assert_eq!(context.server_url, "https://github.com");
        assert_eq!(context.api_url, "https://api.github.com");
        assert_eq!(context.graphql_url, "https://api.github.com/graphql");
        assert_eq!(context.repository, None);
    }

    #[test]
    fn test_context_from_env() {
        let env = MapEnv::new()
            .with_var(GITHUB_EVENT_NAME, "push")
            .with_var(GITHUB_REF, "refs/heads/main")
            .with_var(GITHUB_RUN_NUMBER, "42")
            .with_var(GITHUB_RUN_ID, "not-a-number")
            .with_var(GITHUB_REPOSITORY, "octo/hello")
            .with_var(GITHUB_SERVER_URL, "https://ghe.example.com");
        let context = Context::from_env(&env);

        assert_eq!(context.event_name, "push");
        assert_eq!(context.git_ref, "refs/heads/main");
        assert_eq!(context.run_number, 42);
        assert_eq!(context.run_id, 0);
        assert_eq!(context.repository.as_deref(), Some("octo/hello"));
        assert_eq!(context.server_url, "https://ghe.example.com");
    }

    #[test]
    fn test_context_loads_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"action": "opened", "number": 7}}"#).unwrap();
        let env = MapEnv::new().with_var(GITHUB_EVENT_PATH, file.path().to_str().unwrap());

        let context = Context::from_env(&env);
        assert_eq!(context.payload, json!({"action": "opened", "number": 7}));
    }

    #[test]
    fn test_context_ignores_bad_payload() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let env = MapEnv::new().with_var(GITHUB_EVENT_PATH, file.path().to_str().unwrap());
        assert_eq!(Context::from_env(&env).payload, json!({}));

        let env = MapEnv::new().with_var(GITHUB_EVENT_PATH, "/definitely/not/here.json");
        assert_eq!(Context::from_env(&env).payload, json!({}));
    }

    #[test]
    fn test_context_serializes_ref() {
        let env = MapEnv::new().with_var(GITHUB_REF, "refs/tags/v1");
        let value = serde_json::to_value(Context::from_env(&env)).unwrap();
        assert_eq!(value["ref"], "refs/tags/v1");
        assert_eq!(value["eventName"], "");
    }
}
