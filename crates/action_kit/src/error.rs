//! Error types for action helpers

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no output file path provided as argument nor through the GITHUB_OUTPUT environment variable")]
    MissingOutputPath,

    #[error("Input required and not supplied: {0}")]
    InputRequired(String),

    #[error("Unexpected input: name should not contain the delimiter \"{0}\"")]
    DelimiterInName(String),

    #[error("Unexpected input: value should not contain the delimiter \"{0}\"")]
    DelimiterInValue(String),

    #[error("Invalid handler outputs: expected a map of output names, got {0}")]
    InvalidOutputs(String),

    #[error("No async runtime available to run the action handler")]
    NoRuntime,

    #[error("Action handler panicked: {0}")]
    HandlerPanicked(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActionError>;
