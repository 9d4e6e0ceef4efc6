//! Decoder for the outputs file
//!
//! Each output is stored as a heredoc record:
//!
//! ```text
//! <key><<<delimiter>
//! <value>
//! <delimiter>
//! ```
//!
//! The delimiter is generated per record, so it is read from the header line
//! and then matched against the closing line rather than assumed.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::config::GITHUB_OUTPUT;
use crate::env::{Environment, ProcessEnv};
use crate::error::{ActionError, Result};

lazy_static! {
    /// `<key><<<delimiter>\n`, key being the shortest run before the first `<<`
    static ref RECORD_HEADER: Regex =
        Regex::new(r"(?P<key>[^\n]+?)<<(?P<delimiter>[^\n]*)\n").unwrap();
}

/// Decode every well-formed record of `contents`
///
/// Later records overwrite earlier ones with the same key. A header whose
/// closing delimiter never shows up is skipped.
pub fn decode_outputs(contents: &str) -> HashMap<String, String> {
    let mut outputs = HashMap::new();
    let mut pos = 0;

    while let Some(header) = RECORD_HEADER.captures_at(contents, pos) {
        let (Some(whole), Some(key), Some(delimiter)) =
            (header.get(0), header.name("key"), header.name("delimiter"))
        else {
            break;
        };

        let body_start = whole.end();
        let closing = format!("\n{}\n", delimiter.as_str());

        // The value may be empty, in which case the closing line directly
        // follows the header and the leading newline is the header's own.
        let found = contents[body_start - 1..]
            .find(&closing)
            .map(|offset| body_start - 1 + offset);

        match found {
            Some(value_end) => {
                let value = if value_end < body_start {
                    ""
                } else {
                    &contents[body_start..value_end]
                };
                outputs.insert(key.as_str().to_string(), value.to_string());
                pos = value_end + closing.len();
            }
            None => {
                debug!(
                    "Skipping output record {:?}: closing delimiter not found",
                    key.as_str()
                );
                pos = body_start;
            }
        }
    }

    outputs
}

/// Path of the outputs file: `path` if given, else `GITHUB_OUTPUT`
///
/// Empty strings count as absent.
pub fn resolve_output_path(env: &dyn Environment, path: Option<&Path>) -> Result<PathBuf> {
    path.filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| {
            env.var(GITHUB_OUTPUT)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .ok_or(ActionError::MissingOutputPath)
}

/// Read and decode the outputs file
///
/// # Arguments
/// * `env` - Environment consulted for `GITHUB_OUTPUT` when `path` is `None`
/// * `path` - Explicit outputs file path
///
/// # Returns
/// The outputs as a map of strings, last value winning for repeated keys
pub async fn parse_outputs_from(
    env: &dyn Environment,
    path: Option<&Path>,
) -> Result<HashMap<String, String>> {
    let path = resolve_output_path(env, path)?;
    debug!("Reading outputs file {}", path.display());

    let contents = fs::read_to_string(&path).await?;
    Ok(decode_outputs(&contents))
}

/// Read and decode the outputs file, falling back to the process `GITHUB_OUTPUT`
pub async fn parse_outputs(path: Option<&Path>) -> Result<HashMap<String, String>> {
    parse_outputs_from(&ProcessEnv, path).await
}
