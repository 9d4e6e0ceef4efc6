//! Writer side of the outputs file

use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

use crate::error::{ActionError, Result};

/// Prefix of generated heredoc delimiters
pub const DELIMITER_PREFIX: &str = "ghadelimiter_";

/// Fresh delimiter for one record
pub fn new_delimiter() -> String {
    format!("{}{}", DELIMITER_PREFIX, Uuid::new_v4())
}

/// Text form of an output value
///
/// `null` is empty, strings pass through, everything else is JSON text.
pub fn to_command_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format one heredoc record, without its trailing newline
pub fn prepare_key_value_message(key: &str, value: &Value) -> Result<String> {
    prepare_with_delimiter(key, value, &new_delimiter())
}

fn prepare_with_delimiter(key: &str, value: &Value, delimiter: &str) -> Result<String> {
    let converted = to_command_value(value);

    if key.contains(delimiter) {
        return Err(ActionError::DelimiterInName(delimiter.to_string()));
    }
    if converted.contains(delimiter) {
        return Err(ActionError::DelimiterInValue(delimiter.to_string()));
    }

    Ok(format!(
        "{}<<{}\n{}\n{}",
        key, delimiter, converted, delimiter
    ))
}

/// Append `message` and a newline to the file at `path`, creating it if needed
pub fn append_file_command(path: &Path, message: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", message)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_command_value() {
        assert_eq!(to_command_value(&Value::Null), "");
        assert_eq!(to_command_value(&json!("  raw  ")), "  raw  ");
        assert_eq!(to_command_value(&json!(5)), "5");
        assert_eq!(to_command_value(&json!(false)), "false");
        assert_eq!(
            to_command_value(&json!(["one", 2, false, null])),
            r#"["one",2,false,null]"#
        );
    }

    #[test]
    fn test_new_delimiter_is_unique() {
        let a = new_delimiter();
        let b = new_delimiter();
        assert!(a.starts_with(DELIMITER_PREFIX));
        assert_ne!(a, b);
    }

    #[test]
    fn test_prepare_message() {
        let message = prepare_with_delimiter("key", &json!("value"), "EOF").unwrap();
        assert_eq!(message, "key<<EOF\nvalue\nEOF");
    }

    #[test]
    fn test_prepare_rejects_delimiter() {
        let err = prepare_with_delimiter("EOF-key", &json!("v"), "EOF").unwrap_err();
        assert!(matches!(err, ActionError::DelimiterInName(_)));

        let err = prepare_with_delimiter("key", &json!("a\nEOF\nb"), "EOF").unwrap_err();
        assert!(matches!(err, ActionError::DelimiterInValue(_)));
    }

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output");

        append_file_command(&path, "first").unwrap();
        append_file_command(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }
}
