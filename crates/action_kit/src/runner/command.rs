//! Workflow commands, the `::name key=value::message` lines the runner reads from stdout

use std::fmt;

/// A single workflow command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowCommand {
    name: String,
    properties: Vec<(String, String)>,
    message: String,
}

impl WorkflowCommand {
    /// Create a command without properties
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            message: message.into(),
        }
    }

    /// Add a property; properties keep the order they were added in
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name)?;

        let mut first = true;
        for (key, value) in &self.properties {
            if value.is_empty() {
                continue;
            }
            f.write_str(if first { " " } else { "," })?;
            first = false;
            write!(f, "{}={}", key, escape_property(value))?;
        }

        write!(f, "::{}", escape_data(&self.message))
    }
}

/// Escape a command message
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value
pub fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}
