//! Runner-facing primitives: logging, outputs and failure reporting

use serde_json::Value;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::debug;

use super::command::WorkflowCommand;
use crate::config::{is_debug_enabled, GITHUB_OUTPUT};
use crate::env::Environment;
use crate::error::Result;
use crate::outputs::{append_file_command, prepare_key_value_message, to_command_value};

/// The operations an action handler needs from the Actions runner
pub trait Runner: Send + Sync {
    /// Environment the runner was started with
    fn environment(&self) -> &dyn Environment;

    /// Whether step debug logging is on
    fn is_debug(&self) -> bool {
        is_debug_enabled(self.environment())
    }

    /// Emit a debug message
    fn debug(&self, message: &str);

    /// Publish an output of the current step
    fn set_output(&self, name: &str, value: &Value) -> Result<()>;

    /// Report the step as failed
    fn set_failed(&self, message: &str);
}

/// Runner backed by workflow commands and the `GITHUB_OUTPUT` file
pub struct GithubRunner<E> {
    env: E,
    sink: Mutex<Box<dyn Write + Send>>,
    failed: AtomicBool,
}

impl<E: Environment> GithubRunner<E> {
    /// Create a runner writing commands to stdout
    pub fn new(env: E) -> Self {
        Self::with_sink(env, Box::new(io::stdout()))
    }

    /// Create a runner writing commands to `sink`
    pub fn with_sink(env: E, sink: Box<dyn Write + Send>) -> Self {
        Self {
            env,
            sink: Mutex::new(sink),
            failed: AtomicBool::new(false),
        }
    }

    /// Whether `set_failed` was called
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Process exit code matching the step outcome
    pub fn exit_code(&self) -> ExitCode {
        if self.has_failed() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Write a plain line to the log
    pub fn info(&self, message: &str) {
        self.write_line(message);
    }

    /// Emit a warning annotation
    pub fn warning(&self, message: &str) {
        self.issue(WorkflowCommand::new("warning", message));
    }

    /// Emit an error annotation
    pub fn error(&self, message: &str) {
        self.issue(WorkflowCommand::new("error", message));
    }

    fn issue(&self, command: WorkflowCommand) {
        self.write_line(&command.to_string());
    }

    fn write_line(&self, line: &str) {
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        // The runner log is best effort; a closed stdout must not abort the step.
        if writeln!(sink, "{}", line).is_ok() {
            let _ = sink.flush();
        }
    }
}

impl<E: Environment> Runner for GithubRunner<E> {
    fn environment(&self) -> &dyn Environment {
        &self.env
    }

    fn debug(&self, message: &str) {
        self.issue(WorkflowCommand::new("debug", message));
    }

    fn set_output(&self, name: &str, value: &Value) -> Result<()> {
        match self.env.var(GITHUB_OUTPUT).filter(|p| !p.is_empty()) {
            Some(path) => {
                debug!("Appending output {:?} to {}", name, path);
                let message = prepare_key_value_message(name, value)?;
                append_file_command(Path::new(&path), &message)
            }
            None => {
                debug!("GITHUB_OUTPUT is not set, falling back to set-output command");
                self.write_line("");
                self.issue(
                    WorkflowCommand::new("set-output", to_command_value(value))
                        .with_property("name", name),
                );
                Ok(())
            }
        }
    }

    fn set_failed(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        self.error(message);
    }
}
