//! Action handler wrapper
//!
//! Takes care of the boilerplate around an action's entry point: debug dumps
//! of the environment and context, forwarding the handler's outputs to the
//! runner, and turning any error into a failed step.

use futures::FutureExt;
use serde::Serialize;
use serde_json::Value;
use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::Context;
use crate::env::ProcessEnv;
use crate::error::{ActionError, Result};
use crate::runner::{GithubRunner, Runner};

/// Run `handler` as the action's entry point, without waiting for it
///
/// The handler is spawned on the current tokio runtime and its outcome is
/// only visible through the runner: outputs are written with `set_output`,
/// errors are reported with `set_failed`. Nothing is returned or propagated.
///
/// The runtime must outlive the handler; a `#[tokio::main]` that returns right
/// after this call drops the task. Use [`run_action`] to wait for completion.
///
/// Debug output is enabled by setting `RUNNER_DEBUG=1`, which the runner does
/// when step debug logging is turned on.
pub fn run_action_handler<F, Fut, O, E>(handler: F)
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = std::result::Result<O, E>> + Send + 'static,
    O: Serialize + Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    let runner = Arc::new(GithubRunner::new(ProcessEnv));
    let _ = spawn_action_handler(runner, handler);
}

/// Spawn `handler` on the current runtime and return the task
///
/// Backs [`run_action_handler`]; exposed so tests can await completion.
/// Returns `None` after reporting the failure when no runtime is running.
#[doc(hidden)]
pub fn spawn_action_handler<R, F, Fut, O, E>(runner: Arc<R>, handler: F) -> Option<JoinHandle<()>>
where
    R: Runner + 'static,
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = std::result::Result<O, E>> + Send + 'static,
    O: Serialize + Send + 'static,
    E: Into<anyhow::Error> + Send + 'static,
{
    match Handle::try_current() {
        Ok(handle) => Some(handle.spawn(async move { run_action(&*runner, handler).await })),
        Err(_) => {
            runner.set_failed(&render_error_chain(&ActionError::NoRuntime.into()));
            None
        }
    }
}

/// Run `handler` to completion against `runner`
///
/// Same contract as [`run_action_handler`], but awaitable. Errors never
/// escape: they end up in exactly one `set_failed` call.
pub async fn run_action<R, F, Fut, O, E>(runner: &R, handler: F)
where
    R: Runner + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<O, E>>,
    O: Serialize,
    E: Into<anyhow::Error>,
{
    if let Err(err) = try_run_action(runner, handler).await {
        runner.set_failed(&render_error_chain(&err));
    }
}

async fn try_run_action<R, F, Fut, O, E>(runner: &R, handler: F) -> anyhow::Result<()>
where
    R: Runner + ?Sized,
    F: FnOnce() -> Fut,
    Fut: Future<Output = std::result::Result<O, E>>,
    O: Serialize,
    E: Into<anyhow::Error>,
{
    if runner.is_debug() {
        let env = serde_json::to_string_pretty(&runner.environment().vars())?;
        runner.debug(&format!("received env: {}", env));
        let context = serde_json::to_string_pretty(&Context::from_env(runner.environment()))?;
        runner.debug(&format!("received context: {}", context));
    }

    let future = panic::catch_unwind(AssertUnwindSafe(handler))
        .map_err(|payload| ActionError::HandlerPanicked(panic_message(payload.as_ref())))?;
    let result = AssertUnwindSafe(future)
        .catch_unwind()
        .await
        .map_err(|payload| ActionError::HandlerPanicked(panic_message(payload.as_ref())))?;

    let outputs = match result {
        Ok(outputs) => outputs,
        Err(e) => return Err(e.into()),
    };
    set_outputs(runner, &outputs)?;
    Ok(())
}

/// Forward every entry of `outputs` to the runner, in order
fn set_outputs<R, O>(runner: &R, outputs: &O) -> Result<()>
where
    R: Runner + ?Sized,
    O: Serialize,
{
    let map = match serde_json::to_value(outputs)? {
        Value::Null => return Ok(()),
        Value::Object(map) => map,
        other => return Err(ActionError::InvalidOutputs(json_kind(&other).to_string())),
    };

    for (key, value) in &map {
        if runner.is_debug() {
            runner.debug(&format!("setting output {}={}", key, value));
        }
        runner.set_output(key, value)?;
    }
    Ok(())
}

/// Render an error with its whole cause chain, outermost first
pub fn render_error_chain(err: &anyhow::Error) -> String {
    let mut rendered = err.to_string();
    for cause in err.chain().skip(1) {
        rendered.push_str("\ncaused by: ");
        rendered.push_str(&cause.to_string());
    }
    rendered
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
