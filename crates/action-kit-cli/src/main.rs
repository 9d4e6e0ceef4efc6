//! action-kit CLI - inputs and outputs helpers for GitHub Actions shell steps
//!
//! Usage:
//!     action-kit [OPTIONS] <COMMAND>
//!
//! Environment Variables:
//!     INPUT_<NAME>: Action inputs, read by `inputs`
//!     GITHUB_OUTPUT: Outputs file, read by `outputs` and appended to by `set-output`
//!     RUNNER_DEBUG: Set to 1 to emit debug workflow commands
//!     RUST_LOG: Log filter for diagnostics written to stderr

use action_kit::{
    get_inputs, parse_outputs, render_error_chain, run_action, GithubRunner, ProcessEnv,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

/// Helpers for GitHub Actions steps
#[derive(Parser, Debug)]
#[command(name = "action-kit")]
#[command(about = "Read inputs and manage outputs of a GitHub Actions step")]
#[command(after_help = r#"Examples:
    # Print two inputs as JSON (absent inputs are null)
    action-kit inputs token "working directory"

    # Decode the current step's outputs file
    action-kit outputs

    # Decode a specific outputs file
    action-kit outputs --file ./output.txt

    # Publish an output, as a string or as JSON
    action-kit set-output version 1.2.3
    action-kit set-output --json matrix '{"os": ["linux", "macos"]}'
"#)]
struct Cli {
    /// Log diagnostics at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the given inputs as a JSON object
    Inputs {
        /// Input names, as declared in action.yml
        names: Vec<String>,
    },

    /// Decode the outputs file and print it as a JSON object
    Outputs {
        /// Outputs file path
        #[arg(short, long, env = "GITHUB_OUTPUT")]
        file: Option<PathBuf>,
    },

    /// Set an output of the current step
    SetOutput {
        /// Output name
        name: String,

        /// Output value
        value: String,

        /// Parse VALUE as JSON instead of taking it as a string
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });

    // stdout carries workflow commands and JSON, diagnostics go to stderr.
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn print_inputs(names: &[String]) -> Result<()> {
    let inputs = get_inputs(names);
    let object: Map<String, Value> = names
        .iter()
        .map(|name| {
            let value = inputs.get(name).map(Value::from).unwrap_or(Value::Null);
            (name.clone(), value)
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&object)?);
    Ok(())
}

async fn print_outputs(file: Option<PathBuf>) -> Result<()> {
    let outputs = parse_outputs(file.as_deref())
        .await
        .context("Failed to read outputs")?;
    debug!("Decoded {} outputs", outputs.len());

    let sorted: BTreeMap<_, _> = outputs.into_iter().collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);
    Ok(())
}

async fn set_output(name: String, value: String, json: bool) -> ExitCode {
    let runner = GithubRunner::new(ProcessEnv);

    run_action(&runner, || async move {
        let value = if json {
            serde_json::from_str(&value)
                .with_context(|| format!("Value of output {:?} is not valid JSON", name))?
        } else {
            Value::String(value)
        };

        let mut outputs = Map::new();
        outputs.insert(name, value);
        Ok::<_, anyhow::Error>(outputs)
    })
    .await;

    runner.exit_code()
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Command::Inputs { names } => print_inputs(&names),
        Command::Outputs { file } => print_outputs(file).await,
        Command::SetOutput { name, value, json } => return set_output(name, value, json).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", render_error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
