use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;

use postop_guardian::config::{self, ConfigError, EngineConfig};
use postop_guardian::request::{EvaluationRequest, RequestError};
use postop_guardian::risk::DefaultRiskEngine;

#[derive(Parser, Debug)]
#[command(
    name = "postop-guardian",
    version = config::APP_VERSION,
    about = "Evaluate a post-operative reading and print the verdict as JSON"
)]
struct Cli {
    /// Request JSON; stdin when omitted
    input: Option<PathBuf>,

    /// Engine config file (overrides POSTOP_GUARDIAN_CONFIG)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error("Failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    postop_guardian::init_tracing();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Evaluation failed");
            eprintln!("postop-guardian: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config::config_path);
    let engine_config = EngineConfig::load_or_default(&config_path)?;
    tracing::debug!(
        version = config::APP_VERSION,
        config = %config_path.display(),
        "Engine configured"
    );

    let json = read_input(cli.input.as_deref())?;
    let request = EvaluationRequest::from_json(&json)?;

    let engine = DefaultRiskEngine::new(engine_config);
    let response = request.evaluate(&engine, chrono::Local::now().naive_local());

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, RequestError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| RequestError::Read(path.display().to_string(), e.to_string())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| RequestError::Read("stdin".to_string(), e.to_string()))?;
            Ok(buf)
        }
    }
}
