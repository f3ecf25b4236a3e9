//! prompt-batch: render prompt templates from JSON configs, optionally send
//! them to Amazon Bedrock, save the results locally and upload them to S3.
//!
//! This is the main entry point for the `prompt-batch` CLI. It loads `.env`,
//! sets up diagnostic logging, parses arguments, runs the batch, and maps the
//! result to an exit code.

mod aws;
mod cli;
mod commands;
mod context;
mod error;
mod exit_codes;
mod fs;
mod inference;
mod prompt_config;
mod settings;
mod storage;
mod template;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::error::Error as _;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // A missing .env is fine; the real environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(outcome) => ExitCode::from(outcome.exit_code() as u8),
        Err(err) => {
            eprintln!("Error: {}", err);

            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
