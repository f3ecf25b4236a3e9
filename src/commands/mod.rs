//! Command wiring for prompt-batch.
//!
//! `dispatch` reads ambient settings, resolves the project layout, selects
//! the configs to process and builds the backends for the chosen mode. The
//! per-config pipeline lives in the `process` module.

mod process;

use process::{Mode, run_batch};

use crate::aws::AwsSession;
use crate::cli::Cli;
use crate::context::ProjectLayout;
use crate::error::Result;
use crate::exit_codes;
use crate::inference::BedrockInference;
use crate::settings::Settings;
use crate::storage::S3Store;
use std::path::{Path, PathBuf};

/// How a run ended without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every selected config was processed.
    Completed { processed: usize },
    /// Nothing to do: no configs were found.
    NoConfigs,
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Completed { .. } => exit_codes::SUCCESS,
            Outcome::NoConfigs => exit_codes::NO_CONFIGS,
        }
    }
}

/// Run the CLI against the process environment.
pub fn dispatch(cli: Cli) -> Result<Outcome> {
    let settings = Settings::from_env()?;
    let layout = ProjectLayout::resolve(cli.root.as_deref())?;
    execute(&cli, &layout, &settings)
}

/// Run the CLI with explicit settings and layout.
///
/// AWS clients are only created in live mode, after at least one config
/// has been found.
pub fn execute(cli: &Cli, layout: &ProjectLayout, settings: &Settings) -> Result<Outcome> {
    let configs = select_configs(layout, cli.config.as_deref())?;

    if configs.is_empty() {
        println!("No prompt configs found. Add .json files under prompts/ and try again.");
        return Ok(Outcome::NoConfigs);
    }

    let processed = if cli.dry_run {
        run_batch(&configs, layout, settings, &Mode::DryRun)?
    } else {
        let session = AwsSession::connect(settings)?;
        let inference = BedrockInference::new(&session, settings.model_id.clone());
        let store = S3Store::new(&session);
        let mode = Mode::Live {
            inference: &inference,
            store: &store,
        };
        run_batch(&configs, layout, settings, &mode)?
    };

    Ok(Outcome::Completed { processed })
}

/// The explicit `--config` file, or every config under `prompts/`.
fn select_configs(layout: &ProjectLayout, config: Option<&Path>) -> Result<Vec<PathBuf>> {
    match config {
        Some(path) => Ok(vec![layout.config_path(path)]),
        None => layout.list_prompt_configs(),
    }
}
