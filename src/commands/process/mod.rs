//! Per-config processing pipeline.
//!
//! # Steps
//!
//! 1. Load and validate the prompt config
//! 2. Resolve and read the template from `prompt_templates/`
//! 3. Render the template with the config's variables
//! 4. Dry run: wrap the rendered prompt in a banner
//! 5. Live: send the rendered prompt to the inference client
//! 6. Write the artifact under `outputs/`
//! 7. Live: upload the artifact to `<env>/outputs/<output_file>`
//!
//! The first error at any step aborts the whole batch.

use crate::context::ProjectLayout;
use crate::error::{PromptError, Result};
use crate::fs::write_output;
use crate::inference::InferenceClient;
use crate::prompt_config::{PromptConfig, load_json};
use crate::settings::Settings;
use crate::storage::{ObjectStore, object_key};
use crate::template::render_template;
use std::path::{Path, PathBuf};
use tracing::debug;


/// Header written above the rendered prompt in dry-run artifacts.
pub const DRY_RUN_BANNER: &str =
    "DRY RUN MODE\n\nThis is the rendered prompt that would be sent to Bedrock:\n\n";

/// Processing mode, chosen once per invocation.
///
/// Only `Live` carries backends, so a dry run cannot reach the inference
/// endpoint or the object store.
pub enum Mode<'a> {
    DryRun,
    Live {
        inference: &'a dyn InferenceClient,
        store: &'a dyn ObjectStore,
    },
}

/// Result of processing one config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedConfig {
    /// Absolute path of the local artifact.
    pub output_path: PathBuf,
    /// Remote location, in live mode.
    pub upload: Option<UploadTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    pub bucket: String,
    pub key: String,
}

/// Process every config in order, stopping at the first failure.
///
/// Returns the number of configs processed.
pub fn run_batch(
    configs: &[PathBuf],
    layout: &ProjectLayout,
    settings: &Settings,
    mode: &Mode<'_>,
) -> Result<usize> {
    println!("Found {} config file(s).", configs.len());

    for config_path in configs {
        println!("\nProcessing: {}", config_path.display());

        let processed = process_one_config(config_path, layout, settings, mode)?;

        if let Some(upload) = &processed.upload {
            println!("Uploaded to s3://{}/{}", upload.bucket, upload.key);
        }
        println!("Saved output: {}", processed.output_path.display());
    }

    println!("\nDone.");
    Ok(configs.len())
}

/// Process a single prompt config and return where its output went.
pub fn process_one_config(
    config_path: &Path,
    layout: &ProjectLayout,
    settings: &Settings,
    mode: &Mode<'_>,
) -> Result<ProcessedConfig> {
    let config = PromptConfig::from_map(load_json(config_path)?, config_path)?;
    let template = load_template(layout, &config, config_path)?;
    let rendered = render_template(&template, &config.variables)?;
    debug!(
        config = %config_path.display(),
        chars = rendered.len(),
        "rendered prompt"
    );

    let result_text = match mode {
        Mode::DryRun => format!("{}{}", DRY_RUN_BANNER, rendered),
        Mode::Live { inference, .. } => inference.generate(&rendered, config.max_tokens)?,
    };

    let output_path = write_output(&layout.outputs_dir, &config.output_file, &result_text)?;

    let upload = match mode {
        Mode::DryRun => None,
        Mode::Live { store, .. } => {
            let bucket = settings.bucket()?;
            let key = object_key(settings.deploy_env, &config.output_file);

            store.put_file(&output_path, bucket, &key)?;

            Some(UploadTarget {
                bucket: bucket.to_string(),
                key,
            })
        }
    };

    Ok(ProcessedConfig {
        output_path,
        upload,
    })
}

fn load_template(layout: &ProjectLayout, config: &PromptConfig, config_path: &Path) -> Result<String> {
    let template_path = layout.template_path(&config.template_file);

    if !template_path.is_file() {
        let config_name = config_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| config_path.display().to_string());
        return Err(PromptError::NotFoundError(format!(
            "Template not found: {}. Check template_file in {}.",
            template_path.display(),
            config_name
        )));
    }

    std::fs::read_to_string(&template_path).map_err(|e| {
        PromptError::IoError(format!(
            "failed to read template '{}': {}",
            template_path.display(),
            e
        ))
    })
}
