//! Project layout resolution for prompt-batch.
//!
//! Every run works against a project root containing three fixed folders:
//!
//! - `prompts/` - JSON prompt configs
//! - `prompt_templates/` - template files referenced by `template_file`
//! - `outputs/` - generated artifacts, named by `output_file`
//!
//! All paths held by [`ProjectLayout`] are absolute.

use crate::error::{PromptError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Config directory relative to the project root.
pub const PROMPTS_DIR: &str = "prompts";

/// Template directory relative to the project root.
pub const TEMPLATES_DIR: &str = "prompt_templates";

/// Output directory relative to the project root.
pub const OUTPUTS_DIR: &str = "outputs";

/// Resolved project paths.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    /// Absolute path to the project root.
    pub root: PathBuf,

    /// Absolute path to the prompt configs directory.
    pub prompts_dir: PathBuf,

    /// Absolute path to the templates directory.
    pub templates_dir: PathBuf,

    /// Absolute path to the outputs directory.
    pub outputs_dir: PathBuf,
}

impl ProjectLayout {
    /// Resolve the layout from an explicit root, or the current working
    /// directory when none is given.
    pub fn resolve(root: Option<&Path>) -> Result<Self> {
        let root = match root {
            Some(root) => root.to_path_buf(),
            None => env::current_dir().map_err(|e| {
                PromptError::IoError(format!("failed to get current working directory: {}", e))
            })?,
        };

        let root = fs::canonicalize(&root).map_err(|e| {
            PromptError::IoError(format!(
                "failed to resolve project root '{}': {}",
                root.display(),
                e
            ))
        })?;

        Ok(Self::from_root(root))
    }

    /// Build the layout under an already-absolute root.
    pub fn from_root<P: Into<PathBuf>>(root: P) -> Self {
        let root = root.into();
        Self {
            prompts_dir: root.join(PROMPTS_DIR),
            templates_dir: root.join(TEMPLATES_DIR),
            outputs_dir: root.join(OUTPUTS_DIR),
            root,
        }
    }

    /// Path of a template referenced by a config's `template_file`.
    pub fn template_path(&self, template_file: &str) -> PathBuf {
        self.templates_dir.join(template_file)
    }

    /// Path of a config given on the command line, relative to the root.
    ///
    /// Absolute paths are returned unchanged.
    pub fn config_path(&self, arg: &Path) -> PathBuf {
        self.root.join(arg)
    }

    /// List every `*.json` file directly under `prompts/`, sorted by file name.
    ///
    /// A missing directory yields an empty list.
    pub fn list_prompt_configs(&self) -> Result<Vec<PathBuf>> {
        if !self.prompts_dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.prompts_dir).map_err(|e| {
            PromptError::IoError(format!(
                "failed to read prompts directory '{}': {}",
                self.prompts_dir.display(),
                e
            ))
        })?;

        let mut configs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                PromptError::IoError(format!("failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            configs.push(path);
        }

        configs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(configs)
    }
}
