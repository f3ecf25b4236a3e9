//! PromptConfig struct definition.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Token budget used when a config does not set `max_tokens`.
pub const DEFAULT_MAX_TOKENS: u32 = 700;

/// A validated prompt config.
///
/// Built by [`PromptConfig::from_map`]; read once per run and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptConfig {
    /// Template name, resolved under `prompt_templates/`.
    pub template_file: String,

    /// Artifact name, resolved under `outputs/` and reused in the remote key.
    pub output_file: String,

    /// Placeholder name to value.
    pub variables: Map<String, Value>,

    /// Token budget for the inference call.
    pub max_tokens: u32,
}

/// Shape of the JSON document before required keys are checked.
///
/// Unknown fields are ignored for forward compatibility.
#[derive(Debug, Deserialize)]
pub(super) struct RawPromptConfig {
    #[serde(default)]
    pub template_file: Option<String>,

    #[serde(default)]
    pub output_file: Option<String>,

    #[serde(default)]
    pub variables: Option<Map<String, Value>>,

    #[serde(default)]
    pub max_tokens: Option<u32>,
}
