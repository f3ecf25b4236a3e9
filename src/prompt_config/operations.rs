//! Config loading and validation.

use super::model::{DEFAULT_MAX_TOKENS, PromptConfig, RawPromptConfig};
use crate::error::{PromptError, Result};
use serde_json::{Map, Value};
use std::path::{Component, Path};

/// Read a JSON file and return its top-level object.
///
/// No schema validation happens here; see [`PromptConfig::from_map`].
///
/// # Returns
///
/// * `Ok(Map)` - The parsed object
/// * `Err(PromptError::ParseError)` - Missing or unreadable file, invalid
///   JSON, or a top-level value that is not an object
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Map<String, Value>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        PromptError::ParseError(format!(
            "failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| {
        PromptError::ParseError(format!("invalid JSON in '{}': {}", path.display(), e))
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(PromptError::ParseError(format!(
            "'{}' must contain a JSON object at the top level",
            path.display()
        ))),
    }
}

impl PromptConfig {
    /// Decode a parsed JSON object into a validated config.
    ///
    /// `source` is only used to name the offending file in error messages.
    ///
    /// Validation rules:
    /// - `template_file` and `output_file` must be present and non-empty
    /// - `max_tokens` must be greater than 0
    /// - `output_file` must be a relative path without `..` components
    pub fn from_map(map: Map<String, Value>, source: &Path) -> Result<Self> {
        let raw: RawPromptConfig = serde_json::from_value(Value::Object(map)).map_err(|e| {
            PromptError::ValidationError(format!(
                "invalid config '{}': {}",
                source.display(),
                e
            ))
        })?;

        let template_file = raw.template_file.filter(|s| !s.is_empty());
        let output_file = raw.output_file.filter(|s| !s.is_empty());

        let (Some(template_file), Some(output_file)) = (template_file, output_file) else {
            return Err(PromptError::ValidationError(format!(
                "config missing required keys. Need 'template_file' and 'output_file'. Problem file: {}",
                source.display()
            )));
        };

        let config = PromptConfig {
            template_file,
            output_file,
            variables: raw.variables.unwrap_or_default(),
            max_tokens: raw.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
        };

        config.validate(source)?;
        Ok(config)
    }

    fn validate(&self, source: &Path) -> Result<()> {
        if self.max_tokens == 0 {
            return Err(PromptError::ValidationError(format!(
                "max_tokens must be greater than 0 in {}",
                source.display()
            )));
        }

        let output = Path::new(&self.output_file);
        let escapes = output
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes {
            return Err(PromptError::ValidationError(format!(
                "output_file '{}' must be a relative path inside outputs/ (no '..' or absolute paths). Problem file: {}",
                self.output_file,
                source.display()
            )));
        }

        Ok(())
    }
}
