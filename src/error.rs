//! Error types for the prompt-batch CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Boxed error from an upstream SDK call, kept opaque.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for prompt-batch operations.
///
/// Each variant maps to a specific exit code. Nothing is recovered internally:
/// the first error aborts the whole batch.
#[derive(Error, Debug)]
pub enum PromptError {
    /// Ambient configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A prompt config is missing required keys or has invalid values.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Template rendering left placeholders unresolved.
    #[error("Validation failed: {0}")]
    Template(TemplateError),

    /// A referenced file (template) does not exist.
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// A JSON document could not be read or parsed.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Local filesystem read or write failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// An SDK call failed. The SDK error is kept as the source.
    #[error("{operation} failed")]
    Upstream {
        /// Short name of the failed call (e.g. "Bedrock InvokeModel").
        operation: &'static str,
        #[source]
        source: BoxError,
    },
}

impl From<TemplateError> for PromptError {
    fn from(err: TemplateError) -> Self {
        PromptError::Template(err)
    }
}

impl PromptError {
    /// Wrap an SDK error without translating it.
    pub fn upstream<E>(operation: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        PromptError::Upstream {
            operation,
            source: Box::new(err),
        }
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptError::ConfigurationError(_) => exit_codes::CONFIGURATION_FAILURE,
            PromptError::ValidationError(_) | PromptError::Template(_) => {
                exit_codes::VALIDATION_FAILURE
            }
            PromptError::NotFoundError(_)
            | PromptError::ParseError(_)
            | PromptError::IoError(_) => exit_codes::INPUT_FAILURE,
            PromptError::Upstream { .. } => exit_codes::UPSTREAM_FAILURE,
        }
    }
}

/// Result type alias for prompt-batch operations.
pub type Result<T> = std::result::Result<T, PromptError>;
