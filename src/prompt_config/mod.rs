//! Prompt config model for prompt-batch.
//!
//! A prompt config is one JSON file under `prompts/` describing one unit of
//! work: which template to render, where to write the result, the variables
//! to substitute, and the token budget for the inference call.

mod model;
mod operations;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::{DEFAULT_MAX_TOKENS, PromptConfig};
pub use operations::load_json;
