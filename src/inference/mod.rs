//! Inference client for rendered prompts.
//!
//! This module provides:
//!
//! - **InferenceClient**: the one-call seam used by the batch driver
//! - **Request**: the fixed Messages-API request envelope
//! - **Response**: tagged decoding of the reply into plain text
//! - **Bedrock**: the Amazon Bedrock Runtime implementation

mod bedrock;
mod response;

pub use bedrock::BedrockInference;

use crate::error::Result;
use serde_json::{Value, json};

/// Protocol tag sent with every request.
pub const ANTHROPIC_VERSION: &str = "bedrock-2023-05-31";

/// Generates text for a rendered prompt.
pub trait InferenceClient {
    /// Submit `prompt` with a budget of `max_tokens` and return plain text.
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String>;
}

/// Build the request body: a single user message wrapping the prompt.
pub fn request_body(prompt: &str, max_tokens: u32) -> Value {
    json!({
        "anthropic_version": ANTHROPIC_VERSION,
        "max_tokens": max_tokens,
        "messages": [
            {
                "role": "user",
                "content": format!("Human: {}", prompt)
            }
        ]
    })
}
