//! Amazon Bedrock Runtime implementation of [`InferenceClient`].

use super::response::extract_text;
use super::{InferenceClient, request_body};
use crate::aws::AwsSession;
use crate::error::{PromptError, Result};
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde_json::Value;
use tracing::{debug, info};

/// On-demand `InvokeModel` client for a fixed model.
pub struct BedrockInference {
    session: AwsSession,
    client: Client,
    model_id: String,
}

impl BedrockInference {
    pub fn new(session: &AwsSession, model_id: impl Into<String>) -> Self {
        Self {
            client: Client::new(session.sdk_config()),
            session: session.clone(),
            model_id: model_id.into(),
        }
    }
}

impl InferenceClient for BedrockInference {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let body = serde_json::to_vec(&request_body(prompt, max_tokens)).map_err(|e| {
            PromptError::ParseError(format!("failed to serialize request body: {}", e))
        })?;

        info!(model_id = %self.model_id, max_tokens, "invoking model");
        let output = self
            .session
            .block_on(
                self.client
                    .invoke_model()
                    .model_id(&self.model_id)
                    .content_type("application/json")
                    .accept("application/json")
                    .body(Blob::new(body))
                    .send(),
            )
            .map_err(|e| PromptError::upstream("Bedrock InvokeModel", e))?;

        let raw: Value = serde_json::from_slice(output.body().as_ref()).map_err(|e| {
            PromptError::ParseError(format!("invalid JSON in Bedrock response: {}", e))
        })?;
        debug!(bytes = output.body().as_ref().len(), "received model response");

        Ok(extract_text(raw))
    }
}
