//! Decoding of Messages-API replies.
//!
//! Replies look like `{"content": [{"type": "text", "text": "..."}, ...], ...}`.
//! Each segment decodes into [`ContentBlock`]: text segments are recognized,
//! anything else is kept verbatim as [`ContentBlock::Other`].

use serde::Deserialize;
use serde_json::Value;

/// Tag accepted by [`TextBlock`]; only `"text"` matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
enum TextTag {
    #[serde(rename = "text")]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TextBlock {
    // Only checked while decoding.
    #[allow(dead_code)]
    #[serde(rename = "type")]
    kind: TextTag,
    #[serde(default)]
    pub text: String,
}

/// One content segment of a reply.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentBlock {
    Text(TextBlock),
    /// Any other segment shape, preserved as raw JSON.
    Other(Value),
}

#[derive(Debug, Deserialize)]
struct MessagesReply {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// A decoded reply: either text segments, or a shape we do not recognize.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceReply {
    Segments(Vec<ContentBlock>),
    Unrecognized(Value),
}

impl InferenceReply {
    pub fn decode(raw: Value) -> Self {
        match MessagesReply::deserialize(&raw) {
            Ok(reply) if reply.content.iter().any(|b| matches!(b, ContentBlock::Text(_))) => {
                InferenceReply::Segments(reply.content)
            }
            _ => InferenceReply::Unrecognized(raw),
        }
    }

    /// Plain text of the reply.
    ///
    /// Text segments are joined with `\n` and trimmed. Without any text
    /// segment the whole reply is pretty-printed so nothing is lost.
    pub fn into_text(self) -> String {
        match self {
            InferenceReply::Segments(blocks) => blocks
                .iter()
                .filter_map(|b| match b {
                    ContentBlock::Text(t) => Some(t.text.as_str()),
                    ContentBlock::Other(_) => None,
                })
                .collect::<Vec<_>>()
                .join("\n")
                .trim()
                .to_string(),
            InferenceReply::Unrecognized(raw) => {
                serde_json::to_string_pretty(&raw).unwrap_or_else(|_| raw.to_string())
            }
        }
    }
}

/// Extract plain text from a raw reply.
pub fn extract_text(raw: Value) -> String {
    InferenceReply::decode(raw).into_text()
}
