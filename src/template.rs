//! Template engine for prompt rendering.
//!
//! Templates are plain text with `{{name}}` placeholders. Rendering replaces
//! every literal `{{name}}` with the textual form of the matching variable,
//! then scans for anything still shaped like a placeholder.
//!
//! # Error Handling
//!
//! The engine fails closed: any `{{...}}` token left after substitution is an
//! error listing every distinct leftover token, so a config that forgot a
//! variable never produces an artifact with literal placeholder syntax.

use regex::Regex;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use thiserror::Error;

/// Anything between double braces that contains no `}`.
static LEFTOVER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[^}]+\}\}").expect("Invalid placeholder regex"));

/// Error type for template rendering failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Placeholders remained after every variable was substituted.
    #[error(
        "Unresolved template placeholders found: {}. Make sure your JSON variables match the template placeholders.",
        format_tokens(.tokens)
    )]
    UnresolvedPlaceholders {
        /// Distinct leftover tokens, sorted.
        tokens: Vec<String>,
    },
}

fn format_tokens(tokens: &[String]) -> String {
    let quoted: Vec<String> = tokens.iter().map(|t| format!("\"{}\"", t)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Textual form of a variable value.
///
/// Strings are inserted as-is; every other JSON value uses its compact JSON text.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

/// Render a template by substituting `{{name}}` placeholders.
///
/// # Examples
///
/// ```text
/// template:  "Hello {{name}}!"
/// variables: {"name": "Ada"}
/// result:    "Hello Ada!"
/// ```
pub fn render_template(template: &str, variables: &Map<String, Value>) -> Result<String, TemplateError> {
    let mut rendered = template.to_string();

    for (name, value) in variables {
        let placeholder = format!("{{{{{}}}}}", name);
        if rendered.contains(&placeholder) {
            rendered = rendered.replace(&placeholder, &value_text(value));
        }
    }

    let leftover: BTreeSet<&str> = LEFTOVER_REGEX
        .find_iter(&rendered)
        .map(|m| m.as_str())
        .collect();

    if !leftover.is_empty() {
        return Err(TemplateError::UnresolvedPlaceholders {
            tokens: leftover.into_iter().map(str::to_string).collect(),
        });
    }

    Ok(rendered)
}
