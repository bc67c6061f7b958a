//! The result envelope every tool returns.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

/// Tagged outcome of a single tool invocation.
///
/// Converted to an MCP `CallToolResult` at the transport boundary. The error
/// flag is always set explicitly, on both variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Success {
        /// Ordered text items; never empty.
        content: Vec<String>,
        /// Optional machine-readable form of the same result.
        structured: Option<serde_json::Value>,
    },
    Failure {
        message: String,
    },
}

impl ToolOutcome {
    /// A success carrying a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Success {
            content: vec![text.into()],
            structured: None,
        }
    }

    /// A success carrying several text items (e.g. status, headers, body).
    pub fn sections<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut content: Vec<String> = items.into_iter().map(Into::into).collect();
        if content.is_empty() {
            content.push(String::new());
        }
        Self::Success {
            content,
            structured: None,
        }
    }

    /// Attach structured content to a success. No-op on failures.
    ///
    /// A value that cannot be serialized is logged and left out; the text
    /// content still goes out.
    pub fn with_structured<T: Serialize>(self, value: &T) -> Self {
        match self {
            Self::Success { content, .. } => {
                let structured = match serde_json::to_value(value) {
                    Ok(value) => Some(value),
                    Err(e) => {
                        warn!("Dropping structured content: {}", e);
                        None
                    }
                };
                Self::Success {
                    content,
                    structured,
                }
            }
            failure => failure,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// Text items in order. A failure yields its single message.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Success { content, .. } => content.iter().map(String::as_str).collect(),
            Self::Failure { message } => vec![message.as_str()],
        }
    }

    /// All text items joined by newlines.
    pub fn joined_text(&self) -> String {
        self.texts().join("\n")
    }

    pub fn structured(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success { structured, .. } => structured.as_ref(),
            Self::Failure { .. } => None,
        }
    }

    /// Convert into the MCP wire type.
    pub fn into_call_result(self) -> CallToolResult {
        match self {
            Self::Success {
                content,
                structured,
            } => CallToolResult {
                content: content.into_iter().map(Content::text).collect(),
                structured_content: structured,
                is_error: Some(false),
                meta: None,
            },
            Self::Failure { message } => CallToolResult::error(vec![Content::text(message)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_never_empty() {
        let outcome = ToolOutcome::sections(Vec::<String>::new());
        assert_eq!(outcome.texts(), vec![""]);
    }

    #[test]
    fn test_success_sets_error_flag_false() {
        let result = ToolOutcome::text("Result: 42").into_call_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.content.len(), 1);
    }

    #[test]
    fn test_failure_sets_error_flag_true() {
        let result = ToolOutcome::failure("Error decoding Base64: bad input").into_call_result();
        assert_eq!(result.is_error, Some(true));

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert!(text.starts_with("Error decoding Base64"));
    }

    #[test]
    fn test_structured_content_serialization() {
        let outcome =
            ToolOutcome::text("Host: example.com").with_structured(&serde_json::json!({
                "host": "example.com"
            }));
        let serialized = serde_json::to_value(outcome.into_call_result()).unwrap();
        assert_eq!(serialized["structuredContent"]["host"], "example.com");
        assert_eq!(serialized["isError"], false);
        assert_eq!(serialized["content"][0]["text"], "Host: example.com");
    }

    #[test]
    fn test_unserializable_structured_content_keeps_text() {
        // JSON objects need string keys
        let mut by_pair = std::collections::BTreeMap::new();
        by_pair.insert((1, 2), "x");

        let outcome = ToolOutcome::text("Result: x").with_structured(&by_pair);
        assert!(!outcome.is_error());
        assert!(outcome.structured().is_none());
        assert_eq!(outcome.texts(), vec!["Result: x"]);
    }

    #[test]
    fn test_structured_ignored_on_failure() {
        let outcome = ToolOutcome::failure("nope").with_structured(&serde_json::json!({}));
        assert!(outcome.structured().is_none());
        assert!(outcome.is_error());
    }
}
