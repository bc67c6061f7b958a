//! Base64 encode/decode tools.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

/// Parameters shared by both Base64 tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct Base64Params {
    /// Text to encode, or Base64 to decode.
    pub text: String,

    /// Use the URL-safe alphabet (`-` and `_`).
    #[serde(default)]
    pub url_safe: bool,
}

/// Encode UTF-8 text as padded Base64.
pub fn encode_base64(text: &str, url_safe: bool) -> String {
    if url_safe {
        URL_SAFE.encode(text.as_bytes())
    } else {
        STANDARD.encode(text.as_bytes())
    }
}

/// Decode Base64 (padded or not, whitespace ignored) into UTF-8 text.
pub fn decode_base64(input: &str, url_safe: bool) -> ToolResult<String> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let unpadded = compact.trim_end_matches('=');

    let bytes = if url_safe {
        URL_SAFE_NO_PAD.decode(unpadded)
    } else {
        STANDARD_NO_PAD.decode(unpadded)
    }
    .map_err(ToolError::execution)?;

    String::from_utf8(bytes)
        .map_err(|_| ToolError::invalid_format("decoded bytes are not valid UTF-8 text"))
}

/// Base64 encode tool.
pub struct Base64EncodeTool;

#[async_trait::async_trait]
impl ToolDefinition for Base64EncodeTool {
    const NAME: &'static str = "encode_base64";
    const DESCRIPTION: &'static str = "Encode text to Base64.";
    const ACTION: &'static str = "encoding Base64";
    type Params = Base64Params;

    async fn execute(params: Base64Params, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Base64 encode called ({} bytes)", params.text.len());
        Ok(ToolOutcome::text(format!(
            "Base64 encoded: {}",
            encode_base64(&params.text, params.url_safe)
        )))
    }
}

/// Base64 decode tool.
pub struct Base64DecodeTool;

#[async_trait::async_trait]
impl ToolDefinition for Base64DecodeTool {
    const NAME: &'static str = "decode_base64";
    const DESCRIPTION: &'static str = "Decode Base64 back to text. Padding is optional.";
    const ACTION: &'static str = "decoding Base64";
    type Params = Base64Params;

    async fn execute(params: Base64Params, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Base64 decode called ({} bytes)", params.text.len());
        let decoded = decode_base64(&params.text, params.url_safe)?;
        Ok(ToolOutcome::text(format!("Base64 decoded: {}", decoded)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for text in ["", "hello", "Hello, World!", "héllo wörld ✓", "emoji 🦀🦀", "a\nb\tc"] {
            assert_eq!(decode_base64(&encode_base64(text, false), false).unwrap(), text);
            assert_eq!(decode_base64(&encode_base64(text, true), true).unwrap(), text);
        }
    }

    #[test]
    fn test_known_vector() {
        assert_eq!(encode_base64("Hello, World!", false), "SGVsbG8sIFdvcmxkIQ==");
        assert_eq!(decode_base64("SGVsbG8sIFdvcmxkIQ", false).unwrap(), "Hello, World!");
    }

    #[test]
    fn test_url_safe_alphabet() {
        assert_eq!(encode_base64("??>", false), "Pz8+");
        assert_eq!(encode_base64("??>", true), "Pz8-");
    }

    #[test]
    fn test_decode_invalid() {
        assert!(decode_base64("!!!", false).is_err());
    }

    #[test]
    fn test_decode_non_utf8() {
        // 0xFF 0xFE
        let err = decode_base64("//4=", false).unwrap_err();
        assert!(matches!(err, ToolError::InvalidFormat(_)));
    }

    #[tokio::test]
    async fn test_decode_tool_failure_text() {
        let params = Base64Params {
            text: "###".to_string(),
            url_safe: false,
        };
        let err = Base64DecodeTool::execute(params, &ToolContext::default())
            .await
            .unwrap_err();
        assert!(Base64DecodeTool::failure_message(&err).starts_with("Error decoding Base64: "));
    }
}
