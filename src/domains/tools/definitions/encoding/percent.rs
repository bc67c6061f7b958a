//! URL percent-encoding tools.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UrlCodecParams {
    /// Text to encode or decode
    pub text: String,
}

/// Percent-encode every byte outside `A-Z a-z 0-9 - _ . ~`.
pub fn encode_url_component(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

/// Decode percent-escapes. `+` is left as-is.
pub fn decode_url_component(text: &str) -> ToolResult<String> {
    urlencoding::decode(text)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| ToolError::invalid_format(format!("decoded bytes are not valid UTF-8: {}", e)))
}

/// URL encode tool.
pub struct UrlEncodeTool;

#[async_trait::async_trait]
impl ToolDefinition for UrlEncodeTool {
    const NAME: &'static str = "encode_url";
    const DESCRIPTION: &'static str =
        "Percent-encode text for safe use inside a URL component (query value, path segment).";
    const ACTION: &'static str = "encoding URL";
    type Params = UrlCodecParams;

    async fn execute(params: UrlCodecParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("URL encode called");
        Ok(ToolOutcome::text(format!(
            "URL encoded: {}",
            encode_url_component(&params.text)
        )))
    }
}

/// URL decode tool.
pub struct UrlDecodeTool;

#[async_trait::async_trait]
impl ToolDefinition for UrlDecodeTool {
    const NAME: &'static str = "decode_url";
    const DESCRIPTION: &'static str = "Decode percent-encoded URL text.";
    const ACTION: &'static str = "decoding URL";
    type Params = UrlCodecParams;

    async fn execute(params: UrlCodecParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("URL decode called");
        let decoded = decode_url_component(&params.text)?;
        Ok(ToolOutcome::text(format!("URL decoded: {}", decoded)))
    }
}
