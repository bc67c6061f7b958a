//! JSON formatting tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonFormatParams {
    /// JSON document
    pub json: String,
    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    #[schemars(range(min = 0, max = 8))]
    pub indent: usize,
}

fn default_indent() -> usize {
    2
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonMinifyParams {
    /// JSON document
    pub json: String,
}

pub(crate) fn parse_json(input: &str) -> ToolResult<Value> {
    serde_json::from_str(input).map_err(|e| ToolError::invalid_format(format!("invalid JSON: {}", e)))
}

/// Pretty-print with `indent` spaces. An indent of zero yields compact output.
pub fn format_json(input: &str, indent: usize) -> ToolResult<String> {
    let value = parse_json(input)?;
    if indent == 0 {
        return minify_json(input);
    }

    let indent = " ".repeat(indent);
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer).map_err(ToolError::execution)?;
    String::from_utf8(out).map_err(ToolError::execution)
}

pub fn minify_json(input: &str) -> ToolResult<String> {
    let value = parse_json(input)?;
    serde_json::to_string(&value).map_err(ToolError::execution)
}

pub struct JsonFormatTool;

#[async_trait::async_trait]
impl ToolDefinition for JsonFormatTool {
    const NAME: &'static str = "json_format";
    const DESCRIPTION: &'static str = "Pretty-print a JSON document with the given indentation.";
    const ACTION: &'static str = "formatting JSON";
    type Params = JsonFormatParams;

    async fn execute(params: JsonFormatParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("JSON format called with indent {}", params.indent);
        Ok(ToolOutcome::text(format_json(&params.json, params.indent)?))
    }
}

pub struct JsonMinifyTool;

#[async_trait::async_trait]
impl ToolDefinition for JsonMinifyTool {
    const NAME: &'static str = "json_minify";
    const DESCRIPTION: &'static str = "Remove all insignificant whitespace from a JSON document.";
    const ACTION: &'static str = "minifying JSON";
    type Params = JsonMinifyParams;

    async fn execute(params: JsonMinifyParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("JSON minify called");
        Ok(ToolOutcome::text(minify_json(&params.json)?))
    }
}
