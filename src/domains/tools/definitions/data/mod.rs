//! Data format tools: JSON, TOML, Markdown.

pub mod json;
pub mod markdown;
pub mod toml_json;

pub use json::{JsonFormatTool, JsonMinifyTool};
pub use markdown::MarkdownToHtmlTool;
pub use toml_json::{JsonToTomlTool, TomlToJsonTool};

use crate::domains::tools::{ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<JsonFormatTool>()?;
    registry.register_tool::<JsonMinifyTool>()?;
    registry.register_tool::<JsonToTomlTool>()?;
    registry.register_tool::<TomlToJsonTool>()?;
    registry.register_tool::<MarkdownToHtmlTool>()?;
    Ok(())
}
