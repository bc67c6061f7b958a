//! Encoding tools: Base64, URL percent-encoding, HTML entities, binary.

pub mod base64;
pub mod binary;
pub mod html;
pub mod percent;

pub use self::base64::{Base64DecodeTool, Base64EncodeTool};
pub use binary::{BinaryToTextTool, TextToBinaryTool};
pub use html::{HtmlDecodeTool, HtmlEncodeTool};
pub use percent::{UrlDecodeTool, UrlEncodeTool};

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<Base64EncodeTool>()?;
    registry.register_tool::<Base64DecodeTool>()?;
    registry.register_tool::<UrlEncodeTool>()?;
    registry.register_tool::<UrlDecodeTool>()?;
    registry.register_tool::<HtmlEncodeTool>()?;
    registry.register_tool::<HtmlDecodeTool>()?;
    registry.register_tool::<TextToBinaryTool>()?;
    registry.register_tool::<BinaryToTextTool>()?;

    registry.register_alias("base64-encode", Base64EncodeTool::NAME)?;
    registry.register_alias("base64-decode", Base64DecodeTool::NAME)?;
    Ok(())
}
