//! Color conversion tools.
//!
//! RGB channels are bounds-checked to 0-255 under every registered name,
//! aliases included.

pub mod hex_rgb;

pub use hex_rgb::{HexToRgbTool, RgbToHexTool};

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<HexToRgbTool>()?;
    registry.register_tool::<RgbToHexTool>()?;

    registry.register_alias("hex-to-rgb", HexToRgbTool::NAME)?;
    registry.register_alias("rgb-to-hex", RgbToHexTool::NAME)?;
    Ok(())
}
