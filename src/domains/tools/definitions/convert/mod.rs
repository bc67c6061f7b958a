//! Numeric conversion tools.

pub mod number_base;
pub mod roman;

pub use number_base::NumberBaseTool;
pub use roman::{RomanDecodeTool, RomanEncodeTool};

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<NumberBaseTool>()?;
    registry.register_tool::<RomanEncodeTool>()?;
    registry.register_tool::<RomanDecodeTool>()?;

    registry.register_alias("number-base", NumberBaseTool::NAME)?;
    Ok(())
}
