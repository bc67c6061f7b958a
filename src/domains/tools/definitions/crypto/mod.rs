//! Token tools: JWT inspection, UUIDs, random tokens.

pub mod jwt;
pub mod random;

pub use jwt::JwtDecodeTool;
pub use random::{TokenTool, UuidTool};

use crate::domains::tools::{ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<JwtDecodeTool>()?;
    registry.register_tool::<UuidTool>()?;
    registry.register_tool::<TokenTool>()?;
    Ok(())
}
