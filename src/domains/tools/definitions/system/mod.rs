//! System tools: host info, processes, files.

pub mod files;
pub mod info;
pub mod processes;

pub use files::{FileReadTool, FileTailTool};
pub use info::SystemInfoTool;
pub use processes::ProcessListTool;

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<SystemInfoTool>()?;
    registry.register_tool::<ProcessListTool>()?;
    registry.register_tool::<FileReadTool>()?;
    registry.register_tool::<FileTailTool>()?;

    registry.register_alias("ps", ProcessListTool::NAME)?;
    registry.register_alias("cat", FileReadTool::NAME)?;
    registry.register_alias("tail", FileTailTool::NAME)?;
    Ok(())
}
