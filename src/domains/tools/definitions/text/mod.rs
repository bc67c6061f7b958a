//! Text tools: case conversion, slugs, numeronyms, statistics, NATO spelling.

pub mod case;
pub mod nato;
pub mod numeronym;
pub mod slug;
pub mod stats;

pub use case::TextCaseTool;
pub use nato::NatoTool;
pub use numeronym::NumeronymTool;
pub use slug::SlugifyTool;
pub use stats::TextStatsTool;

use serde_json::json;

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<TextCaseTool>()?;
    registry.register_tool::<SlugifyTool>()?;
    registry.register_tool::<NumeronymTool>()?;
    registry.register_tool::<TextStatsTool>()?;
    registry.register_tool::<NatoTool>()?;

    for (name, case, description) in [
        ("text_uppercase", "upper", "Convert text to UPPERCASE."),
        ("text_lowercase", "lower", "Convert text to lowercase."),
        ("text_capitalize", "capitalize", "Capitalize the first letter of text."),
        ("text_camelcase", "camel", "Convert text to camelCase."),
        ("text_pascalcase", "pascal", "Convert text to PascalCase."),
        ("text_kebabcase", "kebab", "Convert text to kebab-case."),
        ("text_snakecase", "snake", "Convert text to snake_case."),
    ] {
        registry.register_preset(name, TextCaseTool::NAME, description, json!({ "case": case }))?;
    }
    Ok(())
}
