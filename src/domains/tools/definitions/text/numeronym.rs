//! Numeronyms: "accessibility" becomes "a11y".

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NumeronymParams {
    /// Text to abbreviate
    pub text: String,
}

fn word_numeronym(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= 3 {
        return word.to_string();
    }
    format!("{}{}{}", chars[0], chars.len() - 2, chars[chars.len() - 1])
}

/// Applies the numeronym rule to each whitespace-separated word.
pub fn numeronym(text: &str) -> String {
    text.split_whitespace()
        .map(word_numeronym)
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct NumeronymTool;

#[async_trait::async_trait]
impl ToolDefinition for NumeronymTool {
    const NAME: &'static str = "numeronym";
    const DESCRIPTION: &'static str =
        "Abbreviate each word longer than three characters as first letter, count, last letter (e.g. a11y).";
    const ACTION: &'static str = "generating numeronym";
    type Params = NumeronymParams;

    async fn execute(params: NumeronymParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Numeronym called");
        Ok(ToolOutcome::text(format!("Numeronym: {}", numeronym(&params.text))))
    }
}
