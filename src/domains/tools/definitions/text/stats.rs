//! Text statistics.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextStatsParams {
    /// Text to analyze
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub bytes: usize,
    pub words: usize,
    pub lines: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: text.chars().count(),
            characters_no_spaces: text.chars().filter(|c| !c.is_whitespace()).count(),
            bytes: text.len(),
            words: text.split_whitespace().count(),
            lines: if text.is_empty() { 0 } else { text.lines().count() },
        }
    }
}

pub struct TextStatsTool;

#[async_trait::async_trait]
impl ToolDefinition for TextStatsTool {
    const NAME: &'static str = "text_stats";
    const DESCRIPTION: &'static str = "Count characters, bytes, words and lines in a text.";
    const ACTION: &'static str = "computing text statistics";
    type Params = TextStatsParams;

    async fn execute(params: TextStatsParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Text stats called");
        let stats = TextStats::of(&params.text);
        let report = format!(
            "Characters: {}\nCharacters (no spaces): {}\nBytes: {}\nWords: {}\nLines: {}",
            stats.characters, stats.characters_no_spaces, stats.bytes, stats.words, stats.lines
        );
        Ok(ToolOutcome::text(report).with_structured(&stats))
    }
}
