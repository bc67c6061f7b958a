//! NATO phonetic alphabet spelling.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

const LETTERS: [&str; 26] = [
    "Alfa", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India", "Juliett",
    "Kilo", "Lima", "Mike", "November", "Oscar", "Papa", "Quebec", "Romeo", "Sierra", "Tango",
    "Uniform", "Victor", "Whiskey", "X-ray", "Yankee", "Zulu",
];

const DIGITS: [&str; 10] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NatoParams {
    /// Text to spell out
    pub text: String,
}

fn spell(c: char) -> Option<String> {
    match c {
        'a'..='z' | 'A'..='Z' => {
            let index = (c.to_ascii_lowercase() as u8 - b'a') as usize;
            Some(LETTERS[index].to_string())
        }
        '0'..='9' => Some(DIGITS[(c as u8 - b'0') as usize].to_string()),
        c if c.is_whitespace() => None,
        other => Some(other.to_string()),
    }
}

/// Spell `text` word by word; words are separated by " / ".
pub fn to_nato(text: &str) -> String {
    text.split_whitespace()
        .map(|word| word.chars().filter_map(spell).collect::<Vec<_>>().join(" "))
        .collect::<Vec<_>>()
        .join(" / ")
}

pub struct NatoTool;

#[async_trait::async_trait]
impl ToolDefinition for NatoTool {
    const NAME: &'static str = "text_to_nato";
    const DESCRIPTION: &'static str = "Spell text using the NATO phonetic alphabet.";
    const ACTION: &'static str = "converting to NATO alphabet";
    type Params = NatoParams;

    async fn execute(params: NatoParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("NATO spelling called");
        Ok(ToolOutcome::text(format!("NATO: {}", to_nato(&params.text))))
    }
}
