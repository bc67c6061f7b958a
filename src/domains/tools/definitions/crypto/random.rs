//! Random identifiers and tokens.

use rand::Rng;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const NUMBERS: &str = "0123456789";
const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}<>?";

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UuidParams {
    /// Number of UUIDs to generate
    #[serde(default = "default_uuid_count")]
    #[schemars(range(min = 1, max = 100))]
    pub count: usize,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TokenParams {
    /// Token length in characters
    #[serde(default = "default_token_length")]
    #[schemars(range(min = 1, max = 512))]
    pub length: usize,
    /// Include A-Z
    #[serde(default = "enabled")]
    pub uppercase: bool,
    /// Include a-z
    #[serde(default = "enabled")]
    pub lowercase: bool,
    /// Include 0-9
    #[serde(default = "enabled")]
    pub numbers: bool,
    /// Include punctuation symbols
    #[serde(default)]
    pub symbols: bool,
}

fn default_uuid_count() -> usize {
    1
}

fn default_token_length() -> usize {
    32
}

fn enabled() -> bool {
    true
}

impl TokenParams {
    fn alphabet(&self) -> Vec<char> {
        [
            (self.uppercase, UPPERCASE),
            (self.lowercase, LOWERCASE),
            (self.numbers, NUMBERS),
            (self.symbols, SYMBOLS),
        ]
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .flat_map(|(_, chars)| chars.chars())
        .collect()
    }
}

pub fn generate_token(params: &TokenParams) -> ToolResult<String> {
    let alphabet = params.alphabet();
    if alphabet.is_empty() {
        return Err(ToolError::invalid_arguments(
            "at least one character set must be enabled",
        ));
    }
    let mut rng = rand::thread_rng();
    Ok((0..params.length)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect())
}

pub struct UuidTool;

#[async_trait::async_trait]
impl ToolDefinition for UuidTool {
    const NAME: &'static str = "generate_uuid";
    const DESCRIPTION: &'static str = "Generate one or more random (v4) UUIDs.";
    const ACTION: &'static str = "generating UUID";
    type Params = UuidParams;

    async fn execute(params: UuidParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("UUID generation called: {}", params.count);
        let uuids: Vec<String> = (0..params.count).map(|_| Uuid::new_v4().to_string()).collect();
        Ok(ToolOutcome::text(uuids.join("\n")))
    }
}

pub struct TokenTool;

#[async_trait::async_trait]
impl ToolDefinition for TokenTool {
    const NAME: &'static str = "generate_token";
    const DESCRIPTION: &'static str = "Generate a random token from the selected character sets.";
    const ACTION: &'static str = "generating token";
    type Params = TokenParams;

    async fn execute(params: TokenParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Token generation called: length {}", params.length);
        Ok(ToolOutcome::text(format!("Token: {}", generate_token(&params)?)))
    }
}
