//! Case conversion tool.
//!
//! One canonical tool with a `case` argument; the per-case tool names are
//! registered as presets that pin it.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

static WORD_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^\w|[A-Z]|\b\w)").expect("word start pattern is valid"));
static LOWER_UPPER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z])([A-Z])").expect("case boundary pattern is valid"));
static DASH_OR_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-_]+").expect("separator pattern is valid"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static SPACE_OR_UNDERSCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_]+").expect("kebab pattern is valid"));
static SPACE_OR_DASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s-]+").expect("snake pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum TextCase {
    Upper,
    Lower,
    Capitalize,
    Camel,
    Pascal,
    Kebab,
    Snake,
}

impl TextCase {
    pub fn label(self) -> &'static str {
        match self {
            Self::Upper => "Uppercase",
            Self::Lower => "Lowercase",
            Self::Capitalize => "Capitalized",
            Self::Camel => "camelCase",
            Self::Pascal => "PascalCase",
            Self::Kebab => "kebab-case",
            Self::Snake => "snake_case",
        }
    }

    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
            Self::Capitalize => capitalize(text),
            Self::Camel => camelcase(text),
            Self::Pascal => pascalcase(text),
            Self::Kebab => kebabcase(text),
            Self::Snake => snakecase(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TextCaseParams {
    /// Text to convert
    pub text: String,
    /// Target case
    pub case: TextCase,
}

/// First character uppercase, the rest lowercase.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

fn join_words(text: &str, upper_first: bool) -> String {
    let spaced = DASH_OR_UNDERSCORE.replace_all(text, " ");
    let marked = WORD_START.replace_all(&spaced, |caps: &Captures| {
        let m = caps.get(0).map_or("", |m| m.as_str());
        let at_start = caps.get(0).is_some_and(|m| m.start() == 0);
        if at_start && !upper_first {
            m.to_lowercase()
        } else {
            m.to_uppercase()
        }
    });
    WHITESPACE.replace_all(&marked, "").into_owned()
}

pub fn camelcase(text: &str) -> String {
    join_words(text, false)
}

pub fn pascalcase(text: &str) -> String {
    join_words(text, true)
}

pub fn kebabcase(text: &str) -> String {
    let split = LOWER_UPPER.replace_all(text, "$1-$2");
    SPACE_OR_UNDERSCORE
        .replace_all(&split, "-")
        .to_lowercase()
}

pub fn snakecase(text: &str) -> String {
    let split = LOWER_UPPER.replace_all(text, "${1}_$2");
    SPACE_OR_DASH.replace_all(&split, "_").to_lowercase()
}

/// Case conversion tool.
pub struct TextCaseTool;

#[async_trait::async_trait]
impl ToolDefinition for TextCaseTool {
    const NAME: &'static str = "text_case";
    const DESCRIPTION: &'static str = "Convert text to upper, lower, capitalized, camelCase, PascalCase, kebab-case or snake_case.";
    const ACTION: &'static str = "converting case";
    type Params = TextCaseParams;

    async fn execute(params: TextCaseParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Case conversion called: {:?}", params.case);
        Ok(ToolOutcome::text(params.case.apply(&params.text)))
    }
}
