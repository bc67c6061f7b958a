//! URL slug generation.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;
use unicode_normalization::UnicodeNormalization;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

static DISALLOWED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s-]").expect("slug filter pattern is valid"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SlugParams {
    /// Text to slugify
    pub text: String,
    /// Separator placed between words
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Lowercase the result
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_lowercase() -> bool {
    true
}

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

pub fn slugify(text: &str, separator: &str, lowercase: bool) -> String {
    let stripped: String = text.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let filtered = DISALLOWED.replace_all(stripped.trim(), "");
    let mut slug = WHITESPACE.replace_all(&filtered, separator).into_owned();

    if !separator.is_empty() {
        let repeated = Regex::new(&format!("(?:{})+", regex::escape(separator)));
        if let Ok(repeated) = repeated {
            slug = repeated.replace_all(&slug, separator).into_owned();
        }
        slug = slug.trim_matches(|c| separator.contains(c)).to_string();
    }

    if lowercase { slug.to_lowercase() } else { slug }
}

/// Slugify tool.
pub struct SlugifyTool;

#[async_trait::async_trait]
impl ToolDefinition for SlugifyTool {
    const NAME: &'static str = "slugify";
    const DESCRIPTION: &'static str = "Convert text into a URL-friendly slug.";
    const ACTION: &'static str = "generating slug";
    type Params = SlugParams;

    async fn execute(params: SlugParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Slugify called");
        let slug = slugify(&params.text, &params.separator, params.lowercase);
        Ok(ToolOutcome::text(format!("Slug: {}", slug)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World!", "-", true), "hello-world");
        assert_eq!(slugify("  spaced   out  ", "-", true), "spaced-out");
    }

    #[test]
    fn test_slugify_strips_diacritics() {
        assert_eq!(slugify("Crème Brûlée à la carte", "-", true), "creme-brulee-a-la-carte");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a - b -- c", "-", true), "a-b-c");
        assert_eq!(slugify("Keep Case", "_", false), "Keep_Case");
    }
}
