//! HTML entity encode/decode tools.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
        .expect("entity pattern is valid")
});

/// Named entities recognised when decoding.
const NAMED_ENTITIES: &[(&str, char)] = &[
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("nbsp", '\u{a0}'),
    ("copy", '©'),
    ("reg", '®'),
    ("trade", '™'),
    ("hellip", '…'),
    ("mdash", '—'),
    ("ndash", '–'),
    ("lsquo", '‘'),
    ("rsquo", '’'),
    ("ldquo", '“'),
    ("rdquo", '”'),
    ("laquo", '«'),
    ("raquo", '»'),
    ("middot", '·'),
    ("bull", '•'),
    ("deg", '°'),
    ("plusmn", '±'),
    ("times", '×'),
    ("divide", '÷'),
    ("euro", '€'),
    ("pound", '£'),
    ("yen", '¥'),
    ("cent", '¢'),
    ("sect", '§'),
    ("para", '¶'),
];

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HtmlParams {
    /// Text to escape or unescape
    pub text: String,
}

/// Escape the five HTML-significant characters.
pub fn encode_html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Replace named and numeric entities. Unknown entities are kept verbatim.
pub fn decode_html_entities(text: &str) -> String {
    ENTITY
        .replace_all(text, |caps: &Captures| {
            let body = &caps[1];
            let decoded = if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = body.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                NAMED_ENTITIES
                    .iter()
                    .find(|(name, _)| *name == body)
                    .map(|(_, c)| *c)
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

/// HTML encode tool.
pub struct HtmlEncodeTool;

#[async_trait::async_trait]
impl ToolDefinition for HtmlEncodeTool {
    const NAME: &'static str = "encode_html";
    const DESCRIPTION: &'static str = "Escape HTML special characters (& < > \" ') as entities.";
    const ACTION: &'static str = "encoding HTML";
    type Params = HtmlParams;

    async fn execute(params: HtmlParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("HTML encode called");
        Ok(ToolOutcome::text(format!(
            "HTML encoded: {}",
            encode_html_entities(&params.text)
        )))
    }
}

/// HTML decode tool.
pub struct HtmlDecodeTool;

#[async_trait::async_trait]
impl ToolDefinition for HtmlDecodeTool {
    const NAME: &'static str = "decode_html";
    const DESCRIPTION: &'static str =
        "Decode HTML entities (named such as &amp;amp; and numeric such as &amp;#39; or &amp;#x27;).";
    const ACTION: &'static str = "decoding HTML";
    type Params = HtmlParams;

    async fn execute(params: HtmlParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("HTML decode called");
        Ok(ToolOutcome::text(format!(
            "HTML decoded: {}",
            decode_html_entities(&params.text)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(
            encode_html_entities(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_decode_named_and_numeric() {
        assert_eq!(
            decode_html_entities("&lt;p&gt; &amp; &#39;x&#x27; &copy; &#8364;"),
            "<p> & 'x' © €"
        );
    }

    #[test]
    fn test_decode_unknown_entity_kept() {
        assert_eq!(decode_html_entities("&bogus; &#xFFFFFF;"), "&bogus; &#xFFFFFF;");
    }

    #[test]
    fn test_round_trip() {
        let text = r#"if (a < b && c > "d") { return 'e'; }"#;
        assert_eq!(decode_html_entities(&encode_html_entities(text)), text);
    }
}
