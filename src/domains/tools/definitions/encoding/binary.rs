//! Text <-> binary tools.
//!
//! Encoding writes each character's code point as zero-padded binary (at
//! least 8 digits), separated by spaces. Decoding accepts any whitespace
//! between groups and rejects groups that are not a valid code point.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

/// Longest group that can name a Unicode scalar (U+10FFFF needs 21 bits).
const MAX_GROUP_BITS: usize = 21;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BinaryParams {
    /// Text to encode, or space-separated octets to decode
    pub text: String,
}

pub fn text_to_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn binary_to_text(binary: &str) -> ToolResult<String> {
    binary
        .split_whitespace()
        .enumerate()
        .map(|(index, group)| decode_group(index + 1, group))
        .collect()
}

fn decode_group(position: usize, group: &str) -> ToolResult<char> {
    if group.len() > MAX_GROUP_BITS || !group.chars().all(|c| c == '0' || c == '1') {
        return Err(ToolError::invalid_format(format!(
            "group {} ('{}') must be 1-{} binary digits",
            position, group, MAX_GROUP_BITS
        )));
    }
    let code = u32::from_str_radix(group, 2).map_err(ToolError::execution)?;
    char::from_u32(code).ok_or_else(|| {
        ToolError::invalid_format(format!(
            "group {} ('{}') is not a valid Unicode code point",
            position, group
        ))
    })
}

/// Text to binary tool.
pub struct TextToBinaryTool;

#[async_trait::async_trait]
impl ToolDefinition for TextToBinaryTool {
    const NAME: &'static str = "text_to_binary";
    const DESCRIPTION: &'static str =
        "Convert text to binary: one zero-padded 8-bit (or wider) group per character.";
    const ACTION: &'static str = "converting text to binary";
    type Params = BinaryParams;

    async fn execute(params: BinaryParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Text to binary called");
        Ok(ToolOutcome::text(format!("Binary: {}", text_to_binary(&params.text))))
    }
}

/// Binary to text tool.
pub struct BinaryToTextTool;

#[async_trait::async_trait]
impl ToolDefinition for BinaryToTextTool {
    const NAME: &'static str = "binary_to_text";
    const DESCRIPTION: &'static str =
        "Convert whitespace-separated binary groups back to text.";
    const ACTION: &'static str = "converting binary to text";
    type Params = BinaryParams;

    async fn execute(params: BinaryParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Binary to text called");
        let text = binary_to_text(&params.text)?;
        Ok(ToolOutcome::text(format!("Text: {}", text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(text_to_binary("Hi"), "01001000 01101001");
        assert_eq!(text_to_binary(""), "");
        assert_eq!(text_to_binary("é"), "11101001");
        assert_eq!(text_to_binary("€"), "10000010101100");
    }

    #[test]
    fn test_decode() {
        assert_eq!(binary_to_text("01001000 01101001").unwrap(), "Hi");
        assert_eq!(binary_to_text("  01001000\n\t1101001 ").unwrap(), "Hi");
    }

    #[test]
    fn test_round_trip_unicode() {
        let text = "Grüße, 世界 🦀";
        assert_eq!(binary_to_text(&text_to_binary(text)).unwrap(), text);
    }

    #[test]
    fn test_decode_rejects_non_binary_group() {
        let err = binary_to_text("01001000 0120").unwrap_err();
        assert!(err.to_string().contains("group 2"));
    }

    #[test]
    fn test_decode_rejects_too_long_group() {
        assert!(binary_to_text(&"1".repeat(22)).is_err());
    }

    #[test]
    fn test_decode_rejects_surrogate() {
        // U+D800
        let err = binary_to_text("1101100000000000").unwrap_err();
        assert!(matches!(err, ToolError::InvalidFormat(_)));
    }
}
