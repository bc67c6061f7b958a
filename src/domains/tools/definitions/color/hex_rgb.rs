//! Hex and RGB color notation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HexParams {
    /// Hex color, e.g. #ff8000 or f80
    pub hex: String,
}

/// Parse `#rgb` or `#rrggbb`; the leading `#` is optional.
pub fn parse_hex(input: &str) -> ToolResult<Rgb> {
    let digits = input.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ToolError::invalid_format(format!("'{}' is not a hex color", input)));
    }

    let expanded: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_string(),
        _ => {
            return Err(ToolError::invalid_format(format!(
                "'{}' must have 3 or 6 hex digits",
                input
            )));
        }
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map_err(|e| ToolError::invalid_format(e.to_string()))
    };
    Ok(Rgb {
        r: channel(0)?,
        g: channel(2)?,
        b: channel(4)?,
    })
}

pub struct HexToRgbTool;

#[async_trait::async_trait]
impl ToolDefinition for HexToRgbTool {
    const NAME: &'static str = "color_hex_to_rgb";
    const DESCRIPTION: &'static str = "Convert a hex color (#rgb or #rrggbb) to RGB components.";
    const ACTION: &'static str = "converting hex to RGB";
    type Params = HexParams;

    async fn execute(params: HexParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Hex to RGB called");
        let rgb = parse_hex(&params.hex)?;
        Ok(ToolOutcome::text(format!("RGB: rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)).with_structured(&rgb))
    }
}

pub struct RgbToHexTool;

#[async_trait::async_trait]
impl ToolDefinition for RgbToHexTool {
    const NAME: &'static str = "color_rgb_to_hex";
    const DESCRIPTION: &'static str = "Convert RGB components (0-255) to a hex color.";
    const ACTION: &'static str = "converting RGB to hex";
    type Params = Rgb;

    async fn execute(params: Rgb, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("RGB to hex called");
        Ok(ToolOutcome::text(format!("HEX: {}", params.to_hex())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#ff8000").unwrap(), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(parse_hex("F80").unwrap(), Rgb { r: 255, g: 136, b: 0 });
    }

    #[test]
    fn test_parse_hex_rejects_bad_input() {
        assert!(parse_hex("#ff80").is_err());
        assert!(parse_hex("#gg0000").is_err());
        assert!(parse_hex("").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb { r: 255, g: 128, b: 0 }.to_hex(), "#FF8000");
        assert_eq!(Rgb { r: 0, g: 0, b: 0 }.to_hex(), "#000000");
    }

    #[tokio::test]
    async fn test_rgb_out_of_range_rejected_before_execute() {
        let descriptor = crate::domains::tools::ToolDescriptor::of::<RgbToHexTool>().unwrap();
        let args = serde_json::json!({ "r": 0, "g": -1, "b": 0 });
        let outcome = descriptor
            .invoke(args.as_object().cloned().unwrap(), ToolContext::default())
            .await;
        assert!(outcome.is_error());
        assert!(outcome.joined_text().starts_with("Invalid arguments:"));
        assert!(outcome.joined_text().contains("'g'"));
    }
}
