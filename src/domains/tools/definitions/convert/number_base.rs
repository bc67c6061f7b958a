//! Number base conversion.

use std::num::IntErrorKind;
use std::ops::RangeInclusive;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

pub const BASES: RangeInclusive<u32> = 2..=36;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct NumberBaseParams {
    /// Number to convert, optionally signed
    pub number: String,
    /// Base the number is written in
    #[schemars(range(min = 2, max = 36))]
    pub from_base: u32,
    /// Base to convert to
    #[schemars(range(min = 2, max = 36))]
    pub to_base: u32,
}

fn check_base(name: &str, base: u32) -> ToolResult<()> {
    if BASES.contains(&base) {
        Ok(())
    } else {
        Err(ToolError::invalid_arguments(format!(
            "{} must be between {} and {}, got {}",
            name,
            BASES.start(),
            BASES.end(),
            base
        )))
    }
}

/// Render `value` in `base` using lowercase digits.
fn render(value: i128, base: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut magnitude = value.unsigned_abs();
    let base = base as u128;
    let mut digits = Vec::new();
    while magnitude > 0 {
        let digit = (magnitude % base) as u32;
        digits.push(char::from_digit(digit, base as u32).unwrap_or('?'));
        magnitude /= base;
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

/// Convert `number` from `from_base` to `to_base`. Both bases are checked
/// before parsing.
pub fn convert_number_base(number: &str, from_base: u32, to_base: u32) -> ToolResult<String> {
    check_base("from_base", from_base)?;
    check_base("to_base", to_base)?;

    let trimmed = number.trim();
    let value = i128::from_str_radix(trimmed, from_base).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ToolError::invalid_arguments(
            format!("'{}' exceeds the 128-bit range", trimmed),
        ),
        _ => ToolError::invalid_number(format!(
            "'{}' is not a valid base-{} number",
            trimmed, from_base
        )),
    })?;
    Ok(render(value, to_base))
}

pub struct NumberBaseTool;

#[async_trait::async_trait]
impl ToolDefinition for NumberBaseTool {
    const NAME: &'static str = "convert_number_base";
    const DESCRIPTION: &'static str = "Convert an integer between bases 2 to 36.";
    const ACTION: &'static str = "converting number base";
    type Params = NumberBaseParams;

    async fn execute(params: NumberBaseParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!(
            "Number base conversion called: {} -> {}",
            params.from_base, params.to_base
        );
        let converted = convert_number_base(&params.number, params.from_base, params.to_base)?;
        Ok(ToolOutcome::text(format!(
            "Result (base {}): {}",
            params.to_base, converted
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_decimal() {
        assert_eq!(convert_number_base("FF", 16, 10).unwrap(), "255");
        assert_eq!(convert_number_base("ff", 16, 2).unwrap(), "11111111");
    }

    #[test]
    fn test_output_is_lowercase() {
        assert_eq!(convert_number_base("255", 10, 16).unwrap(), "ff");
        assert_eq!(convert_number_base("35", 10, 36).unwrap(), "z");
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(convert_number_base("0", 10, 2).unwrap(), "0");
        assert_eq!(convert_number_base("-10", 10, 16).unwrap(), "-a");
    }

    #[test]
    fn test_out_of_range_bases() {
        assert!(matches!(
            convert_number_base("1", 1, 10),
            Err(ToolError::InvalidArguments(_))
        ));
        assert!(matches!(
            convert_number_base("1", 10, 37),
            Err(ToolError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            convert_number_base("12G", 16, 10),
            Err(ToolError::InvalidNumber(_))
        ));
        assert!(matches!(
            convert_number_base("", 10, 2),
            Err(ToolError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_overflow_is_not_reported_as_bad_digits() {
        let err = convert_number_base("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", 36, 10).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("exceeds the 128-bit range"));

        let err = convert_number_base("-zzzzzzzzzzzzzzzzzzzzzzzzzzzzzz", 36, 10).unwrap_err();
        assert!(err.to_string().contains("exceeds the 128-bit range"));

        // i128::MAX still converts
        assert_eq!(
            convert_number_base("7fffffffffffffffffffffffffffffff", 16, 10).unwrap(),
            i128::MAX.to_string()
        );
    }
}
