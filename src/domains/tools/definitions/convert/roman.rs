//! Roman numerals.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

static CANONICAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("roman numeral pattern is valid")
});

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RomanEncodeParams {
    /// Integer from 1 to 3999
    #[schemars(range(min = 1, max = 3999))]
    pub number: u32,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RomanDecodeParams {
    /// Roman numeral, e.g. MMXXIV
    pub numeral: String,
}

pub fn to_roman(number: u32) -> ToolResult<String> {
    if !(1..=3999).contains(&number) {
        return Err(ToolError::invalid_number(format!(
            "{} is outside the range 1 to 3999",
            number
        )));
    }
    let mut remaining = number;
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    Ok(out)
}

/// Parse a canonical numeral; non-canonical forms such as "IIII" are rejected.
pub fn from_roman(numeral: &str) -> ToolResult<u32> {
    let numeral = numeral.trim().to_uppercase();
    if numeral.is_empty() || !CANONICAL.is_match(&numeral) {
        return Err(ToolError::invalid_format(format!(
            "'{}' is not a valid roman numeral",
            numeral
        )));
    }

    let mut rest = numeral.as_str();
    let mut total = 0;
    for (value, symbol) in NUMERALS {
        while let Some(stripped) = rest.strip_prefix(symbol) {
            total += value;
            rest = stripped;
        }
    }
    Ok(total)
}

pub struct RomanEncodeTool;

#[async_trait::async_trait]
impl ToolDefinition for RomanEncodeTool {
    const NAME: &'static str = "roman_encode";
    const DESCRIPTION: &'static str = "Convert an integer from 1 to 3999 into a roman numeral.";
    const ACTION: &'static str = "encoding roman numeral";
    type Params = RomanEncodeParams;

    async fn execute(params: RomanEncodeParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Roman encode called with {}", params.number);
        Ok(ToolOutcome::text(format!("Roman numeral: {}", to_roman(params.number)?)))
    }
}

pub struct RomanDecodeTool;

#[async_trait::async_trait]
impl ToolDefinition for RomanDecodeTool {
    const NAME: &'static str = "roman_decode";
    const DESCRIPTION: &'static str = "Convert a roman numeral into an integer.";
    const ACTION: &'static str = "decoding roman numeral";
    type Params = RomanDecodeParams;

    async fn execute(params: RomanDecodeParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Roman decode called");
        Ok(ToolOutcome::text(format!("Number: {}", from_roman(&params.numeral)?)))
    }
}
