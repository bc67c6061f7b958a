//! Conversion between JSON and TOML documents.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Number, Value as JsonValue};
use toml::{Table, Value as TomlValue};
use tracing::info;

use super::json::parse_json;
use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JsonToTomlParams {
    /// JSON document
    pub json: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TomlToJsonParams {
    /// TOML document
    pub toml: String,
}

fn json_to_toml_value(value: JsonValue, path: &str) -> ToolResult<TomlValue> {
    Ok(match value {
        JsonValue::Null => {
            return Err(ToolError::invalid_format(format!(
                "TOML has no null value (at '{}')",
                path
            )));
        }
        JsonValue::Bool(b) => TomlValue::Boolean(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => TomlValue::Integer(i),
            None => TomlValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        JsonValue::String(s) => TomlValue::String(s),
        JsonValue::Array(items) => TomlValue::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, item)| json_to_toml_value(item, &format!("{}[{}]", path, i)))
                .collect::<ToolResult<_>>()?,
        ),
        JsonValue::Object(map) => TomlValue::Table(json_object_to_table(map, path)?),
    })
}

fn json_object_to_table(map: Map<String, JsonValue>, path: &str) -> ToolResult<Table> {
    let mut table = Table::new();
    for (key, value) in map {
        let child = if path.is_empty() { key.clone() } else { format!("{}.{}", path, key) };
        table.insert(key, json_to_toml_value(value, &child)?);
    }
    Ok(table)
}

fn toml_to_json_value(value: TomlValue) -> ToolResult<JsonValue> {
    Ok(match value {
        TomlValue::String(s) => JsonValue::String(s),
        TomlValue::Integer(i) => JsonValue::Number(i.into()),
        TomlValue::Float(f) => Number::from_f64(f)
            .map(JsonValue::Number)
            .ok_or_else(|| ToolError::invalid_format(format!("{} has no JSON representation", f)))?,
        TomlValue::Boolean(b) => JsonValue::Bool(b),
        TomlValue::Datetime(dt) => JsonValue::String(dt.to_string()),
        TomlValue::Array(items) => JsonValue::Array(
            items
                .into_iter()
                .map(toml_to_json_value)
                .collect::<ToolResult<_>>()?,
        ),
        TomlValue::Table(table) => JsonValue::Object(
            table
                .into_iter()
                .map(|(k, v)| Ok((k, toml_to_json_value(v)?)))
                .collect::<ToolResult<_>>()?,
        ),
    })
}

/// Convert a JSON object document to TOML. The top level must be an object.
pub fn json_to_toml(input: &str) -> ToolResult<String> {
    let JsonValue::Object(map) = parse_json(input)? else {
        return Err(ToolError::invalid_format("top-level JSON value must be an object"));
    };
    let table = json_object_to_table(map, "")?;
    toml::to_string_pretty(&table).map_err(ToolError::execution)
}

/// Convert a TOML document to pretty-printed JSON. Datetimes become strings.
pub fn toml_to_json(input: &str) -> ToolResult<String> {
    let table: Table = input
        .parse()
        .map_err(|e: toml::de::Error| ToolError::invalid_format(format!("invalid TOML: {}", e.message())))?;
    let value = toml_to_json_value(TomlValue::Table(table))?;
    serde_json::to_string_pretty(&value).map_err(ToolError::execution)
}

pub struct JsonToTomlTool;

#[async_trait::async_trait]
impl ToolDefinition for JsonToTomlTool {
    const NAME: &'static str = "json_to_toml";
    const DESCRIPTION: &'static str = "Convert a JSON object into a TOML document.";
    const ACTION: &'static str = "converting JSON to TOML";
    type Params = JsonToTomlParams;

    async fn execute(params: JsonToTomlParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("JSON to TOML called");
        Ok(ToolOutcome::text(json_to_toml(&params.json)?))
    }
}

pub struct TomlToJsonTool;

#[async_trait::async_trait]
impl ToolDefinition for TomlToJsonTool {
    const NAME: &'static str = "toml_to_json";
    const DESCRIPTION: &'static str = "Convert a TOML document into pretty-printed JSON.";
    const ACTION: &'static str = "converting TOML to JSON";
    type Params = TomlToJsonParams;

    async fn execute(params: TomlToJsonParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("TOML to JSON called");
        Ok(ToolOutcome::text(toml_to_json(&params.toml)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TOML_DOC: &str = r#"
title = "example"
ratio = 0.5
tags = ["a", "b"]

[owner]
name = "Tom"
active = true

[[servers]]
host = "alpha"
port = 8001

[[servers]]
host = "beta"
port = 8002
"#;

    #[test]
    fn test_toml_json_toml_preserves_structure() {
        let json_text = toml_to_json(TOML_DOC).unwrap();
        let back = json_to_toml(&json_text).unwrap();
        let original: Table = TOML_DOC.parse().unwrap();
        let round_tripped: Table = back.parse().unwrap();
        assert_eq!(original, round_tripped);
    }

    #[test]
    fn test_json_toml_json_preserves_structure() {
        let input = json!({
            "name": "demo",
            "version": 3,
            "nested": { "enabled": false, "weights": [1.5, 2.5] },
            "items": [{ "id": 1 }, { "id": 2 }]
        });
        let toml_text = json_to_toml(&input.to_string()).unwrap();
        let back: JsonValue = serde_json::from_str(&toml_to_json(&toml_text).unwrap()).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_datetime_becomes_string() {
        let json_text = toml_to_json("when = 1979-05-27T07:32:00Z").unwrap();
        let value: JsonValue = serde_json::from_str(&json_text).unwrap();
        assert_eq!(value["when"], json!("1979-05-27T07:32:00Z"));
    }

    #[test]
    fn test_null_is_rejected() {
        let err = json_to_toml(r#"{"a": {"b": null}}"#).unwrap_err();
        assert!(err.to_string().contains("a.b"));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(json_to_toml("[1, 2]"), Err(ToolError::InvalidFormat(_))));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(toml_to_json("= broken"), Err(ToolError::InvalidFormat(_))));
    }
}
