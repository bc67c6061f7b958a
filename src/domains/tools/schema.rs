//! Input schemas for tools.
//!
//! A tool's input schema is the schemars schema of its `Params` type. The
//! same JSON is published by `tools/list` and compiled with `jsonschema` to
//! check incoming arguments before they are deserialized.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use jsonschema::error::ValidationErrorKind;
use jsonschema::{Draft, JSONSchema};
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde_json::Value;
use thiserror::Error;

use super::error::{ToolError, ToolResult};

/// An argument did not satisfy the published schema.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required field '{field}'")]
    Missing { field: String },

    #[error("field '{field}' is invalid: {reason}")]
    Invalid { field: String, reason: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending top-level field.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => field,
        }
    }
}

impl From<&jsonschema::ValidationError<'_>> for ValidationError {
    fn from(error: &jsonschema::ValidationError<'_>) -> Self {
        if let ValidationErrorKind::Required { property } = &error.kind {
            let field = match property {
                Value::String(name) => name.clone(),
                other => other.to_string(),
            };
            return Self::missing(field);
        }

        // "/headers/X-Count" reports against "headers"
        let path = error.instance_path.to_string();
        let field = path
            .trim_start_matches('/')
            .split('/')
            .next()
            .filter(|segment| !segment.is_empty())
            .unwrap_or("arguments")
            .to_string();
        Self::invalid(field, error.to_string())
    }
}

/// Published input schema of a tool, with its compiled validator.
#[derive(Clone)]
pub struct InputSchema {
    published: Arc<JsonObject>,
    validator: Arc<JSONSchema>,
}

impl InputSchema {
    /// Derive the schema of a parameter type.
    pub fn of<T: JsonSchema + Any>() -> ToolResult<Self> {
        Self::from_json(cached_schema_for_type::<T>())
    }

    /// Compile an already generated schema.
    pub fn from_json(published: Arc<JsonObject>) -> ToolResult<Self> {
        let mut document = published.as_ref().clone();
        // Generated schemas name draft 2020-12; the keywords they use are
        // all understood by the draft 7 validator.
        document.remove("$schema");
        let document = Value::Object(document);

        let validator = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&document)
            .map_err(|e| ToolError::internal(format!("invalid input schema: {}", e)))?;

        Ok(Self {
            published,
            validator: Arc::new(validator),
        })
    }

    /// The JSON Schema advertised in `tools/list`.
    pub fn published(&self) -> &Arc<JsonObject> {
        &self.published
    }

    /// Declared property names.
    pub fn properties(&self) -> Vec<&str> {
        self.published
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| props.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Schema of a single property.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.published.get("properties")?.get(name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.published
            .get("required")
            .and_then(Value::as_array)
            .is_some_and(|required| required.iter().any(|v| v.as_str() == Some(name)))
    }

    /// A copy that no longer publishes the named properties.
    ///
    /// Validation still runs against the full schema, so callers of the
    /// copy are expected to supply those fields themselves (presets do).
    pub fn without<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Self {
        let names: Vec<&str> = names.into_iter().collect();
        let mut published = self.published.as_ref().clone();

        if let Some(Value::Object(props)) = published.get_mut("properties") {
            props.retain(|key, _| !names.contains(&key.as_str()));
        }
        let now_empty = match published.get_mut("required") {
            Some(Value::Array(required)) => {
                required.retain(|v| v.as_str().is_none_or(|name| !names.contains(&name)));
                required.is_empty()
            }
            _ => false,
        };
        if now_empty {
            published.remove("required");
        }

        Self {
            published: Arc::new(published),
            validator: self.validator.clone(),
        }
    }

    /// Check `arguments` against the schema.
    ///
    /// Explicit `null` is treated like an absent field. Defaults are not
    /// filled here; serde does that when the parameters are deserialized.
    pub fn validate(&self, mut arguments: JsonObject) -> Result<JsonObject, ValidationError> {
        arguments.retain(|_, value| !value.is_null());
        let instance = Value::Object(arguments);

        let first_error = match self.validator.validate(&instance) {
            Ok(()) => None,
            Err(mut errors) => errors.next().map(|e| ValidationError::from(&e)),
        };
        if let Some(error) = first_error {
            return Err(error);
        }

        match instance {
            Value::Object(arguments) => Ok(arguments),
            _ => Err(ValidationError::invalid("arguments", "expected an object")),
        }
    }
}

impl PartialEq for InputSchema {
    fn eq(&self, other: &Self) -> bool {
        self.published == other.published
    }
}

impl fmt::Debug for InputSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputSchema")
            .field("published", &self.published)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct ConvertParams {
        /// Number to convert
        #[schemars(length(min = 1, max = 64))]
        number: String,
        /// Source base
        #[schemars(range(min = 2, max = 36))]
        from_base: u32,
        /// Target base
        #[serde(default = "default_to_base")]
        #[schemars(range(min = 2, max = 36))]
        to_base: u32,
    }

    fn default_to_base() -> u32 {
        10
    }

    #[derive(Deserialize, JsonSchema)]
    #[serde(rename_all = "lowercase")]
    #[schemars(inline)]
    enum Algorithm {
        Md5,
        Sha256,
    }

    #[derive(Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct AlgorithmParams {
        algorithm: Algorithm,
        #[serde(default)]
        filter: Option<String>,
        #[serde(default)]
        headers: Option<BTreeMap<String, String>>,
    }

    fn args(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    fn base_schema() -> InputSchema {
        InputSchema::of::<ConvertParams>().unwrap()
    }

    #[test]
    fn test_published_shape() {
        let schema = base_schema();
        let published = schema.published();
        assert_eq!(published["type"], json!("object"));
        assert_eq!(published["required"], json!(["number", "from_base"]));
        assert_eq!(published["properties"]["from_base"]["minimum"], json!(2));
        assert_eq!(published["properties"]["from_base"]["maximum"], json!(36));
        assert_eq!(published["properties"]["to_base"]["default"], json!(10));
        assert_eq!(published["properties"]["number"]["maxLength"], json!(64));
        assert_eq!(
            published["properties"]["number"]["description"],
            json!("Number to convert")
        );
    }

    #[test]
    fn test_validate_accepts_defaulted_field_absent() {
        let validated = base_schema()
            .validate(args(json!({ "number": "FF", "from_base": 16 })))
            .unwrap();
        assert!(!validated.contains_key("to_base"));
    }

    #[test]
    fn test_validate_missing_required() {
        let err = base_schema()
            .validate(args(json!({ "from_base": 16 })))
            .unwrap_err();
        assert_eq!(err, ValidationError::missing("number"));
        assert_eq!(err.to_string(), "missing required field 'number'");
    }

    #[test]
    fn test_validate_out_of_range_names_field() {
        let err = base_schema()
            .validate(args(json!({ "number": "1", "from_base": 37 })))
            .unwrap_err();
        assert_eq!(err.field(), "from_base");
        assert!(err.to_string().starts_with("field 'from_base' is invalid:"));
    }

    #[test]
    fn test_validate_wrong_type() {
        let err = base_schema()
            .validate(args(json!({ "number": 12, "from_base": 10 })))
            .unwrap_err();
        assert!(matches!(err, ValidationError::Invalid { .. }));
        assert_eq!(err.field(), "number");
    }

    #[test]
    fn test_validate_string_length() {
        let err = base_schema()
            .validate(args(json!({ "number": "", "from_base": 10 })))
            .unwrap_err();
        assert_eq!(err.field(), "number");
    }

    #[test]
    fn test_enum_membership() {
        let schema = InputSchema::of::<AlgorithmParams>().unwrap();
        assert!(schema.validate(args(json!({ "algorithm": "md5" }))).is_ok());
        let err = schema
            .validate(args(json!({ "algorithm": "crc32" })))
            .unwrap_err();
        assert_eq!(err.field(), "algorithm");
        assert_eq!(
            schema.property("algorithm").unwrap()["enum"],
            json!(["md5", "sha256"])
        );
    }

    #[test]
    fn test_null_counts_as_absent() {
        let schema = InputSchema::of::<AlgorithmParams>().unwrap();
        let validated = schema
            .validate(args(json!({ "algorithm": "md5", "filter": null })))
            .unwrap();
        assert!(!validated.contains_key("filter"));
        assert!(!schema.is_required("filter"));
    }

    #[test]
    fn test_string_map_values_are_checked() {
        let schema = InputSchema::of::<AlgorithmParams>().unwrap();
        assert!(
            schema
                .validate(args(
                    json!({ "algorithm": "md5", "headers": { "Accept": "text/plain" } })
                ))
                .is_ok()
        );
        let err = schema
            .validate(args(json!({ "algorithm": "md5", "headers": { "X-Count": 3 } })))
            .unwrap_err();
        assert_eq!(err.field(), "headers");
    }

    #[test]
    fn test_without_drops_properties() {
        let schema = base_schema().without(["from_base"]);
        assert!(schema.property("from_base").is_none());
        assert_eq!(schema.properties().len(), 2);
        assert_eq!(schema.published()["required"], json!(["number"]));

        let all_gone = base_schema().without(["number", "from_base"]);
        assert!(all_gone.published().get("required").is_none());
    }
}
