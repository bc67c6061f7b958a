//! Tool descriptors - the registered unit of the tool registry.
//!
//! A descriptor bundles a tool's metadata, schema and a type-erased handler.
//! Aliases and presets are descriptors that reuse another descriptor's
//! handler, so legacy names never duplicate logic.

use std::fmt;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::model::{JsonObject, Tool};
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ToolResult;
use super::handlers::{ToolContext, ToolDefinition};
use super::outcome::ToolOutcome;
use super::schema::InputSchema;

type ToolFn = Arc<dyn Fn(JsonObject, ToolContext) -> BoxFuture<'static, ToolOutcome> + Send + Sync>;

/// Registered metadata and handler of one tool name.
#[derive(Clone)]
pub struct ToolDescriptor {
    name: String,
    description: String,
    schema: InputSchema,
    output_schema: Option<Arc<JsonObject>>,
    pinned: JsonObject,
    handler: ToolFn,
}

impl ToolDescriptor {
    /// Build the descriptor of a tool definition.
    ///
    /// The handler validates against the schema of `T::Params`,
    /// deserializes, runs `T::execute`, and turns any error into a failure
    /// outcome. Nothing it does can escape as a raw error. Fails only if the
    /// generated schema does not compile.
    pub fn of<T: ToolDefinition>() -> ToolResult<Self> {
        let schema = InputSchema::of::<T::Params>()?;
        let validator = schema.clone();

        let handler: ToolFn = Arc::new(move |arguments: JsonObject, ctx: ToolContext| {
            let validated = validator.validate(arguments);
            async move {
                let arguments = match validated {
                    Ok(arguments) => arguments,
                    Err(e) => {
                        warn!(tool = T::NAME, "Argument validation failed: {}", e);
                        return ToolOutcome::failure(format!("Invalid arguments: {}", e));
                    }
                };

                let params: T::Params = match serde_json::from_value(Value::Object(arguments)) {
                    Ok(params) => params,
                    Err(e) => {
                        warn!(tool = T::NAME, "Argument deserialization failed: {}", e);
                        return ToolOutcome::failure(format!("Invalid arguments: {}", e));
                    }
                };

                match T::execute(params, &ctx).await {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!(tool = T::NAME, "Tool execution failed: {}", e);
                        ToolOutcome::failure(T::failure_message(&e))
                    }
                }
            }
            .boxed()
        });

        Ok(Self {
            name: T::NAME.to_string(),
            description: T::DESCRIPTION.to_string(),
            schema,
            output_schema: T::output_schema(),
            pinned: JsonObject::new(),
            handler,
        })
    }

    /// The same tool under another name.
    pub fn alias(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: format!("{} (Alias of `{}`.)", self.description, self.name),
            ..self.clone()
        }
    }

    /// The same tool under another name with some arguments fixed.
    ///
    /// Pinned fields disappear from the published schema and always
    /// override whatever the caller sends.
    pub fn preset(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        pinned: JsonObject,
    ) -> Self {
        let mut merged = self.pinned.clone();
        merged.extend(pinned);
        Self {
            name: name.into(),
            description: description.into(),
            schema: self.schema.without(merged.keys().map(String::as_str)),
            output_schema: self.output_schema.clone(),
            pinned: merged,
            handler: self.handler.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schema(&self) -> &InputSchema {
        &self.schema
    }

    /// Arguments fixed by a preset.
    pub fn pinned(&self) -> &JsonObject {
        &self.pinned
    }

    /// Run the handler with the caller's arguments.
    pub async fn invoke(&self, mut arguments: JsonObject, ctx: ToolContext) -> ToolOutcome {
        for (key, value) in &self.pinned {
            arguments.insert(key.clone(), value.clone());
        }
        debug!(tool = %self.name, "Invoking tool handler");
        (self.handler)(arguments, ctx).await
    }

    /// MCP metadata for `tools/list`.
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: self.schema.published().clone(),
            annotations: None,
            output_schema: self.output_schema.clone(),
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("schema", &self.schema)
            .field("pinned", &self.pinned)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::error::ToolError;
    use schemars::JsonSchema;
    use serde::Deserialize;
    use serde_json::json;

    struct RepeatTool;

    #[derive(Deserialize, JsonSchema)]
    struct RepeatParams {
        /// Text to repeat
        text: String,
        /// Repetitions
        #[serde(default = "default_times")]
        #[schemars(range(min = 0, max = 5))]
        times: usize,
    }

    fn default_times() -> usize {
        2
    }

    #[async_trait::async_trait]
    impl ToolDefinition for RepeatTool {
        const NAME: &'static str = "repeat";
        const DESCRIPTION: &'static str = "Repeat text.";
        const ACTION: &'static str = "repeating text";
        type Params = RepeatParams;

        async fn execute(params: RepeatParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
            if params.times == 0 {
                return Err(ToolError::invalid_arguments("nothing to repeat"));
            }
            Ok(ToolOutcome::text(params.text.repeat(params.times)))
        }
    }

    fn args(value: Value) -> JsonObject {
        value.as_object().cloned().unwrap()
    }

    fn repeat() -> ToolDescriptor {
        ToolDescriptor::of::<RepeatTool>().unwrap()
    }

    #[tokio::test]
    async fn test_invoke_success_with_default() {
        let outcome = repeat()
            .invoke(args(json!({ "text": "ab" })), ToolContext::default())
            .await;
        assert_eq!(outcome, ToolOutcome::text("abab"));
    }

    #[tokio::test]
    async fn test_validation_failure_is_an_outcome() {
        let outcome = repeat()
            .invoke(args(json!({ "text": "ab", "times": 9 })), ToolContext::default())
            .await;
        assert!(outcome.is_error());
        assert!(
            outcome
                .joined_text()
                .starts_with("Invalid arguments: field 'times' is invalid:")
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_named() {
        let outcome = repeat().invoke(JsonObject::new(), ToolContext::default()).await;
        assert_eq!(
            outcome.joined_text(),
            "Invalid arguments: missing required field 'text'"
        );
    }

    #[tokio::test]
    async fn test_execution_failure_uses_action() {
        let outcome = repeat()
            .invoke(args(json!({ "text": "ab", "times": 0 })), ToolContext::default())
            .await;
        assert_eq!(
            outcome.joined_text(),
            "Error repeating text: Invalid arguments: nothing to repeat"
        );
    }

    #[tokio::test]
    async fn test_preset_pins_arguments() {
        let triple = repeat().preset("repeat_three", "Repeat three times.", args(json!({ "times": 3 })));

        assert!(triple.schema().property("times").is_none());
        assert!(triple.to_tool().input_schema["properties"].get("times").is_none());
        let outcome = triple
            .invoke(args(json!({ "text": "x", "times": 1 })), ToolContext::default())
            .await;
        assert_eq!(outcome, ToolOutcome::text("xxx"));
    }

    #[test]
    fn test_alias_keeps_schema() {
        let descriptor = repeat();
        let alias = descriptor.alias("echo-repeat");
        assert_eq!(alias.name(), "echo-repeat");
        assert_eq!(alias.schema(), descriptor.schema());
        assert!(alias.description().contains("Alias of `repeat`"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = repeat().to_tool();
        assert_eq!(tool.name, "repeat");
        assert_eq!(tool.input_schema["required"], json!(["text"]));
        assert_eq!(tool.input_schema["properties"]["times"]["default"], json!(2));
    }
}
