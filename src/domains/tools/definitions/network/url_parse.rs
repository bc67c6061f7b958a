//! URL parsing tool.

use std::sync::Arc;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UrlParseParams {
    /// Absolute URL to parse
    pub url: String,
}

/// Components of a parsed URL.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct UrlParts {
    pub protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Explicit port, or the scheme's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Decoded query pairs, in order; keys may repeat
    pub query_params: Vec<(String, String)>,
    pub path_segments: Vec<String>,
}

pub fn parse_url(input: &str) -> ToolResult<UrlParts> {
    let url = Url::parse(input.trim())
        .map_err(|e| ToolError::invalid_format(format!("'{}' is not a valid URL: {}", input, e)))?;

    Ok(UrlParts {
        protocol: url.scheme().to_string(),
        host: url.host_str().map(str::to_string),
        port: url.port_or_known_default(),
        path: url.path().to_string(),
        query: url.query().map(str::to_string),
        fragment: url.fragment().map(str::to_string),
        username: url.username().to_string(),
        query_params: url.query_pairs().into_owned().collect(),
        path_segments: url
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
    })
}

impl UrlParts {
    fn report(&self) -> String {
        let mut lines = vec![format!("Protocol: {}", self.protocol)];
        if let Some(host) = &self.host {
            lines.push(format!("Host: {}", host));
        }
        if let Some(port) = self.port {
            lines.push(format!("Port: {}", port));
        }
        lines.push(format!("Path: {}", self.path));
        if let Some(query) = &self.query {
            lines.push(format!("Query: {}", query));
        }
        if let Some(fragment) = &self.fragment {
            lines.push(format!("Fragment: {}", fragment));
        }
        if !self.username.is_empty() {
            lines.push(format!("Username: {}", self.username));
        }
        if !self.query_params.is_empty() {
            lines.push("Query parameters:".to_string());
            lines.extend(self.query_params.iter().map(|(k, v)| format!("  {} = {}", k, v)));
        }
        if !self.path_segments.is_empty() {
            lines.push("Path segments:".to_string());
            lines.extend(self.path_segments.iter().map(|s| format!("  {}", s)));
        }
        lines.join("\n")
    }
}

pub struct UrlParseTool;

#[async_trait::async_trait]
impl ToolDefinition for UrlParseTool {
    const NAME: &'static str = "url_parse";
    const DESCRIPTION: &'static str =
        "Parse a URL into protocol, host, port, path, query parameters, fragment and path segments.";
    const ACTION: &'static str = "parsing URL";
    type Params = UrlParseParams;

    fn output_schema() -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<UrlParts>())
    }

    async fn execute(params: UrlParseParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("URL parse called");
        let parts = parse_url(&params.url)?;
        Ok(ToolOutcome::text(parts.report()).with_structured(&parts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_url() {
        let parts = parse_url("https://user@example.com:8443/api/v1/items?q=rust&page=2#top").unwrap();
        assert_eq!(parts.protocol, "https");
        assert_eq!(parts.host.as_deref(), Some("example.com"));
        assert_eq!(parts.port, Some(8443));
        assert_eq!(parts.path, "/api/v1/items");
        assert_eq!(parts.fragment.as_deref(), Some("top"));
        assert_eq!(parts.username, "user");
        assert_eq!(
            parts.query_params,
            vec![("q".to_string(), "rust".to_string()), ("page".to_string(), "2".to_string())]
        );
        assert_eq!(parts.path_segments, vec!["api", "v1", "items"]);
    }

    #[test]
    fn test_default_port_and_decoding() {
        let parts = parse_url("http://example.com/?name=a%20b").unwrap();
        assert_eq!(parts.port, Some(80));
        assert_eq!(parts.query_params, vec![("name".to_string(), "a b".to_string())]);
        assert!(parts.path_segments.is_empty());
    }

    #[test]
    fn test_report_sections() {
        let report = parse_url("https://example.com/a?x=1").unwrap().report();
        assert!(report.contains("Protocol: https"));
        assert!(report.contains("Query parameters:\n  x = 1"));
        assert!(report.contains("Path segments:\n  a"));
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(matches!(parse_url("/just/a/path"), Err(ToolError::InvalidFormat(_))));
    }
}
