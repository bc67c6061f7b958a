//! HTTP request tool.
//!
//! The only tool with its own deadline: the whole exchange, body included,
//! is cancelled after [`HTTP_TIMEOUT_SECS`].

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::Method;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use url::Url;

use crate::domains::tools::{
    ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult,
    network_failure,
};

pub const HTTP_TIMEOUT_SECS: u64 = 10;

/// Response bodies beyond this size are cut off.
const MAX_BODY_CHARS: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[schemars(inline)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl From<HttpMethod> for Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Options => Method::OPTIONS,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Method::from(*self).fmt(f)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HttpRequestParams {
    /// Absolute http or https URL
    pub url: String,
    /// Request method
    #[serde(default)]
    pub method: HttpMethod,
    /// Extra request headers
    #[serde(default)]
    pub headers: Option<BTreeMap<String, String>>,
    /// Request body
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Status, headers and body as three separate sections.
    pub fn into_sections(self) -> [String; 3] {
        let headers = self
            .headers
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("\n");
        [
            format!("Status: {}", self.status),
            format!("Headers:\n{}", headers),
            format!("Body:\n{}", self.body),
        ]
    }
}

pub fn check_url(input: &str) -> ToolResult<Url> {
    let url = Url::parse(input.trim())
        .map_err(|e| ToolError::invalid_arguments(format!("invalid URL '{}': {}", input, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ToolError::invalid_arguments(format!(
            "unsupported scheme '{}', expected http or https",
            other
        ))),
    }
}

fn truncate(mut body: String) -> String {
    if body.len() > MAX_BODY_CHARS {
        let mut cut = MAX_BODY_CHARS;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
        body.push_str("\n[truncated]");
    }
    body
}

async fn exchange(params: &HttpRequestParams, url: Url) -> ToolResult<HttpResponse> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(ToolError::execution)?;

    let mut request = client.request(params.method.into(), url);
    for (name, value) in params.headers.iter().flatten() {
        request = request.header(name, value);
    }
    if let Some(body) = &params.body {
        request = request.body(body.clone());
    }

    let response = request.send().await.map_err(ToolError::execution)?;
    let status = response.status().to_string();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response.text().await.map_err(ToolError::execution)?;

    Ok(HttpResponse {
        status,
        headers,
        body: truncate(body),
    })
}

#[instrument(skip_all, fields(method = %params.method, url = %params.url))]
pub async fn send(params: &HttpRequestParams) -> ToolResult<HttpResponse> {
    let url = check_url(&params.url)?;
    tokio::time::timeout(Duration::from_secs(HTTP_TIMEOUT_SECS), exchange(params, url))
        .await
        .map_err(|_| ToolError::Timeout(HTTP_TIMEOUT_SECS))?
}

pub struct HttpRequestTool;

#[async_trait::async_trait]
impl ToolDefinition for HttpRequestTool {
    const NAME: &'static str = "http_request";
    const DESCRIPTION: &'static str =
        "Send an HTTP request and return the status, response headers and body (10 second timeout).";
    const ACTION: &'static str = "sending HTTP request";
    type Params = HttpRequestParams;

    async fn execute(params: HttpRequestParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("HTTP request called: {} {}", params.method, params.url);
        let response = send(&params).await?;
        Ok(ToolOutcome::sections(response.into_sections()))
    }

    fn failure_message(error: &ToolError) -> String {
        network_failure("Request", error)
    }
}
