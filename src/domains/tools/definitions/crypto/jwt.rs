//! JWT inspection tool.
//!
//! Decodes the header and payload of a compact JWS token. The signature is
//! reported but never verified.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JwtDecodeParams {
    /// Encoded JWT (header.payload.signature)
    pub token: String,
}

/// Decoded token.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct DecodedJwt {
    /// JOSE header
    pub header: Value,
    /// Claims
    pub payload: Value,
    /// Signature segment, as sent (base64url)
    pub signature: String,
    /// `iat` claim as RFC 3339, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<String>,
    /// `exp` claim as RFC 3339, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// Whether `exp` lies in the past
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired: Option<bool>,
}

fn decode_segment(segment: &str, part: &str) -> ToolResult<Value> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment.trim_end_matches('='))
        .map_err(|e| ToolError::invalid_format(format!("{} is not valid base64url: {}", part, e)))?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ToolError::invalid_format(format!("{} is not valid JSON: {}", part, e)))
}

fn claim_time(payload: &Value, claim: &str) -> Option<DateTime<Utc>> {
    let seconds = payload.get(claim)?.as_i64()?;
    DateTime::from_timestamp(seconds, 0)
}

/// Split and decode a token. Anything but exactly three parts is a format
/// error.
#[instrument(skip_all)]
pub fn decode_jwt(token: &str) -> ToolResult<DecodedJwt> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(ToolError::invalid_format(format!(
            "JWT must have 3 dot-separated parts, found {}",
            parts.len()
        )));
    }

    let header = decode_segment(parts[0], "header")?;
    let payload = decode_segment(parts[1], "payload")?;
    let issued_at = claim_time(&payload, "iat");
    let expires_at = claim_time(&payload, "exp");

    Ok(DecodedJwt {
        header,
        payload,
        signature: parts[2].to_string(),
        issued_at: issued_at.map(|t| t.to_rfc3339()),
        expires_at: expires_at.map(|t| t.to_rfc3339()),
        expired: expires_at.map(|t| t < Utc::now()),
    })
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

pub struct JwtDecodeTool;

#[async_trait::async_trait]
impl ToolDefinition for JwtDecodeTool {
    const NAME: &'static str = "jwt_decode";
    const DESCRIPTION: &'static str =
        "Decode the header and payload of a JWT without verifying its signature.";
    const ACTION: &'static str = "decoding JWT";
    type Params = JwtDecodeParams;

    fn output_schema() -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<DecodedJwt>())
    }

    async fn execute(params: JwtDecodeParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("JWT decode called");
        let decoded = decode_jwt(&params.token)?;

        let mut text = format!(
            "Header:\n{}\n\nPayload:\n{}\n\nSignature: {} (not verified)",
            pretty(&decoded.header),
            pretty(&decoded.payload),
            decoded.signature
        );
        if let Some(issued_at) = &decoded.issued_at {
            text.push_str(&format!("\nIssued at: {}", issued_at));
        }
        if let Some(expires_at) = &decoded.expires_at {
            let state = if decoded.expired == Some(true) { "expired" } else { "valid" };
            text.push_str(&format!("\nExpires at: {} ({})", expires_at, state));
        }

        Ok(ToolOutcome::text(text).with_structured(&decoded))
    }
}
