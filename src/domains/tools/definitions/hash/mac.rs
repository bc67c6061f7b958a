//! HMAC generation tool.

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use schemars::JsonSchema;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};
use tracing::info;

use super::digest::HashAlgorithm;
use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HmacParams {
    /// Message to authenticate
    pub message: String,
    /// Secret key
    pub key: String,
    /// Digest algorithm
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

fn mac_hex<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> ToolResult<String> {
    let mut mac = <M as Mac>::new_from_slice(key).map_err(ToolError::execution)?;
    mac.update(message);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Hex-encoded HMAC of `message` under `key`.
pub fn generate_hmac(message: &str, key: &str, algorithm: HashAlgorithm) -> ToolResult<String> {
    let (key, message) = (key.as_bytes(), message.as_bytes());
    match algorithm {
        HashAlgorithm::Md5 => mac_hex::<Hmac<Md5>>(key, message),
        HashAlgorithm::Sha1 => mac_hex::<Hmac<Sha1>>(key, message),
        HashAlgorithm::Sha256 => mac_hex::<Hmac<Sha256>>(key, message),
        HashAlgorithm::Sha384 => mac_hex::<Hmac<Sha384>>(key, message),
        HashAlgorithm::Sha512 => mac_hex::<Hmac<Sha512>>(key, message),
    }
}

/// HMAC tool.
pub struct HmacTool;

#[async_trait::async_trait]
impl ToolDefinition for HmacTool {
    const NAME: &'static str = "generate_hmac";
    const DESCRIPTION: &'static str =
        "Generate a hex HMAC of a message with a secret key (MD5, SHA1, SHA256, SHA384, SHA512).";
    const ACTION: &'static str = "generating HMAC";
    type Params = HmacParams;

    async fn execute(params: HmacParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("HMAC called with {}", params.algorithm.label());
        let digest = generate_hmac(&params.message, &params.key, params.algorithm)?;
        Ok(ToolOutcome::text(format!(
            "HMAC-{}: {}",
            params.algorithm.label(),
            digest
        )))
    }
}
