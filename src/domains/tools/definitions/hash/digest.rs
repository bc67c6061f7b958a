//! Message digest tool.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use md5::Md5;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub fn label(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
#[schemars(inline)]
pub enum OutputEncoding {
    #[default]
    Hex,
    Base64,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HashParams {
    /// Text to hash (UTF-8)
    pub text: String,
    /// Digest algorithm
    #[serde(default)]
    pub algorithm: HashAlgorithm,
    /// Output encoding of the digest
    #[serde(default)]
    pub encoding: OutputEncoding,
}

/// Raw digest bytes of `data`.
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Md5 => Md5::digest(data).to_vec(),
        HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

pub fn hash_text(text: &str, algorithm: HashAlgorithm, encoding: OutputEncoding) -> String {
    let bytes = digest(algorithm, text.as_bytes());
    match encoding {
        OutputEncoding::Hex => hex::encode(bytes),
        OutputEncoding::Base64 => STANDARD.encode(bytes),
    }
}

/// Hash tool. Per-algorithm names are registered as presets.
pub struct HashTextTool;

#[async_trait::async_trait]
impl ToolDefinition for HashTextTool {
    const NAME: &'static str = "hash_text";
    const DESCRIPTION: &'static str =
        "Hash text with MD5, SHA1, SHA256, SHA384 or SHA512 and return the digest as hex or Base64.";
    const ACTION: &'static str = "hashing text";
    type Params = HashParams;

    async fn execute(params: HashParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Hash called with {}", params.algorithm.label());
        Ok(ToolOutcome::text(format!(
            "{} hash: {}",
            params.algorithm.label(),
            hash_text(&params.text, params.algorithm, params.encoding)
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_digests() {
        assert_eq!(
            hash_text("hello", HashAlgorithm::Md5, OutputEncoding::Hex),
            "5d41402abc4b2a76b9719d911017c592"
        );
        assert_eq!(
            hash_text("hello", HashAlgorithm::Sha1, OutputEncoding::Hex),
            "aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d"
        );
        assert_eq!(
            hash_text("hello", HashAlgorithm::Sha256, OutputEncoding::Hex),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(digest(HashAlgorithm::Sha384, b"").len(), 48);
        assert_eq!(digest(HashAlgorithm::Sha512, b"").len(), 64);
    }

    #[test]
    fn test_base64_output() {
        assert_eq!(
            hash_text("", HashAlgorithm::Md5, OutputEncoding::Base64),
            "1B2M2Y8AsgTpgAmY7PhCfg=="
        );
    }
}
