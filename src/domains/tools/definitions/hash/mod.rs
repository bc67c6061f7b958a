//! Hashing tools: message digests and HMAC.

pub mod digest;
pub mod mac;

pub use digest::HashTextTool;
pub use mac::HmacTool;

use serde_json::json;

use crate::domains::tools::{ToolDefinition, ToolRegistry, ToolResult};

pub fn register(registry: &mut ToolRegistry) -> ToolResult<()> {
    registry.register_tool::<HashTextTool>()?;
    registry.register_tool::<HmacTool>()?;

    for (name, algorithm, label) in [
        ("hash_md5", "md5", "MD5"),
        ("hash_sha1", "sha1", "SHA1"),
        ("hash_sha256", "sha256", "SHA256"),
        ("hash_sha512", "sha512", "SHA512"),
    ] {
        registry.register_preset(
            name,
            HashTextTool::NAME,
            &format!("Hash text with {} and return the digest.", label),
            json!({ "algorithm": algorithm }),
        )?;
    }
    Ok(())
}
