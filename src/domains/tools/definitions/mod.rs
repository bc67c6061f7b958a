//! Tool definitions module.
//!
//! Tools are grouped by category, one file per tool family. Each category
//! exposes a `register` function; [`register_all`] calls them in a fixed
//! order at startup.

pub mod color;
pub mod convert;
pub mod crypto;
pub mod data;
pub mod encoding;
pub mod hash;
pub mod network;
pub mod system;
pub mod text;

use super::{ToolRegistry, ToolResult};

/// Populate `registry` with every built-in tool, alias and preset.
///
/// Aliases and presets are registered after their canonical tool within the
/// same category, so the order below only matters for log output.
pub fn register_all(registry: &mut ToolRegistry) -> ToolResult<()> {
    encoding::register(registry)?;
    hash::register(registry)?;
    text::register(registry)?;
    data::register(registry)?;
    convert::register(registry)?;
    color::register(registry)?;
    crypto::register(registry)?;
    network::register(registry)?;
    system::register(registry)?;
    Ok(())
}
