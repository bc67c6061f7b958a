//! Path confinement for the file tools.
//!
//! When `MCP_ROOT_PATH` is set, `file_read` and `file_tail` may only read
//! files that resolve under that directory.

pub mod path_validator;

pub use path_validator::{PathSecurityError, validate_path};
