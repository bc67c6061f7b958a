//! File reading tools.
//!
//! Paths go through the configured root directory check before any read.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::Deserialize;
use tokio::fs;
use tracing::{info, instrument, warn};

use crate::core::security::validate_path;
use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileReadParams {
    /// File path, relative to the working directory or absolute
    #[schemars(length(min = 1, max = 4096))]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct FileTailParams {
    /// File path, relative to the working directory or absolute
    #[schemars(length(min = 1, max = 4096))]
    pub path: String,
    /// Lines to return from the end of the file
    #[serde(default = "default_lines")]
    #[schemars(range(min = 1, max = 10000))]
    pub lines: usize,
}

fn default_lines() -> usize {
    10
}

/// Bytes read per step when scanning a file backwards.
const TAIL_CHUNK: u64 = 8 * 1024;

/// Canonicalizes and checks the path off the async runtime.
async fn resolve(path: &str, ctx: &ToolContext) -> ToolResult<PathBuf> {
    let input = path.to_string();
    let ctx = ctx.clone();
    let resolved = tokio::task::spawn_blocking(move || validate_path(&input, ctx.config()))
        .await
        .map_err(|e| ToolError::internal(e.to_string()))?
        .map_err(ToolError::execution)?;

    let metadata = fs::metadata(&resolved).await.map_err(|e| read_failure(path, &resolved, e))?;
    if !metadata.is_file() {
        return Err(ToolError::execution(format!("'{}' is not a regular file", path)));
    }
    Ok(resolved)
}

fn read_failure(path: &str, resolved: &Path, error: io::Error) -> ToolError {
    warn!("Failed to read '{}': {}", resolved.display(), error);
    ToolError::execution(format!("{}: {}", path, error))
}

#[instrument(skip(ctx))]
pub async fn read_file(path: &str, ctx: &ToolContext) -> ToolResult<String> {
    let resolved = resolve(path, ctx).await?;
    fs::read_to_string(&resolved)
        .await
        .map_err(|e| read_failure(path, &resolved, e))
}

#[instrument(skip(ctx))]
pub async fn read_tail(path: &str, count: usize, ctx: &ToolContext) -> ToolResult<String> {
    let resolved = resolve(path, ctx).await?;
    let target = resolved.clone();
    tokio::task::spawn_blocking(move || tail_file(&target, count, TAIL_CHUNK))
        .await
        .map_err(|e| ToolError::internal(e.to_string()))?
        .map_err(|e| read_failure(path, &resolved, e))
}

/// The last `count` lines of `content`.
pub fn tail_lines(content: &str, count: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(count);
    lines[start..].join("\n")
}

/// Last `count` lines of the file at `path`, reading backwards from the end
/// in `chunk`-byte steps until enough line breaks have been seen.
fn tail_file(path: &Path, count: usize, chunk: u64) -> io::Result<String> {
    let mut file = File::open(path)?;
    let mut pos = file.metadata()?.len();
    let mut chunks: Vec<Vec<u8>> = Vec::new();
    let mut newlines = 0;

    // count + 1 breaks leave `count` whole lines after the first one
    while pos > 0 && newlines <= count {
        let step = chunk.min(pos);
        pos -= step;
        let mut buf = vec![0; step as usize];
        file.seek(SeekFrom::Start(pos))?;
        file.read_exact(&mut buf)?;
        newlines += buf.iter().filter(|&&b| b == b'\n').count();
        chunks.push(buf);
    }

    let mut bytes: Vec<u8> = chunks.into_iter().rev().flatten().collect();
    if pos > 0 {
        if let Some(first_break) = bytes.iter().position(|&b| b == b'\n') {
            bytes.drain(..=first_break);
        }
    }

    let text = String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(tail_lines(&text, count))
}

pub struct FileReadTool;

#[async_trait::async_trait]
impl ToolDefinition for FileReadTool {
    const NAME: &'static str = "file_read";
    const DESCRIPTION: &'static str = "Read a UTF-8 text file and return its whole content.";
    const ACTION: &'static str = "reading file";
    type Params = FileReadParams;

    async fn execute(params: FileReadParams, ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("File read called: {}", params.path);
        Ok(ToolOutcome::text(read_file(&params.path, ctx).await?))
    }
}

pub struct FileTailTool;

#[async_trait::async_trait]
impl ToolDefinition for FileTailTool {
    const NAME: &'static str = "file_tail";
    const DESCRIPTION: &'static str = "Return the last N lines of a UTF-8 text file.";
    const ACTION: &'static str = "reading file tail";
    type Params = FileTailParams;

    async fn execute(params: FileTailParams, ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("File tail called: {} ({} lines)", params.path, params.lines);
        Ok(ToolOutcome::text(read_tail(&params.path, params.lines, ctx).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn write_lines(dir: &TempDir, name: &str, count: usize) -> String {
        let path = dir.path().join(name);
        let content: Vec<String> = (1..=count).map(|i| format!("line {}", i)).collect();
        std::fs::write(&path, content.join("\n")).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn rooted_context(root: &TempDir) -> ToolContext {
        let mut config = Config::default();
        config.security.root_path = Some(root.path().to_path_buf());
        ToolContext::new(Arc::new(config))
    }

    #[test]
    fn test_tail_lines() {
        assert_eq!(tail_lines("a\nb\nc\nd", 2), "c\nd");
        assert_eq!(tail_lines("a\nb", 10), "a\nb");
        assert_eq!(tail_lines("", 3), "");
    }

    #[tokio::test]
    async fn test_read_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(&dir, "notes.txt", 3);
        let content = read_file(&path, &ToolContext::default()).await.unwrap();
        assert_eq!(content, "line 1\nline 2\nline 3");
    }

    #[tokio::test]
    async fn test_tail_tool() {
        let dir = TempDir::new().unwrap();
        let path = write_lines(&dir, "log.txt", 50);
        let outcome = FileTailTool::execute(
            FileTailParams { path, lines: 3 },
            &ToolContext::default(),
        )
        .await
        .unwrap();
        assert_eq!(outcome.joined_text(), "line 48\nline 49\nline 50");
    }

    #[test]
    fn test_tail_file_across_chunks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.log");
        let mut content: String = (1..=2000).map(|i| format!("entry {} é\n", i)).collect();
        std::fs::write(&path, &content).unwrap();

        // small chunks split lines and multibyte characters
        assert_eq!(
            tail_file(&path, 2, 7).unwrap(),
            "entry 1999 é\nentry 2000 é"
        );
        assert_eq!(tail_file(&path, 3, TAIL_CHUNK).unwrap(), tail_lines(&content, 3));

        content.push_str("no newline");
        std::fs::write(&path, &content).unwrap();
        assert_eq!(tail_file(&path, 2, 5).unwrap(), "entry 2000 é\nno newline");
        assert_eq!(tail_file(&path, 5000, 64).unwrap(), tail_lines(&content, 5000));
    }

    #[test]
    fn test_tail_file_short_and_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.txt");
        std::fs::write(&path, "only\n").unwrap();
        assert_eq!(tail_file(&path, 10, 3).unwrap(), "only");
        std::fs::write(&path, "").unwrap();
        assert_eq!(tail_file(&path, 10, 3).unwrap(), "");
    }

    #[tokio::test]
    async fn test_tail_respects_root_path() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let outside_path = write_lines(&outside, "outside.txt", 5);
        let err = read_tail(&outside_path, 2, &rooted_context(&root))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.txt");
        let result = read_file(&missing.to_string_lossy(), &ToolContext::default()).await;
        assert!(matches!(result, Err(ToolError::ExecutionFailed(_))));
    }

    #[tokio::test]
    async fn test_directory_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = read_file(&dir.path().to_string_lossy(), &ToolContext::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_root_path_is_enforced() {
        let root = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();
        let inside_path = write_lines(&root, "inside.txt", 1);
        let outside_path = write_lines(&outside, "outside.txt", 1);
        let ctx = rooted_context(&root);

        assert!(read_file(&inside_path, &ctx).await.is_ok());
        let err = read_file(&outside_path, &ctx).await.unwrap_err();
        assert!(err.to_string().contains("outside"));
    }
}
