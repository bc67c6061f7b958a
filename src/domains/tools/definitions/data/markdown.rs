//! Markdown rendering.

use pulldown_cmark::{Options, Parser, html};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MarkdownParams {
    /// Markdown source
    pub markdown: String,
}

/// Render CommonMark with tables and strikethrough enabled.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

pub struct MarkdownToHtmlTool;

#[async_trait::async_trait]
impl ToolDefinition for MarkdownToHtmlTool {
    const NAME: &'static str = "markdown_to_html";
    const DESCRIPTION: &'static str = "Render Markdown (CommonMark with tables and strikethrough) to HTML.";
    const ACTION: &'static str = "converting Markdown";
    type Params = MarkdownParams;

    async fn execute(params: MarkdownParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Markdown to HTML called");
        Ok(ToolOutcome::text(markdown_to_html(&params.markdown)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        assert_eq!(markdown_to_html("# Title"), "<h1>Title</h1>\n");
        assert_eq!(
            markdown_to_html("Some **bold** text"),
            "<p>Some <strong>bold</strong> text</p>\n"
        );
    }

    #[test]
    fn test_extensions() {
        assert!(markdown_to_html("~~gone~~").contains("<del>gone</del>"));
        let table = markdown_to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(table.contains("<table>"));
        assert!(table.contains("<td>1</td>"));
    }
}
