//! Process listing.

use schemars::JsonSchema;
use serde::Deserialize;
use sysinfo::System;
use tracing::info;

use crate::domains::tools::{ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ProcessListParams {
    /// Case-insensitive substring of the process name
    #[serde(default)]
    pub filter: Option<String>,
    /// Maximum number of processes listed
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 500))]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub name: String,
    pub memory_kib: u64,
    pub cpu_percent: f32,
}

/// Processes whose name contains `filter` (case-insensitive), highest memory
/// first, at most `limit` entries.
pub fn select(mut entries: Vec<ProcessEntry>, filter: Option<&str>, limit: usize) -> Vec<ProcessEntry> {
    if let Some(filter) = filter.map(str::to_lowercase).filter(|f| !f.is_empty()) {
        entries.retain(|p| p.name.to_lowercase().contains(&filter));
    }
    entries.sort_by(|a, b| b.memory_kib.cmp(&a.memory_kib).then(a.pid.cmp(&b.pid)));
    entries.truncate(limit);
    entries
}

fn snapshot() -> Vec<ProcessEntry> {
    let sys = System::new_all();
    sys.processes()
        .values()
        .map(|process| ProcessEntry {
            pid: process.pid().as_u32(),
            name: process.name().to_string(),
            memory_kib: process.memory() / 1024,
            cpu_percent: process.cpu_usage(),
        })
        .collect()
}

fn render(entries: &[ProcessEntry], total: usize) -> String {
    let mut lines = vec![format!(
        "{:>8}  {:>10}  {:>6}  NAME",
        "PID", "MEM (KiB)", "CPU%"
    )];
    lines.extend(entries.iter().map(|p| {
        format!(
            "{:>8}  {:>10}  {:>6.1}  {}",
            p.pid, p.memory_kib, p.cpu_percent, p.name
        )
    }));
    lines.push(format!("Showing {} of {} processes", entries.len(), total));
    lines.join("\n")
}

pub struct ProcessListTool;

#[async_trait::async_trait]
impl ToolDefinition for ProcessListTool {
    const NAME: &'static str = "process_list";
    const DESCRIPTION: &'static str =
        "List running processes, optionally filtered by name, sorted by memory usage.";
    const ACTION: &'static str = "listing processes";
    type Params = ProcessListParams;

    async fn execute(params: ProcessListParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Process list called: filter={:?}", params.filter);
        let all = tokio::task::spawn_blocking(snapshot)
            .await
            .map_err(|e| ToolError::internal(e.to_string()))?;
        let total = all.len();
        let selected = select(all, params.filter.as_deref(), params.limit);
        Ok(ToolOutcome::text(render(&selected, total)))
    }
}
