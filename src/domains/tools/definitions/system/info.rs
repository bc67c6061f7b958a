//! Host and server information.

use std::sync::Arc;

use chrono::Local;
use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::Serialize;
use sysinfo::System;
use tracing::info;

use crate::domains::tools::{
    NoParams, ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult,
};

const MIB: u64 = 1024 * 1024;

/// Snapshot of the machine the server runs on.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SystemInfo {
    pub platform: String,
    pub architecture: String,
    pub os_version: Option<String>,
    pub kernel_version: Option<String>,
    pub hostname: Option<String>,
    pub server_name: String,
    pub server_version: String,
    /// `TZ` when set, otherwise the local UTC offset
    pub timezone: String,
    pub cpus: usize,
    pub total_memory_mib: u64,
    pub used_memory_mib: u64,
    pub uptime_secs: u64,
}

fn timezone() -> String {
    match std::env::var("TZ") {
        Ok(tz) if !tz.is_empty() => tz,
        _ => format!("UTC{}", Local::now().format("%:z")),
    }
}

/// Collect the snapshot. Blocking; sysinfo reads procfs or OS APIs.
pub fn collect(server_name: &str, server_version: &str) -> SystemInfo {
    let mut sys = System::new();
    sys.refresh_cpu();
    sys.refresh_memory();

    SystemInfo {
        platform: std::env::consts::OS.to_string(),
        architecture: std::env::consts::ARCH.to_string(),
        os_version: System::long_os_version(),
        kernel_version: System::kernel_version(),
        hostname: System::host_name(),
        server_name: server_name.to_string(),
        server_version: server_version.to_string(),
        timezone: timezone(),
        cpus: sys.cpus().len(),
        total_memory_mib: sys.total_memory() / MIB,
        used_memory_mib: sys.used_memory() / MIB,
        uptime_secs: System::uptime(),
    }
}

impl SystemInfo {
    fn report(&self) -> String {
        let unknown = "unknown".to_string();
        [
            format!("Platform: {}", self.platform),
            format!("Architecture: {}", self.architecture),
            format!("OS: {}", self.os_version.as_ref().unwrap_or(&unknown)),
            format!("Kernel: {}", self.kernel_version.as_ref().unwrap_or(&unknown)),
            format!("Hostname: {}", self.hostname.as_ref().unwrap_or(&unknown)),
            format!("Server: {} {}", self.server_name, self.server_version),
            format!("Timezone: {}", self.timezone),
            format!("CPUs: {}", self.cpus),
            format!(
                "Memory: {} MiB used / {} MiB total",
                self.used_memory_mib, self.total_memory_mib
            ),
            format!("Uptime: {} s", self.uptime_secs),
        ]
        .join("\n")
    }
}

pub struct SystemInfoTool;

#[async_trait::async_trait]
impl ToolDefinition for SystemInfoTool {
    const NAME: &'static str = "system_info";
    const DESCRIPTION: &'static str =
        "Report platform, architecture, server version, timezone, hostname, CPU count and memory.";
    const ACTION: &'static str = "getting system info";
    type Params = NoParams;

    fn output_schema() -> Option<Arc<JsonObject>> {
        Some(cached_schema_for_type::<SystemInfo>())
    }

    async fn execute(_params: NoParams, ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("System info called");
        let name = ctx.config().server.name.clone();
        let version = ctx.config().server.version.clone();
        let snapshot = tokio::task::spawn_blocking(move || collect(&name, &version))
            .await
            .map_err(|e| ToolError::internal(e.to_string()))?;
        Ok(ToolOutcome::text(snapshot.report()).with_structured(&snapshot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect() {
        let snapshot = collect("toolbox", "1.2.3");
        assert_eq!(snapshot.platform, std::env::consts::OS);
        assert_eq!(snapshot.architecture, std::env::consts::ARCH);
        assert_eq!(snapshot.server_version, "1.2.3");
        assert!(!snapshot.timezone.is_empty());
    }

    #[tokio::test]
    async fn test_report_lines() {
        let outcome = SystemInfoTool::execute(NoParams {}, &ToolContext::default())
            .await
            .unwrap();
        let text = outcome.joined_text();
        assert!(text.starts_with("Platform: "));
        assert!(text.contains("Architecture: "));
        assert!(text.contains("Timezone: "));
        assert!(outcome.structured().is_some());
    }
}
