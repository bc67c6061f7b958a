//! ICMP ping through the system `ping` binary.

use once_cell::sync::Lazy;
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::process::Command;
use tracing::{debug, info, instrument};

use crate::domains::tools::{
    ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult,
    network_failure,
};

static RECEIVED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\s+(?:packets\s+)?received|received\s*=\s*(\d+)")
        .expect("received pattern is valid")
});
static AVERAGE_RTT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)=\s*[\d.]+/([\d.]+)/|average\s*=\s*(\d+)\s*ms")
        .expect("rtt pattern is valid")
});

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PingParams {
    /// Hostname or IP address
    #[schemars(length(min = 1, max = 253))]
    pub host: String,
    /// Echo requests to send
    #[serde(default = "default_count")]
    #[schemars(range(min = 1, max = 10))]
    pub count: u32,
    /// Replies needed to report the host as reachable
    #[serde(default = "default_min_replies")]
    #[schemars(range(min = 1, max = 10))]
    pub min_replies: u32,
}

fn default_count() -> u32 {
    4
}

fn default_min_replies() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq)]
pub struct PingSummary {
    pub sent: u32,
    pub received: u32,
    pub average_ms: Option<f64>,
}

impl PingSummary {
    pub fn is_alive(&self, min_replies: u32) -> bool {
        self.received >= min_replies
    }
}

/// Hosts are passed as a single argv entry; reject anything that could be
/// read as an option.
pub fn check_host(host: &str) -> ToolResult<&str> {
    let host = host.trim();
    if host.is_empty() || host.starts_with('-') || host.chars().any(char::is_whitespace) {
        return Err(ToolError::invalid_arguments(format!("invalid host '{}'", host)));
    }
    Ok(host)
}

/// Number of replies reported in `ping` output.
pub fn parse_received(output: &str) -> Option<u32> {
    let caps = RECEIVED.captures(output)?;
    caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}

/// Average round trip time in milliseconds.
pub fn parse_average_rtt(output: &str) -> Option<f64> {
    let caps = AVERAGE_RTT.captures(output)?;
    caps.get(1).or_else(|| caps.get(2))?.as_str().parse().ok()
}

#[instrument(skip_all, fields(host = %host))]
pub async fn ping(host: &str, count: u32) -> ToolResult<PingSummary> {
    let host = check_host(host)?;
    let count_flag = if cfg!(windows) { "-n" } else { "-c" };

    let output = Command::new("ping")
        .arg(count_flag)
        .arg(count.to_string())
        .arg(host)
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|e| ToolError::execution(format!("could not run ping: {}", e)))?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    debug!("ping exited with {:?}", output.status.code());

    let received = parse_received(&stdout);
    if received.is_none() && !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ToolError::execution(stderr.trim().to_string()));
    }

    Ok(PingSummary {
        sent: count,
        received: received.unwrap_or(0),
        average_ms: parse_average_rtt(&stdout),
    })
}

pub struct PingTool;

#[async_trait::async_trait]
impl ToolDefinition for PingTool {
    const NAME: &'static str = "ping";
    const DESCRIPTION: &'static str =
        "Ping a host with the system ping command; the host counts as alive when enough replies arrive.";
    const ACTION: &'static str = "pinging host";
    type Params = PingParams;

    async fn execute(params: PingParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("Ping called: {} x{}", params.host, params.count);
        if params.min_replies > params.count {
            return Err(ToolError::invalid_arguments(format!(
                "min_replies ({}) cannot exceed count ({})",
                params.min_replies, params.count
            )));
        }
        let summary = ping(&params.host, params.count).await?;
        let status = if summary.is_alive(params.min_replies) { "alive" } else { "unreachable" };

        let mut text = format!(
            "Host: {}\nStatus: {}\nPackets: {} sent, {} received",
            params.host.trim(),
            status,
            summary.sent,
            summary.received
        );
        if let Some(avg) = summary.average_ms {
            text.push_str(&format!("\nAverage RTT: {:.3} ms", avg));
        }
        Ok(ToolOutcome::text(text))
    }

    fn failure_message(error: &ToolError) -> String {
        network_failure("Ping", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINUX_OUTPUT: &str = "PING example.com (93.184.216.34) 56(84) bytes of data.
64 bytes from 93.184.216.34: icmp_seq=1 ttl=56 time=11.2 ms
64 bytes from 93.184.216.34: icmp_seq=2 ttl=56 time=11.6 ms

--- example.com ping statistics ---
3 packets transmitted, 2 received, 33.3333% packet loss, time 2003ms
rtt min/avg/max/mdev = 11.180/11.402/11.624/0.222 ms";

    const MACOS_OUTPUT: &str = "--- example.com ping statistics ---
4 packets transmitted, 4 packets received, 0.0% packet loss
round-trip min/avg/max/stddev = 10.1/12.5/15.0/1.2 ms";

    const WINDOWS_OUTPUT: &str = "Ping statistics for 93.184.216.34:
    Packets: Sent = 4, Received = 3, Lost = 1 (25% loss),
Approximate round trip times in milli-seconds:
    Minimum = 10ms, Maximum = 14ms, Average = 12ms";

    #[test]
    fn test_parse_received() {
        assert_eq!(parse_received(LINUX_OUTPUT), Some(2));
        assert_eq!(parse_received(MACOS_OUTPUT), Some(4));
        assert_eq!(parse_received(WINDOWS_OUTPUT), Some(3));
        assert_eq!(parse_received("garbage"), None);
    }

    #[test]
    fn test_parse_average_rtt() {
        assert_eq!(parse_average_rtt(LINUX_OUTPUT), Some(11.402));
        assert_eq!(parse_average_rtt(MACOS_OUTPUT), Some(12.5));
        assert_eq!(parse_average_rtt(WINDOWS_OUTPUT), Some(12.0));
    }

    #[test]
    fn test_alive_threshold() {
        let summary = PingSummary { sent: 4, received: 2, average_ms: None };
        assert!(summary.is_alive(1));
        assert!(summary.is_alive(2));
        assert!(!summary.is_alive(3));
    }

    #[test]
    fn test_check_host() {
        assert_eq!(check_host(" example.com ").unwrap(), "example.com");
        assert!(check_host("-f").is_err());
        assert!(check_host("a b").is_err());
        assert!(check_host("").is_err());
    }

    #[tokio::test]
    async fn test_min_replies_above_count_rejected() {
        let params = PingParams {
            host: "localhost".to_string(),
            count: 2,
            min_replies: 3,
        };
        let err = PingTool::execute(params, &ToolContext::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(err.to_string().contains("min_replies (3) cannot exceed count (2)"));
        assert_eq!(
            PingTool::failure_message(&err),
            "Ping failed: Invalid arguments: min_replies (3) cannot exceed count (2)"
        );
    }
}
