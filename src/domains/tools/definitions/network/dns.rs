//! DNS lookup tool.

use std::net::IpAddr;

use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::{Name, RecordType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domains::tools::{
    ToolContext, ToolDefinition, ToolError, ToolOutcome, ToolResult,
    network_failure,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
#[schemars(inline)]
pub enum DnsRecordType {
    #[default]
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Ptr,
    Soa,
    Srv,
    Txt,
    Caa,
}

impl From<DnsRecordType> for RecordType {
    fn from(value: DnsRecordType) -> Self {
        match value {
            DnsRecordType::A => RecordType::A,
            DnsRecordType::Aaaa => RecordType::AAAA,
            DnsRecordType::Cname => RecordType::CNAME,
            DnsRecordType::Mx => RecordType::MX,
            DnsRecordType::Ns => RecordType::NS,
            DnsRecordType::Ptr => RecordType::PTR,
            DnsRecordType::Soa => RecordType::SOA,
            DnsRecordType::Srv => RecordType::SRV,
            DnsRecordType::Txt => RecordType::TXT,
            DnsRecordType::Caa => RecordType::CAA,
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DnsLookupParams {
    /// Hostname, or an IP address for PTR lookups
    #[schemars(length(min = 1, max = 253))]
    pub hostname: String,
    /// Record type to query
    #[serde(default)]
    pub record_type: DnsRecordType,
}

/// Name to query. PTR lookups of a bare IP address go to its reverse zone.
pub fn query_name(hostname: &str, record_type: DnsRecordType) -> ToolResult<Name> {
    let hostname = hostname.trim();
    if record_type == DnsRecordType::Ptr {
        if let Ok(ip) = hostname.parse::<IpAddr>() {
            return Ok(Name::from(ip));
        }
    }
    Name::from_utf8(hostname)
        .map_err(|e| ToolError::invalid_arguments(format!("invalid hostname '{}': {}", hostname, e)))
}

fn resolver() -> TokioAsyncResolver {
    TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
        warn!("System resolver configuration unavailable ({}); using defaults", e);
        TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
    })
}

#[instrument(skip_all, fields(hostname = %hostname))]
pub async fn lookup(hostname: &str, record_type: DnsRecordType) -> ToolResult<Vec<String>> {
    let name = query_name(hostname, record_type)?;
    let answers = resolver()
        .lookup(name, record_type.into())
        .await
        .map_err(ToolError::execution)?;

    Ok(answers
        .record_iter()
        .filter_map(|record| record.data().map(|data| data.to_string()))
        .collect())
}

pub struct DnsLookupTool;

#[async_trait::async_trait]
impl ToolDefinition for DnsLookupTool {
    const NAME: &'static str = "dns_lookup";
    const DESCRIPTION: &'static str =
        "Resolve DNS records (A, AAAA, CNAME, MX, NS, PTR, SOA, SRV, TXT, CAA) for a hostname.";
    const ACTION: &'static str = "looking up DNS";
    type Params = DnsLookupParams;

    async fn execute(params: DnsLookupParams, _ctx: &ToolContext) -> ToolResult<ToolOutcome> {
        info!("DNS lookup called: {} {:?}", params.hostname, params.record_type);
        let records = lookup(&params.hostname, params.record_type).await?;
        let kind = RecordType::from(params.record_type);

        let text = if records.is_empty() {
            format!("No {} records found for {}", kind, params.hostname)
        } else {
            format!(
                "{} records for {}:\n{}",
                kind,
                params.hostname,
                records.join("\n")
            )
        };
        Ok(ToolOutcome::text(text))
    }

    fn failure_message(error: &ToolError) -> String {
        network_failure("DNS lookup", error)
    }
}
