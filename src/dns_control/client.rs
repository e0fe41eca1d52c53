//! HTTP client for the DNS control plane.

use log::debug;

use super::types::{decode_query_log, AssignRecordRequest, QueryLogEntry, ReleaseRecordRequest};
use crate::config::{DNS_ASSIGN_PATH, DNS_QUERY_LOG_PATH, DNS_RECORD_TTL, DNS_RELEASE_PATH};
use crate::error_handling::DnsControlError;

/// Client for the authoritative zone's control API.
///
/// Records and logs are keyed by subdomain label; the zone suffix is implicit.
/// The client holds no state beyond its base URL.
#[derive(Debug, Clone)]
pub struct DnsControlClient {
    client: reqwest::Client,
    base_url: String,
}

impl DnsControlClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Points `label` at the control plane's fixed address.
    ///
    /// Existing records are never replaced and the TTL is left at the zone
    /// default.
    pub async fn assign_record(&self, label: &str) -> Result<(), DnsControlError> {
        let request = AssignRecordRequest {
            domain: label,
            ttl: DNS_RECORD_TTL,
            replace_ok: false,
        };
        let url = format!("{}{}", self.base_url, DNS_ASSIGN_PATH);
        debug!("Assigning DNS record for {label}");
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| DnsControlError::Transport {
                operation: "assign",
                source,
            })?;
        expect_ok("assign", response).await.map(|_| ())
    }

    /// Removes the record for `label`.
    pub async fn release_record(&self, label: &str) -> Result<(), DnsControlError> {
        let request = ReleaseRecordRequest { domain: label };
        let url = format!("{}{}", self.base_url, DNS_RELEASE_PATH);
        debug!("Releasing DNS record for {label}");
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|source| DnsControlError::Transport {
                operation: "release",
                source,
            })?;
        expect_ok("release", response).await.map(|_| ())
    }

    /// Fetches every query the authoritative server logged for `label`.
    ///
    /// Entries come back in server order, which is not necessarily time order.
    pub async fn fetch_query_log(&self, label: &str) -> Result<Vec<QueryLogEntry>, DnsControlError> {
        let url = format!("{}{}/{}", self.base_url, DNS_QUERY_LOG_PATH, label);
        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|source| DnsControlError::Transport {
                    operation: "query log",
                    source,
                })?;
        let body = expect_ok("query log", response).await?;
        let entries = decode_query_log(&body)?;
        debug!("Query log for {label}: {} entries", entries.len());
        Ok(entries)
    }
}

/// Reads the body and fails with it unless the status is 200.
async fn expect_ok(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<String, DnsControlError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|source| DnsControlError::Transport { operation, source })?;
    if status != reqwest::StatusCode::OK {
        return Err(DnsControlError::Status {
            operation,
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}
