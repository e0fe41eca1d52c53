//! Collaborator interfaces used by the race controller.

use async_trait::async_trait;

use crate::dns_control::{DnsControlClient, QueryLogEntry};
use crate::error_handling::{DnsControlError, VictimError};
use crate::victim::{FetchResult, VictimClient};

/// Authoritative zone operations, keyed by subdomain label.
#[async_trait]
pub trait DnsControl: Send + Sync {
    async fn assign_record(&self, label: &str) -> Result<(), DnsControlError>;
    async fn release_record(&self, label: &str) -> Result<(), DnsControlError>;
    async fn fetch_query_log(&self, label: &str) -> Result<Vec<QueryLogEntry>, DnsControlError>;
}

/// The victim's server-side fetch trigger.
#[async_trait]
pub trait RemoteFetch: Send + Sync {
    async fn trigger_remote_fetch(&self, target_url: &str) -> Result<FetchResult, VictimError>;
}

#[async_trait]
impl DnsControl for DnsControlClient {
    async fn assign_record(&self, label: &str) -> Result<(), DnsControlError> {
        DnsControlClient::assign_record(self, label).await
    }

    async fn release_record(&self, label: &str) -> Result<(), DnsControlError> {
        DnsControlClient::release_record(self, label).await
    }

    async fn fetch_query_log(&self, label: &str) -> Result<Vec<QueryLogEntry>, DnsControlError> {
        DnsControlClient::fetch_query_log(self, label).await
    }
}

#[async_trait]
impl RemoteFetch for VictimClient {
    async fn trigger_remote_fetch(&self, target_url: &str) -> Result<FetchResult, VictimError> {
        VictimClient::trigger_remote_fetch(self, target_url).await
    }
}
