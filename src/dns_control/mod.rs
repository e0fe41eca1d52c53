//! DNS control plane client.
//!
//! This module provides:
//! - Record assignment and release on the authoritative zone
//! - Query log retrieval and decoding
//! - Selection of the latest logged query

mod client;
mod query_log;
mod types;

// Re-export public API
pub use query_log::latest_entry;
pub use client::DnsControlClient;
pub use types::QueryLogEntry;
