//! Victim service access.
//!
//! This module provides:
//! - An in-memory store for the single victim session
//! - The login and remote fetch trigger operations
//! - The decode step that turns fetch response bodies into tagged outcomes

mod client;
mod response;
mod session;

// Re-export public API
pub use client::{VictimClient, VictimCredentials};
pub use response::{decode_fetch_response, FetchResponse, FetchResult, ResponseMarkers};
pub use session::{SessionStore, VictimSession};
