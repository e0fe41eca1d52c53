//! Query log and request types for the DNS control plane.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::DNS_RCODE_NOERROR;
use crate::error_handling::DnsControlError;

/// One query the authoritative server observed for a subdomain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryLogEntry {
    /// DNS RR type of the question (1 = A)
    pub query_type: u16,
    /// When the query reached the authoritative server
    pub timestamp: DateTime<Utc>,
    /// DNS RCODE of the answer
    pub response_code: i32,
}

impl QueryLogEntry {
    /// Whether the authoritative server answered this query successfully.
    pub fn is_answered(&self) -> bool {
        self.response_code == DNS_RCODE_NOERROR
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignRecordRequest<'a> {
    pub domain: &'a str,
    pub ttl: u32,
    pub replace_ok: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReleaseRecordRequest<'a> {
    pub domain: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryLogResponse {
    #[serde(default)]
    pub log: Vec<RawQueryLogEntry>,
}

/// Query log entry as it comes off the wire, timestamp still a string.
#[derive(Debug, Deserialize)]
pub(crate) struct RawQueryLogEntry {
    #[serde(rename = "qType")]
    pub q_type: u16,
    pub timestamp: String,
    #[serde(rename = "rCode")]
    pub r_code: i32,
}

impl TryFrom<RawQueryLogEntry> for QueryLogEntry {
    type Error = DnsControlError;

    fn try_from(raw: RawQueryLogEntry) -> Result<Self, Self::Error> {
        let secs: i64 = raw
            .timestamp
            .parse()
            .map_err(|_| DnsControlError::Timestamp {
                raw: raw.timestamp.clone(),
            })?;
        let timestamp =
            DateTime::from_timestamp(secs, 0).ok_or_else(|| DnsControlError::Timestamp {
                raw: raw.timestamp.clone(),
            })?;
        Ok(QueryLogEntry {
            query_type: raw.q_type,
            timestamp,
            response_code: raw.r_code,
        })
    }
}

/// Decodes a query log body. Any undecodable entry fails the whole log.
pub(crate) fn decode_query_log(body: &str) -> Result<Vec<QueryLogEntry>, DnsControlError> {
    let response: QueryLogResponse = serde_json::from_str(body)?;
    response
        .log
        .into_iter()
        .map(QueryLogEntry::try_from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_request_wire_format() {
        let request = AssignRecordRequest {
            domain: "abc123def456",
            ttl: 0,
            replace_ok: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"domain": "abc123def456", "ttl": 0, "replaceOk": false})
        );
    }

    #[test]
    fn test_decode_query_log() {
        let body = r#"{"log":[
            {"qType":1,"timestamp":"1700000000","rCode":2},
            {"qType":28,"timestamp":"1700000005","rCode":0}
        ]}"#;
        let entries = decode_query_log(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query_type, 1);
        assert_eq!(entries[0].timestamp.timestamp(), 1_700_000_000);
        assert!(!entries[0].is_answered());
        assert_eq!(entries[1].query_type, 28);
        assert!(entries[1].is_answered());
    }

    #[test]
    fn test_decode_empty_log() {
        assert!(decode_query_log(r#"{"log":[]}"#).unwrap().is_empty());
        assert!(decode_query_log(r#"{}"#).unwrap().is_empty());
    }

    #[test]
    fn test_bad_timestamp_fails_whole_log() {
        let body = r#"{"log":[
            {"qType":1,"timestamp":"1700000000","rCode":0},
            {"qType":1,"timestamp":"yesterday","rCode":0}
        ]}"#;
        match decode_query_log(body) {
            Err(DnsControlError::Timestamp { raw }) => assert_eq!(raw, "yesterday"),
            other => panic!("expected timestamp error, got {:?}", other),
        }

        // Padding is not an integer either
        for padded in [" 1700000000", "1700000000\n"] {
            let body = serde_json::json!({
                "log": [{"qType": 1, "timestamp": padded, "rCode": 0}]
            })
            .to_string();
            match decode_query_log(&body) {
                Err(DnsControlError::Timestamp { raw }) => assert_eq!(raw, padded),
                other => panic!("expected timestamp error for {:?}, got {:?}", padded, other),
            }
        }
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        assert!(matches!(
            decode_query_log("not json"),
            Err(DnsControlError::Decode(_))
        ));
    }
}
