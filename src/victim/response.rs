//! Decoding of remote fetch responses.
//!
//! The document filter reports its outcome as substrings of the response body
//! rather than through the status code. All substring rules live here, behind
//! [`decode_fetch_response`], so the state machine only ever sees a
//! [`FetchResponse`].

use serde::{Deserialize, Serialize};

use crate::config::{ADDED_FILE_MARKER, SESSION_EXPIRED_MARKER, VALIDATION_ERROR_CODE};

/// File the victim added after fetching the target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    #[serde(rename = "added_filename")]
    pub file_name: String,
    #[serde(rename = "added_fileid")]
    pub file_id: String,
}

/// Body substrings that identify each outcome.
#[derive(Debug, Clone)]
pub struct ResponseMarkers {
    pub added_file: String,
    pub session_expired: String,
    pub validation_error: String,
}

impl Default for ResponseMarkers {
    fn default() -> Self {
        Self {
            added_file: ADDED_FILE_MARKER.to_string(),
            session_expired: SESSION_EXPIRED_MARKER.to_string(),
            validation_error: VALIDATION_ERROR_CODE.to_string(),
        }
    }
}

/// Decoded outcome of one addfile request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    Added(FetchResult),
    SessionExpired,
    ValidationRejected(String),
    Other { status: u16, body: String },
}

#[derive(Debug, Deserialize)]
struct AddedFileEnvelope {
    data: FetchResult,
}

/// Classifies an addfile response.
///
/// Success and session expiry are only recognised on a 200. The validation
/// error code is recognised on any status, since the server reports argument
/// errors both ways.
///
/// # Errors
///
/// Returns a JSON error if the body carries the added-file marker but not the
/// expected `data` object.
pub fn decode_fetch_response(
    markers: &ResponseMarkers,
    status: u16,
    body: &str,
) -> Result<FetchResponse, serde_json::Error> {
    if status == 200 {
        if body.contains(&markers.added_file) {
            let envelope: AddedFileEnvelope = serde_json::from_str(body)?;
            return Ok(FetchResponse::Added(envelope.data));
        }
        if body.contains(&markers.session_expired) {
            return Ok(FetchResponse::SessionExpired);
        }
    }
    if body.contains(&markers.validation_error) {
        return Ok(FetchResponse::ValidationRejected(body.to_string()));
    }
    Ok(FetchResponse::Other {
        status,
        body: body.to_string(),
    })
}
