//! Canonical request construction.
//!
//! Only the fixed request shape this crate signs is supported: no query
//! string, an empty body, and exactly three signed headers. The object path
//! is used as given, the caller is responsible for any percent-encoding.
use crate::hash::EMPTY_PAYLOAD_SHA256;

/// Signed header list, in canonical order.
pub const SIGNED_HEADERS: &str = "host;x-amz-content-sha256;x-amz-date";

// -----------------------------------------------------------------------------
/// Generate the canonical header block, one `name:value\n` line per signed
/// header.
fn canonical_header_string(host: &str, timestamp: &str) -> String {
    format!(
        "host:{host}\nx-amz-content-sha256:{sha256}\nx-amz-date:{timestamp}\n",
        host = host,
        sha256 = EMPTY_PAYLOAD_SHA256,
        timestamp = timestamp
    )
}

// -----------------------------------------------------------------------------
/// Generate a canonical request.
///
/// `host` is the full virtual host, `path` the object key without the leading
/// slash and `timestamp` the `YYYYMMDDTHHMMSSZ` request time.
pub fn canonical_request(method: &str, path: &str, host: &str, timestamp: &str) -> String {
    format!(
        "{method}\n/{uri}\n{query_string}\n{headers}\n{signed}\n{sha256}",
        method = method,
        uri = path,
        query_string = "",
        headers = canonical_header_string(host, timestamp),
        signed = SIGNED_HEADERS,
        sha256 = EMPTY_PAYLOAD_SHA256
    )
}
