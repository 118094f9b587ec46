//! String-to-sign, final signature and the `Authorization` header value.
use crate::canonical::SIGNED_HEADERS;
use crate::config::scope_string;
use crate::hash::{hex_sha256, hmac_sha256, to_hex};
use crate::key::SigningKey;

/// Signing algorithm tag.
pub const ALGORITHM: &str = "AWS4-HMAC-SHA256";

// -----------------------------------------------------------------------------
/// Generate the "string to sign" - the value to which the HMAC signing is
/// applied to sign requests.
pub fn string_to_sign(
    canonical_request: &str,
    timestamp: &str,
    date: &str,
    region: &str,
    service: &str,
) -> String {
    format!(
        "{algorithm}\n{timestamp}\n{scope}\n{hash}",
        algorithm = ALGORITHM,
        timestamp = timestamp,
        scope = scope_string(date, region, service),
        hash = hex_sha256(canonical_request.as_bytes())
    )
}

// -----------------------------------------------------------------------------
/// Sign a canonical request with an already derived key, returning the hex
/// signature.
pub fn sign(
    canonical_request: &str,
    timestamp: &str,
    date: &str,
    region: &str,
    service: &str,
    signing_key: &SigningKey,
) -> String {
    let string_to_sign = string_to_sign(canonical_request, timestamp, date, region, service);
    log::trace!("string to sign:\n{}", string_to_sign);
    to_hex(&hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes()))
}

// -----------------------------------------------------------------------------
/// Generate the AWS authorization header.
pub fn authorization_header(
    access_key_id: &str,
    date: &str,
    region: &str,
    service: &str,
    signature: &str,
) -> String {
    format!(
        "{algorithm} Credential={access_key}/{scope}, \
            SignedHeaders={signed_headers}, Signature={signature}",
        algorithm = ALGORITHM,
        access_key = access_key_id,
        scope = scope_string(date, region, service),
        signed_headers = SIGNED_HEADERS,
        signature = signature
    )
}
