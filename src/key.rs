//! Signing-key derivation.
//!
//! kDate    = HMAC("AWS4" + secret, date)
//! kRegion  = HMAC(kDate, region)
//! kService = HMAC(kRegion, service)
//! kSigning = HMAC(kService, "aws4_request")
use std::fmt;

use zeroize::Zeroizing;

use crate::config::REQUEST_TYPE;
use crate::credential::SecretKey;
use crate::hash::{hmac_sha256, DIGEST_LEN};

/// Tag prepended to the secret before the first HMAC.
pub const SECRET_PREFIX: &str = "AWS4";

/// Key scoped to one (date, region, service). Zeroed on drop.
#[derive(Clone)]
pub struct SigningKey(Zeroizing<[u8; DIGEST_LEN]>);

impl SigningKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0[..]
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

// -----------------------------------------------------------------------------
/// Run the four derivation steps, returning every intermediate key in order.
fn derivation_chain(
    secret: &SecretKey,
    date: &str,
    region: &str,
    service: &str,
) -> [Zeroizing<[u8; DIGEST_LEN]>; 4] {
    let mut input_key =
        Zeroizing::new(Vec::with_capacity(SECRET_PREFIX.len() + secret.expose().len()));
    input_key.extend_from_slice(SECRET_PREFIX.as_bytes());
    input_key.extend_from_slice(secret.expose());

    let k_date = Zeroizing::new(hmac_sha256(&input_key, date.as_bytes()));
    let k_region = Zeroizing::new(hmac_sha256(&k_date[..], region.as_bytes()));
    let k_service = Zeroizing::new(hmac_sha256(&k_region[..], service.as_bytes()));
    let k_signing = Zeroizing::new(hmac_sha256(&k_service[..], REQUEST_TYPE.as_bytes()));
    [k_date, k_region, k_service, k_signing]
}

// -----------------------------------------------------------------------------
/// Generate the AWS signing key, derived from the secret key, date, region,
/// and service name.
pub fn derive_signing_key(
    secret: &SecretKey,
    date: &str,
    region: &str,
    service: &str,
) -> SigningKey {
    let [_, _, _, k_signing] = derivation_chain(secret, date, region, service);
    SigningKey(k_signing)
}
