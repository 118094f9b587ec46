//! Long-term credentials.
use std::env;
use std::ffi::OsString;
use std::fmt;

use zeroize::Zeroizing;

use crate::errors::*;

/// Environment variable holding the access key id.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
/// Environment variable holding the secret access key.
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";

/// Secret access key. The buffer is zeroed when dropped and never printed.
#[derive(Clone)]
pub struct SecretKey(Zeroizing<Vec<u8>>);

impl SecretKey {
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        SecretKey(Zeroizing::new(secret.into()))
    }

    /// Borrow the raw secret bytes.
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

/// Credential that holds the access key id and secret key.
#[derive(Clone)]
pub struct Credentials {
    /// Access key id, not sensitive.
    pub access_key_id: String,
    secret_key: SecretKey,
}

impl Credentials {
    pub fn new(access_key_id: impl Into<String>, secret_key: impl Into<Vec<u8>>) -> Self {
        Credentials {
            access_key_id: access_key_id.into(),
            secret_key: SecretKey::new(secret_key),
        }
    }

    /// Load credentials from [`AWS_ACCESS_KEY_ID`] and [`AWS_SECRET_ACCESS_KEY`].
    ///
    /// Unset or empty variables are an error, as are values that are not
    /// valid unicode.
    pub fn from_env() -> Result<Self> {
        let access_key_id = required_env(AWS_ACCESS_KEY_ID)?;
        let secret = Zeroizing::new(required_env(AWS_SECRET_ACCESS_KEY)?);
        log::debug!("loaded credentials for access key {} from env", access_key_id);
        Ok(Credentials::new(access_key_id, secret.as_bytes()))
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &self.secret_key)
            .finish()
    }
}

fn required_env(var: &str) -> Result<String> {
    match env::var_os(var).map(OsString::into_string) {
        Some(Ok(v)) if !v.is_empty() => Ok(v),
        Some(Err(raw)) => {
            drop(Zeroizing::new(raw.into_encoded_bytes()));
            Err(ErrorKind::NonUnicodeCredential(var.to_string()).into())
        }
        _ => Err(ErrorKind::MissingCredential(var.to_string()).into()),
    }
}
