//! Caller-facing signing pipeline.
use chrono::{DateTime, Utc};
use url::Url;

use crate::canonical::canonical_request;
use crate::config::SigningConfig;
use crate::credential::Credentials;
use crate::errors::*;
use crate::hash::EMPTY_PAYLOAD_SHA256;
use crate::key::derive_signing_key;
use crate::signature::{authorization_header, sign};
use crate::time::{date_of, format_timestamp};

/// What to sign: one bodiless request for an object in a virtual-hosted
/// bucket.
#[derive(Clone, Debug)]
pub struct RequestParameters {
    /// HTTP method, expected uppercase.
    pub method: String,
    /// Bucket name, without the endpoint domain.
    pub bucket: String,
    /// Object key, without a leading slash and already escaped.
    pub path: String,
    pub date_time: DateTime<Utc>,
}

impl RequestParameters {
    pub fn new(
        method: impl Into<String>,
        bucket: impl Into<String>,
        path: impl Into<String>,
        date_time: DateTime<Utc>,
    ) -> Self {
        RequestParameters {
            method: method.into(),
            bucket: bucket.into(),
            path: path.into(),
            date_time,
        }
    }

    /// `GET` request stamped with the current time.
    pub fn get(bucket: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new("GET", bucket, path, Utc::now())
    }
}

/// Signed header and the exact values it was computed over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedRequest {
    pub auth_header: String,
    pub date_time: String,
    pub host: String,
    pub content_sha256: String,
    pub path: String,
}

impl SignedRequest {
    /// Headers to send, in the order they should be attached.
    pub fn headers(&self) -> [(&'static str, &str); 4] {
        [
            ("Authorization", self.auth_header.as_str()),
            ("x-amz-date", self.date_time.as_str()),
            ("Host", self.host.as_str()),
            ("x-amz-content-sha256", self.content_sha256.as_str()),
        ]
    }

    /// `https://<host>/<path>`
    ///
    /// Fails when the URL would carry a different path than the one signed:
    /// dot segments, `?`, `#` or characters the URL parser re-escapes.
    pub fn url(&self) -> Result<Url> {
        let text = format!("https://{}/{}", self.host, self.path);
        let url = Url::parse(&text).chain_err(|| ErrorKind::InvalidUrl(text.clone()))?;
        let path_matches = url.path().strip_prefix('/') == Some(self.path.as_str());
        if !path_matches || url.query().is_some() || url.fragment().is_some() {
            log::debug!("url path {} differs from signed path /{}", url.path(), self.path);
            bail!(ErrorKind::InvalidUrl(text));
        }
        Ok(url)
    }
}

/// Signs requests for one set of credentials and one scope configuration.
#[derive(Clone, Debug)]
pub struct Signer {
    config: SigningConfig,
    credentials: Credentials,
}

impl Signer {
    pub fn new(config: SigningConfig, credentials: Credentials) -> Self {
        Signer {
            config,
            credentials,
        }
    }

    /// Build a signer from [`SigningConfig::from_env`] and
    /// [`Credentials::from_env`].
    pub fn from_env() -> Result<Self> {
        Ok(Signer::new(SigningConfig::from_env(), Credentials::from_env()?))
    }

    pub fn config(&self) -> &SigningConfig {
        &self.config
    }

    /// Sign `request`, returning the `Authorization` header value together
    /// with the host and timestamp strings it covers.
    pub fn sign(&self, request: &RequestParameters) -> SignedRequest {
        let timestamp = format_timestamp(&request.date_time);
        let canonical = self.config.canonical_request(
            &request.method,
            &request.path,
            &request.bucket,
            &timestamp,
        );
        SignedRequest {
            auth_header: self.authorize(&canonical, &timestamp),
            date_time: timestamp,
            host: self.config.virtual_host(&request.bucket),
            content_sha256: EMPTY_PAYLOAD_SHA256.to_string(),
            path: request.path.clone(),
        }
    }

    /// Compute the `Authorization` header value for an already rendered host
    /// and `YYYYMMDDTHHMMSSZ` timestamp.
    ///
    /// The timestamp is not validated; a malformed one yields a signature
    /// the remote verifier will reject.
    pub fn authorization(&self, method: &str, path: &str, host: &str, timestamp: &str) -> String {
        self.authorize(&canonical_request(method, path, host, timestamp), timestamp)
    }

    fn authorize(&self, canonical: &str, timestamp: &str) -> String {
        let SigningConfig {
            region, service, ..
        } = &self.config;
        let date = date_of(timestamp);
        log::debug!("canonical request:\n{}", canonical);

        let signing_key =
            derive_signing_key(self.credentials.secret_key(), date, region, service);
        let signature = sign(canonical, timestamp, date, region, service, &signing_key);
        authorization_header(
            &self.credentials.access_key_id,
            date,
            region,
            service,
            &signature,
        )
    }
}
