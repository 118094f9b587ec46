//! Signing configuration: the region, service and endpoint domain a signer
//! is scoped to.
use std::env;

use crate::canonical;

/// Environment variable for the region, checked first.
pub const AWS_REGION: &str = "AWS_REGION";
/// Environment variable for the region, checked when [`AWS_REGION`] is unset.
pub const AWS_DEFAULT_REGION: &str = "AWS_DEFAULT_REGION";
/// Environment variable overriding the endpoint domain.
pub const S3_DOMAIN: &str = "S3_DOMAIN";

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_SERVICE: &str = "s3";
pub const DEFAULT_DOMAIN: &str = "s3.amazonaws.com";

/// Fixed terminator closing every credential scope.
pub const REQUEST_TYPE: &str = "aws4_request";

/// Config for a signer. Built once and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningConfig {
    /// `region` will be loaded from:
    ///
    /// - env value: [`AWS_REGION`]
    /// - env value: [`AWS_DEFAULT_REGION`]
    /// - default to: `us-east-1`
    pub region: String,
    /// Service name folded into the signing key, `s3` unless overridden.
    pub service: String,
    /// `domain` will be loaded from:
    ///
    /// - env value: [`S3_DOMAIN`]
    /// - default to: `s3.amazonaws.com`
    pub domain: String,
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl SigningConfig {
    /// Load config from env, falling back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(region) = non_empty_env(AWS_REGION).or_else(|| non_empty_env(AWS_DEFAULT_REGION))
        {
            config.region = region;
        }
        if let Some(domain) = non_empty_env(S3_DOMAIN) {
            config.domain = domain;
        }
        log::debug!(
            "signing config loaded from env: region={} service={} domain={}",
            config.region,
            config.service,
            config.domain
        );
        config
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Virtual host for `bucket`: `<bucket>.<domain>`.
    pub fn virtual_host(&self, bucket: &str) -> String {
        format!("{}.{}", bucket, self.domain)
    }

    /// Canonical request for an object in `bucket`, signed against the
    /// bucket's virtual host on the configured domain.
    pub fn canonical_request(
        &self,
        method: &str,
        path: &str,
        bucket: &str,
        timestamp: &str,
    ) -> String {
        canonical::canonical_request(method, path, &self.virtual_host(bucket), timestamp)
    }

    /// Credential scope for `date`: `<date>/<region>/<service>/aws4_request`.
    pub fn scope(&self, date: &str) -> String {
        scope_string(date, &self.region, &self.service)
    }
}

// -----------------------------------------------------------------------------
/// Generate an AWS scope string.
pub(crate) fn scope_string(date: &str, region: &str, service: &str) -> String {
    format!(
        "{date}/{region}/{service}/{request_type}",
        date = date,
        region = region,
        service = service,
        request_type = REQUEST_TYPE
    )
}

fn non_empty_env(var: &str) -> Option<String> {
    env::var(var).ok().filter(|v| !v.is_empty())
}
