//! S3 v4 signing for bodiless object requests against virtual-hosted buckets.
//!
//! The signer produces the `Authorization` header value for a request with
//! no query string and an empty payload, signing exactly the `host`,
//! `x-amz-content-sha256` and `x-amz-date` headers. Object paths are signed
//! verbatim: escaping is the caller's job.
//!
//! ```no_run
//! use s3v4_export_signer::{RequestParameters, Signer};
//!
//! # fn main() -> s3v4_export_signer::errors::Result<()> {
//! let signer = Signer::from_env()?;
//! let signed = signer.sign(&RequestParameters::get("example-bucket", "exports/patient_manifest.json"));
//! for (name, value) in signed.headers() {
//!     println!("{}: {}", name, value);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! reference: https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html

#[macro_use]
extern crate error_chain;
pub mod errors {
    error_chain! {
        errors {
            MissingCredential(var: String) {
                description("missing credential")
                display("missing credential: environment variable '{}' is unset or empty", var)
            }
            NonUnicodeCredential(var: String) {
                description("credential is not valid unicode")
                display("credential in environment variable '{}' is not valid unicode", var)
            }
            InvalidTimestamp(text: String) {
                description("invalid timestamp")
                display("invalid timestamp '{}', expected YYYYMMDDTHHMMSSZ", text)
            }
            InvalidUrl(url: String) {
                description("invalid url")
                display("invalid request url '{}'", url)
            }
        }
    }
}

pub mod canonical;
pub mod config;
pub mod credential;
pub mod hash;
pub mod key;
pub mod signature;
pub mod signer;
pub mod time;

pub use config::SigningConfig;
pub use credential::{Credentials, SecretKey};
pub use key::{derive_signing_key, SigningKey};
pub use signer::{RequestParameters, SignedRequest, Signer};
