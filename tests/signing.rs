use std::sync::Arc;
use std::thread;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use s3v4_export_signer::credential::{AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY};
use s3v4_export_signer::errors::Result;
use s3v4_export_signer::{Credentials, RequestParameters, Signer, SigningConfig};

const ACCESS: &str = "AKIDEXAMPLE";
const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";
const EXPECTED_MANIFEST_HEADER: &str = "AWS4-HMAC-SHA256 \
    Credential=AKIDEXAMPLE/20250615/us-east-1/s3/aws4_request, \
    SignedHeaders=host;x-amz-content-sha256;x-amz-date, \
    Signature=6b1367c61c1b61f90861b8cf0fcb2640ce13faed7cf94a3905daf675bf8e5f83";

fn manifest_request() -> RequestParameters {
    RequestParameters::new(
        "GET",
        "example-bucket",
        "exports/patient_manifest.json",
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap(),
    )
}

#[test]
fn test_concurrent_signing_is_consistent() {
    let _ = env_logger::builder().is_test(true).try_init();

    let signer = Arc::new(Signer::new(
        SigningConfig::default(),
        Credentials::new(ACCESS, SECRET),
    ));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let signer = Arc::clone(&signer);
            thread::spawn(move || signer.sign(&manifest_request()).auth_header)
        })
        .collect();
    for handle in handles {
        assert_eq!(EXPECTED_MANIFEST_HEADER, handle.join().unwrap());
    }
}

#[test]
fn test_signer_from_env() -> Result<()> {
    temp_env::with_vars(
        vec![
            (AWS_ACCESS_KEY_ID, Some(ACCESS)),
            (AWS_SECRET_ACCESS_KEY, Some(SECRET)),
            ("AWS_REGION", None),
            ("AWS_DEFAULT_REGION", None),
            ("S3_DOMAIN", None),
        ],
        || -> Result<()> {
            let signer = Signer::from_env()?;
            let signed = signer.sign(&manifest_request());
            assert_eq!(EXPECTED_MANIFEST_HEADER, signed.auth_header);
            assert_eq!(
                "https://example-bucket.s3.amazonaws.com/exports/patient_manifest.json",
                signed.url()?.as_str()
            );
            Ok(())
        },
    )
}

#[test]
fn test_signer_from_env_without_credentials() {
    temp_env::with_vars_unset(vec![AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY], || {
        let err = Signer::from_env().unwrap_err();
        assert!(err.to_string().contains(AWS_ACCESS_KEY_ID));
    });
}
