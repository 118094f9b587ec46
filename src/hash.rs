//! Digest primitives and the hex rendering used by the signing protocol.
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

pub(crate) type HmacSha256 = Hmac<Sha256>;

/// Width in bytes of every hash and keyed-hash output.
pub const DIGEST_LEN: usize = 32;

/// Hex encoded SHA256 of an empty byte sequence; the payload hash of every
/// request signed by this crate.
pub const EMPTY_PAYLOAD_SHA256: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

// -----------------------------------------------------------------------------
/// SHA256 hash.
pub fn sha256(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(Sha256::digest(data).as_slice());
    out
}

// -----------------------------------------------------------------------------
/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(mac.finalize().into_bytes().as_slice());
    out
}

// -----------------------------------------------------------------------------
/// Lowercase hex, two characters per byte, no separators.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Hex encoded SHA256 hash.
///
/// Use this instead of `to_hex(&sha256(data))` to skip the intermediate copy.
pub fn hex_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data).as_slice())
}

// Unit tests
//==============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_empty_payload_constant() {
        assert_eq!(EMPTY_PAYLOAD_SHA256, hex_sha256(b""));
        assert_eq!(EMPTY_PAYLOAD_SHA256, to_hex(&sha256(b"")));
    }

    #[test_case(b"abc", "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"; "abc")]
    #[test_case(b"", "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"; "empty")]
    fn test_sha256_known_answers(data: &[u8], expected: &str) {
        assert_eq!(expected, hex_sha256(data));
    }

    #[test]
    fn test_hmac_sha256_rfc4231_case_2() {
        let mac = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
            to_hex(&mac)
        );
    }

    #[test]
    fn test_hmac_sensitive_to_key_and_data() {
        let base = hmac_sha256(b"key", b"data");
        assert_ne!(base, hmac_sha256(b"kez", b"data"));
        assert_ne!(base, hmac_sha256(b"key", b"datb"));
        assert_eq!(base, hmac_sha256(b"key", b"data"));
    }

    #[test]
    fn test_hmac_accepts_empty_and_long_keys() {
        assert_eq!(DIGEST_LEN, hmac_sha256(b"", b"").len());
        let long_key = [0x5au8; 200];
        assert_eq!(DIGEST_LEN, hmac_sha256(&long_key, b"data").len());
    }

    #[test]
    fn test_to_hex_every_byte() {
        for b in 0..=255u8 {
            let encoded = to_hex(&[b]);
            assert_eq!(format!("{:02x}", b), encoded);
        }
        assert_eq!("00", to_hex(&[0x00]));
        assert_eq!("ff", to_hex(&[0xff]));
    }

    #[test]
    fn test_to_hex_shape() {
        let bytes: Vec<u8> = (0..=255u8).collect();
        let encoded = to_hex(&bytes);
        assert_eq!(2 * bytes.len(), encoded.len());
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_eq!("", to_hex(&[]));
    }
}
