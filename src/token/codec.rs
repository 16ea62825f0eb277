//! Segment codec: canonical JSON plus base64url without padding.
//!
//! Encoding must be deterministic for a given structure because the
//! signature covers the encoded bytes. Claim maps are key-ordered
//! ([`crate::token::Claims`]) and struct fields serialize in declaration
//! order, so re-encoding the same value always yields identical segments.

use crate::error::TokenError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a structure to JSON and encode it as a base64url segment.
pub fn encode<T: Serialize>(value: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(value).map_err(|e| TokenError::Encoding(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decode a base64url segment and parse it as a JSON structure.
///
/// Fails if the segment is not valid unpadded base64url or the decoded
/// bytes do not parse as `T` (for claims, anything other than a key/value
/// mapping is a parse failure).
pub fn decode<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = decode_bytes(segment)?;
    serde_json::from_slice(&bytes).map_err(|e| TokenError::Decoding(e.to_string()))
}

/// Encode raw bytes (a signature) as a base64url segment.
#[must_use]
pub fn encode_bytes(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode a base64url segment into raw bytes.
pub fn decode_bytes(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::Decoding(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Claims;
    use serde_json::json;

    #[test]
    fn test_round_trip() {
        let claims = Claims::new()
            .with_claim("user_id", 123)
            .with_claim("email", "test@example.com");

        let segment = encode(&claims).unwrap();
        let decoded: Claims = decode(&segment).unwrap();

        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a: Claims = [("b", json!(2)), ("a", json!(1)), ("c", json!(3))]
            .into_iter()
            .collect();
        let b: Claims = [("c", json!(3)), ("a", json!(1)), ("b", json!(2))]
            .into_iter()
            .collect();

        assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
    }

    #[test]
    fn test_segment_is_url_safe() {
        // 0xfb 0xff stresses the `+`/`/` positions of the standard alphabet.
        let segment = encode_bytes(&[0xfb, 0xff, 0xfe, 0x3e, 0x3f]);
        assert!(!segment.contains('+'));
        assert!(!segment.contains('/'));
        assert!(!segment.contains('='));
    }

    #[test]
    fn test_decode_rejects_invalid_base64() {
        let err = decode::<Claims>("not!!valid@@base64");
        assert!(matches!(err, Err(TokenError::Decoding(_))));
    }

    #[test]
    fn test_decode_rejects_non_mapping_payload() {
        let segment = encode(&json!([1, 2, 3])).unwrap();
        let err = decode::<Claims>(&segment);
        assert!(matches!(err, Err(TokenError::Decoding(_))));
    }

    #[test]
    fn test_bytes_round_trip() {
        let bytes = vec![0u8, 1, 2, 254, 255];
        let segment = encode_bytes(&bytes);
        assert_eq!(decode_bytes(&segment).unwrap(), bytes);
    }
}
