//! Request signing for authenticated Bybit endpoints.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::ExchangeError;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical query string: `key=value` pairs sorted by key
/// ascending, joined with `&`. The same string is signed and sent.
pub fn canonical_query(params: &[(&str, &str)]) -> String {
    let mut params = params.to_vec();
    params.sort_by(|a, b| a.0.cmp(b.0));
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Hex-encoded HMAC-SHA256 over `{timestamp}{apiKey}{recvWindow}{query}`.
///
/// Callers must not reach the network on [`ExchangeError::MissingCredentials`].
pub fn sign_request(
    api_key: &str,
    api_secret: &str,
    timestamp_ms: u64,
    recv_window_ms: u64,
    canonical_query: &str,
) -> Result<String, ExchangeError> {
    if api_key.is_empty() || api_secret.is_empty() {
        return Err(ExchangeError::MissingCredentials);
    }

    let payload = format!("{timestamp_ms}{api_key}{recv_window_ms}{canonical_query}");
    let mut mac = HmacSha256::new_from_slice(api_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: u64 = 1_700_000_000_000;

    #[test]
    fn test_canonical_query_sorts_by_key() {
        let query = canonical_query(&[("category", "linear"), ("accountType", "UNIFIED")]);
        assert_eq!(query, "accountType=UNIFIED&category=linear");
    }

    #[test]
    fn test_canonical_query_empty() {
        assert_eq!(canonical_query(&[]), "");
    }

    #[test]
    fn test_known_digest_wallet_params() {
        let sig = sign_request("test-key", "test-secret", TS, 5000, "accountType=UNIFIED").unwrap();
        assert_eq!(
            sig,
            "3f10586267639c9f3f4f5e32e491a6ef80d157db06f51eb79e4988e24f97adba"
        );
    }

    #[test]
    fn test_known_digest_position_params() {
        let sig = sign_request("test-key", "test-secret", TS, 5000, "category=linear").unwrap();
        assert_eq!(
            sig,
            "85d495c8776cb90e77dfac52d77ea79f2c7b3080ddbca3da7b132ebc23cecfbc"
        );
    }

    #[test]
    fn test_secret_changes_digest() {
        let sig = sign_request("test-key", "other-secret", TS, 5000, "accountType=UNIFIED").unwrap();
        assert_eq!(
            sig,
            "cd080157dbd7eca4fb86f8eca4446516cd3298c7d2cb871388522d9949e2255b"
        );
    }

    #[test]
    fn test_deterministic() {
        let a = sign_request("k", "s", TS, 5000, "a=1&b=2").unwrap();
        let b = sign_request("k", "s", TS, 5000, "a=1&b=2").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_any_input_changes_digest() {
        let base = sign_request("k", "s", TS, 5000, "a=1").unwrap();
        assert_ne!(base, sign_request("k2", "s", TS, 5000, "a=1").unwrap());
        assert_ne!(base, sign_request("k", "s", TS + 1, 5000, "a=1").unwrap());
        assert_ne!(base, sign_request("k", "s", TS, 5001, "a=1").unwrap());
        assert_ne!(base, sign_request("k", "s", TS, 5000, "a=2").unwrap());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        assert!(matches!(
            sign_request("", "s", TS, 5000, ""),
            Err(ExchangeError::MissingCredentials)
        ));
        assert!(matches!(
            sign_request("k", "", TS, 5000, ""),
            Err(ExchangeError::MissingCredentials)
        ));
    }
}
