//! Security utilities for Messenger webhook verification
//!
//! This module provides signature verification for incoming Messenger webhook
//! requests using the X-Hub-Signature-256 header. This ensures that requests
//! actually originate from Meta/Facebook and haven't been tampered with.
//!
//! # Security Background
//!
//! Meta signs all webhook payloads with HMAC-SHA256 using your app's secret
//! key. The signature is included in the `X-Hub-Signature-256` header with
//! the format: `sha256=<hex_signature>`
//!
//! To verify authenticity:
//! 1. Extract the signature from the X-Hub-Signature-256 header
//! 2. Compute HMAC-SHA256 of the raw request body using your app secret
//! 3. Compare the computed signature with the received signature
//! 4. Only process the request if signatures match
//!
//! # Important Notes
//!
//! - The signature MUST be computed on the raw request body bytes, not parsed JSON
//! - The comparison must be constant-time to prevent timing attacks
//! - The header format is `sha256=<signature>` (lowercase)

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Verifies the X-Hub-Signature-256 header against the request payload
///
/// # Arguments
///
/// * `signature_header` - The value of the X-Hub-Signature-256 header, if the
///   request carried one (e.g., "sha256=abc123...")
/// * `payload` - The raw request body bytes
/// * `app_secret` - Your Facebook app secret
///
/// # Returns
///
/// * `true` if the signature is valid
/// * `false` if the header is absent or empty, or the signature doesn't match
///
/// # Security
///
/// This function fails closed: an absent header, an empty header, or any
/// failure while computing the digest all verify as `false` and nothing is
/// propagated to the caller. The digest comparison is constant-time to
/// prevent timing attacks. A header without the `sha256=` prefix is compared
/// as a bare hex digest.
pub fn verify_signature(signature_header: Option<&str>, payload: &[u8], app_secret: &str) -> bool {
    let Some(header) = signature_header else {
        log::warn!("Missing X-Hub-Signature-256 header");
        return false;
    };

    if header.is_empty() {
        log::warn!("Empty X-Hub-Signature-256 header");
        return false;
    }

    let signature_hex = header.strip_prefix("sha256=").unwrap_or(header);

    // Compute HMAC-SHA256 of the payload, rendered as lowercase hex
    let mut mac = match HmacSha256::new_from_slice(app_secret.as_bytes()) {
        Ok(m) => m,
        Err(e) => {
            log::error!("Failed to create HMAC instance: {e}");
            return false;
        }
    };

    mac.update(payload);
    let computed_hex = hex::encode(mac.finalize().into_bytes());

    // Constant-time comparison to prevent timing attacks
    let is_valid: bool = computed_hex
        .as_bytes()
        .ct_eq(signature_hex.as_bytes())
        .into();

    if !is_valid {
        log::warn!("Webhook signature verification failed: signatures do not match");
    }

    is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign(payload: &[u8], secret: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_verify_signature_valid() {
        let payload = b"{\"object\":\"page\"}";
        let secret = "test_secret";
        let header = format!("sha256={}", sign(payload, secret));

        assert!(verify_signature(Some(&header), payload, secret));
    }

    #[test]
    fn test_verify_signature_without_prefix() {
        // a bare hex digest with no "sha256=" prefix still verifies
        let payload = b"{\"object\":\"page\"}";
        let secret = "test_secret";
        let header = sign(payload, secret);

        assert!(verify_signature(Some(&header), payload, secret));
    }

    #[test]
    fn test_verify_signature_missing_header() {
        assert!(!verify_signature(None, b"{}", "test_secret"));
    }

    #[test]
    fn test_verify_signature_empty_header() {
        assert!(!verify_signature(Some(""), b"{}", "test_secret"));
    }

    #[test]
    fn test_verify_signature_wrong_digest() {
        let payload = b"{\"object\":\"page\"}";
        let wrong =
            "sha256=0000000000000000000000000000000000000000000000000000000000000000";

        assert!(!verify_signature(Some(wrong), payload, "test_secret"));
    }

    #[test]
    fn test_verify_signature_wrong_secret() {
        let payload = b"{\"object\":\"page\"}";
        let header = format!("sha256={}", sign(payload, "wrong_secret"));

        assert!(!verify_signature(Some(&header), payload, "test_secret"));
    }

    #[test]
    fn test_verify_signature_tampered_payload() {
        let secret = "test_secret";
        let header = format!("sha256={}", sign(b"{\"object\":\"page\"}", secret));

        assert!(!verify_signature(
            Some(&header),
            b"{\"object\":\"hacked\"}",
            secret
        ));
    }

    #[test]
    fn test_verify_signature_garbage_header() {
        assert!(!verify_signature(Some("sha256=zzzzz"), b"{}", "test_secret"));
        assert!(!verify_signature(Some("sha1=abc123"), b"{}", "test_secret"));
    }
}
