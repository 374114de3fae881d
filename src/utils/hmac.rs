//! HMAC signing and nonce generation.
//!
//! The hosted-payment gateway verifies every iframe request by recomputing
//! `HMAC-MD5(shared_secret, payload)` and comparing it to the hex digest in
//! the URL, so the digest format here must match the gateway byte for byte.
//!
//! Customer identities passed in by the host session layer are signed
//! separately with HMAC-SHA256 over `{timestamp}.{customer_id}`.

use hmac::{Hmac, Mac};
use md5::Md5;
use rand::Rng;
use sha2::Sha256;
use std::time::{SystemTime, UNIX_EPOCH};

type HmacMd5 = Hmac<Md5>;
type HmacSha256 = Hmac<Sha256>;

/// Characters a nonce may contain.
pub const NONCE_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of every generated nonce.
pub const NONCE_LENGTH: usize = 5;

/// Errors raised while computing a signature
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("Invalid secret key: {0}")]
    InvalidKey(String),

    #[error("System time error: {0}")]
    Clock(String),
}

/// Generate a lowercase hex HMAC-MD5 signature of `payload` keyed by `secret`.
///
/// An empty secret is a valid HMAC key and still yields a deterministic digest.
pub fn sign(payload: &str, secret: &str) -> Result<String, SignatureError> {
    let mut mac = HmacMd5::new_from_slice(secret.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;

    mac.update(payload.as_bytes());

    let result = mac.finalize();
    Ok(hex::encode(result.into_bytes()))
}

/// Generate a fresh nonce from the thread-local CSPRNG.
pub fn generate_nonce() -> String {
    generate_nonce_with(&mut rand::rng())
}

/// Generate a nonce using the supplied random number generator.
pub fn generate_nonce_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..NONCE_LENGTH)
        .map(|_| NONCE_ALPHABET[rng.random_range(0..NONCE_ALPHABET.len())] as char)
        .collect()
}

/// Generate the HMAC-SHA256 signature the host session layer attaches to a
/// customer id
pub fn generate_customer_signature(
    secret: &str,
    customer_id: &str,
    timestamp: u64,
) -> Result<String, SignatureError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;

    mac.update(format!("{timestamp}.{customer_id}").as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Validate a customer id signature
///
/// Returns `Ok(false)` for stale timestamps and for signatures that are not
/// hex or do not match.
pub fn validate_customer_signature(
    secret: &str,
    customer_id: &str,
    timestamp: u64,
    signature: &str,
    tolerance_seconds: u64,
) -> Result<bool, SignatureError> {
    // Check timestamp validity first
    let current_time = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| SignatureError::Clock(e.to_string()))?
        .as_secs();

    if current_time.abs_diff(timestamp) > tolerance_seconds {
        return Ok(false);
    }

    let Ok(signature_bytes) = hex::decode(signature) else {
        return Ok(false);
    };

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| SignatureError::InvalidKey(e.to_string()))?;
    mac.update(format!("{timestamp}.{customer_id}").as_bytes());

    // Constant-time comparison
    Ok(mac.verify_slice(&signature_bytes).is_ok())
}
