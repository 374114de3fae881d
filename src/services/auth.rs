//! Verification of the customer identity passed by the host session layer.

use crate::{
    config::CustomerSigningConfig,
    models::CustomerContext,
    utils::{
        extract_customer_id,
        hmac::{SignatureError, validate_customer_signature},
    },
};
use actix_web::HttpRequest;

/// Reasons a claimed customer id is rejected
#[derive(Debug, thiserror::Error)]
pub enum CustomerAuthError {
    #[error("Missing X-Signature header")]
    MissingSignature,

    #[error("Missing X-Timestamp header")]
    MissingTimestamp,

    #[error("Invalid X-Timestamp format")]
    InvalidTimestamp,

    #[error("Invalid signature or timestamp")]
    InvalidSignature,

    #[error("Signature validation error: {0}")]
    Signature(#[from] SignatureError),
}

/// Resolve the shopper behind `req`
///
/// Without a signing config the `X-Customer-Id` header is taken as is. With
/// one, a claimed customer id must carry an `X-Signature` over
/// `{timestamp}.{customer_id}` and a fresh `X-Timestamp`. Requests that claim
/// no customer id are guests either way.
pub fn authenticate_customer(
    req: &HttpRequest,
    config: Option<&CustomerSigningConfig>,
) -> Result<CustomerContext, CustomerAuthError> {
    // Nothing to verify for guests
    let Some(customer_id) = extract_customer_id(req) else {
        return Ok(CustomerContext::guest());
    };

    // Without a signing config the host network is trusted
    let Some(config) = config else {
        return Ok(CustomerContext::authenticated(customer_id));
    };

    let signature = req
        .headers()
        .get("X-Signature")
        .and_then(|h| h.to_str().ok())
        .ok_or(CustomerAuthError::MissingSignature)?;

    let timestamp: u64 = req
        .headers()
        .get("X-Timestamp")
        .and_then(|h| h.to_str().ok())
        .ok_or(CustomerAuthError::MissingTimestamp)?
        .parse()
        .map_err(|_| CustomerAuthError::InvalidTimestamp)?;

    if validate_customer_signature(
        &config.secret,
        &customer_id,
        timestamp,
        signature,
        config.timestamp_tolerance_seconds,
    )? {
        Ok(CustomerContext::authenticated(customer_id))
    } else {
        Err(CustomerAuthError::InvalidSignature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{CUSTOMER_ID_HEADER, hmac::generate_customer_signature};
    use actix_web::test::TestRequest;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn now() -> u64 {
        SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs()
    }

    #[test]
    fn test_unsigned_header_trusted_without_config() {
        let req = TestRequest::default()
            .insert_header((CUSTOMER_ID_HEADER, "42"))
            .to_http_request();

        let customer = authenticate_customer(&req, None).unwrap();
        assert_eq!(customer, CustomerContext::authenticated("42"));
    }

    #[test]
    fn test_guest_needs_no_signature() {
        let config = CustomerSigningConfig::new("session-key");
        let req = TestRequest::default().to_http_request();

        let customer = authenticate_customer(&req, Some(&config)).unwrap();
        assert!(!customer.is_authenticated());
    }

    #[test]
    fn test_unsigned_header_rejected_with_config() {
        let config = CustomerSigningConfig::new("session-key");
        let req = TestRequest::default()
            .insert_header((CUSTOMER_ID_HEADER, "42"))
            .to_http_request();

        assert!(matches!(
            authenticate_customer(&req, Some(&config)),
            Err(CustomerAuthError::MissingSignature)
        ));
    }

    #[test]
    fn test_bad_timestamp_rejected() {
        let config = CustomerSigningConfig::new("session-key");
        let req = TestRequest::default()
            .insert_header((CUSTOMER_ID_HEADER, "42"))
            .insert_header(("X-Signature", "00"))
            .insert_header(("X-Timestamp", "yesterday"))
            .to_http_request();

        assert!(matches!(
            authenticate_customer(&req, Some(&config)),
            Err(CustomerAuthError::InvalidTimestamp)
        ));
    }

    #[test]
    fn test_signature_for_other_customer_rejected() {
        let config = CustomerSigningConfig::new("session-key");
        let timestamp = now();
        let signature = generate_customer_signature("session-key", "42", timestamp).unwrap();
        let req = TestRequest::default()
            .insert_header((CUSTOMER_ID_HEADER, "43"))
            .insert_header(("X-Signature", signature))
            .insert_header(("X-Timestamp", timestamp.to_string()))
            .to_http_request();

        assert!(matches!(
            authenticate_customer(&req, Some(&config)),
            Err(CustomerAuthError::InvalidSignature)
        ));
    }

    #[test]
    fn test_valid_signature_accepted() {
        let config = CustomerSigningConfig::new("session-key");
        let timestamp = now();
        let signature = generate_customer_signature("session-key", "42", timestamp).unwrap();
        let req = TestRequest::default()
            .insert_header((CUSTOMER_ID_HEADER, "42"))
            .insert_header(("X-Signature", signature))
            .insert_header(("X-Timestamp", timestamp.to_string()))
            .to_http_request();

        let customer = authenticate_customer(&req, Some(&config)).unwrap();
        assert_eq!(customer.customer_id(), Some("42"));
    }
}
