//! Signing configuration for customer identities passed by the host.

use std::env;

/// Configuration for verifying the signed `X-Customer-Id` header
///
/// When registered with the app, a customer id is only trusted if it comes
/// with a valid `X-Signature` / `X-Timestamp` pair.
#[derive(Clone)]
pub struct CustomerSigningConfig {
    pub secret: String,
    pub timestamp_tolerance_seconds: u64,
}

impl CustomerSigningConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            timestamp_tolerance_seconds: 300, // 5 minutes
        }
    }

    /// Load configuration from environment variables
    ///
    /// Returns `None` when `CUSTOMER_SIGNING_SECRET` is unset or empty, which
    /// leaves customer ids unverified.
    pub fn from_env() -> Option<Self> {
        let secret = env::var("CUSTOMER_SIGNING_SECRET")
            .ok()
            .filter(|s| !s.is_empty())?;

        let timestamp_tolerance_seconds = env::var("CUSTOMER_SIGNING_TOLERANCE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Some(Self {
            secret,
            timestamp_tolerance_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to synchronize tests that modify environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_disabled_without_secret() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::remove_var("CUSTOMER_SIGNING_SECRET");
        }
        assert!(CustomerSigningConfig::from_env().is_none());

        unsafe {
            env::set_var("CUSTOMER_SIGNING_SECRET", "");
        }
        assert!(CustomerSigningConfig::from_env().is_none());

        unsafe {
            env::remove_var("CUSTOMER_SIGNING_SECRET");
        }
    }

    #[test]
    fn test_from_env_with_secret() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("CUSTOMER_SIGNING_SECRET", "session-key");
            env::set_var("CUSTOMER_SIGNING_TOLERANCE", "60");
        }

        let config = CustomerSigningConfig::from_env().unwrap();
        assert_eq!(config.secret, "session-key");
        assert_eq!(config.timestamp_tolerance_seconds, 60);

        unsafe {
            env::remove_var("CUSTOMER_SIGNING_SECRET");
            env::remove_var("CUSTOMER_SIGNING_TOLERANCE");
        }
    }

    #[test]
    fn test_new_uses_default_tolerance() {
        assert_eq!(CustomerSigningConfig::new("k").timestamp_tolerance_seconds, 300);
    }
}
