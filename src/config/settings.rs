//! Merchant settings for the hosted-payment gateway.
//!
//! The host platform stores every payment setting as a loosely typed string.
//! [`SettingsSource`] is the accessor the host provides, and
//! [`MerchantSettings`] is the typed view the rest of the crate works with.
//! Missing keys read as an empty string or `false`; reading settings never fails.

use std::collections::HashMap;
use std::env;
use std::fmt;

pub const USERNAME: &str = "username";
pub const SHARED_SECRET: &str = "shared_secret";
pub const SANDBOX_MODE: &str = "sandbox_mode";
pub const IFRAME_CSS: &str = "iframe_css";
pub const IFRAME_TOKENIZATION: &str = "iframe_tokenization";
pub const CUSTOMER_SAVE_CREDIT_CARD: &str = "customer_save_credit_card";

/// Read access to the host's payment method configuration
pub trait SettingsSource {
    /// Return the raw value stored under `key`, if any
    fn config_value(&self, key: &str) -> Option<String>;
}

impl SettingsSource for HashMap<String, String> {
    fn config_value(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl SettingsSource for HashMap<&str, &str> {
    fn config_value(&self, key: &str) -> Option<String> {
        self.get(key).map(|v| v.to_string())
    }
}

/// Settings read from `PMNTS_*` environment variables
///
/// `sandbox_mode` is read from `PMNTS_SANDBOX_MODE`, and so on.
#[derive(Clone, Debug)]
pub struct EnvSettings {
    prefix: String,
}

impl Default for EnvSettings {
    fn default() -> Self {
        Self {
            prefix: "PMNTS_".to_string(),
        }
    }
}

impl EnvSettings {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.to_uppercase())
    }
}

impl SettingsSource for EnvSettings {
    fn config_value(&self, key: &str) -> Option<String> {
        env::var(self.var_name(key)).ok()
    }
}

/// Coerce a stored setting to a boolean.
///
/// Trimmed and case-insensitive: `""`, `"0"`, `"false"`, `"no"` and `"off"`
/// are false, every other value is true.
pub fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_lowercase().as_str(),
        "" | "0" | "false" | "no" | "off"
    )
}

/// Typed view of the gateway's merchant configuration
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MerchantSettings {
    pub username: String,
    pub shared_secret: String,
    pub sandbox_mode: bool,
    /// Stylesheet URL passed to the hosted iframe, `None` when unset or empty
    pub iframe_css: Option<String>,
    pub iframe_tokenization: bool,
    pub customer_save_credit_card: bool,
}

impl fmt::Debug for MerchantSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantSettings")
            .field("username", &self.username)
            .field("shared_secret", &"[REDACTED]")
            .field("sandbox_mode", &self.sandbox_mode)
            .field("iframe_css", &self.iframe_css)
            .field("iframe_tokenization", &self.iframe_tokenization)
            .field("customer_save_credit_card", &self.customer_save_credit_card)
            .finish()
    }
}

impl MerchantSettings {
    /// Read every gateway setting from `source`
    pub fn from_source<S: SettingsSource + ?Sized>(source: &S) -> Self {
        let text = |key: &str| source.config_value(key).unwrap_or_default();
        let flag = |key: &str| source.config_value(key).is_some_and(|v| is_truthy(&v));

        let iframe_css = source
            .config_value(IFRAME_CSS)
            .filter(|css| !css.is_empty());

        Self {
            username: text(USERNAME),
            shared_secret: text(SHARED_SECRET),
            sandbox_mode: flag(SANDBOX_MODE),
            iframe_css,
            iframe_tokenization: flag(IFRAME_TOKENIZATION),
            customer_save_credit_card: flag(CUSTOMER_SAVE_CREDIT_CARD),
        }
    }

    /// Load configuration from `PMNTS_*` environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_source(&EnvSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to synchronize tests that modify environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_truthy_coercion() {
        for falsy in ["", "0", "false", "FALSE", " no ", "off"] {
            assert!(!is_truthy(falsy), "{falsy:?} should be false");
        }
        for truthy in ["1", "true", "yes", "on", "2"] {
            assert!(is_truthy(truthy), "{truthy:?} should be true");
        }
    }

    #[test]
    fn test_missing_keys_are_permissive() {
        let source: HashMap<&str, &str> = HashMap::new();
        let settings = MerchantSettings::from_source(&source);

        assert_eq!(settings, MerchantSettings::default());
        assert_eq!(settings.username, "");
        assert!(!settings.sandbox_mode);
        assert!(settings.iframe_css.is_none());
    }

    #[test]
    fn test_from_source_reads_all_keys() {
        let source = HashMap::from([
            (USERNAME, "demo"),
            (SHARED_SECRET, "s3cr3t"),
            (SANDBOX_MODE, "1"),
            (IFRAME_CSS, "https://shop.example.com/iframe.css"),
            (IFRAME_TOKENIZATION, "1"),
            (CUSTOMER_SAVE_CREDIT_CARD, "0"),
        ]);
        let settings = MerchantSettings::from_source(&source);

        assert_eq!(settings.username, "demo");
        assert_eq!(settings.shared_secret, "s3cr3t");
        assert!(settings.sandbox_mode);
        assert_eq!(
            settings.iframe_css.as_deref(),
            Some("https://shop.example.com/iframe.css")
        );
        assert!(settings.iframe_tokenization);
        assert!(!settings.customer_save_credit_card);
    }

    #[test]
    fn test_empty_css_is_none() {
        let source = HashMap::from([(IFRAME_CSS, "")]);
        assert!(MerchantSettings::from_source(&source).iframe_css.is_none());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let settings = MerchantSettings {
            shared_secret: "s3cr3t".to_string(),
            ..Default::default()
        };
        let debug = format!("{settings:?}");

        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_env() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("PMNTS_USERNAME", "env-merchant");
            env::set_var("PMNTS_SANDBOX_MODE", "true");
            env::remove_var("PMNTS_IFRAME_CSS");
        }

        let settings = MerchantSettings::from_env();
        assert_eq!(settings.username, "env-merchant");
        assert!(settings.sandbox_mode);
        assert!(settings.iframe_css.is_none());

        unsafe {
            env::remove_var("PMNTS_USERNAME");
            env::remove_var("PMNTS_SANDBOX_MODE");
        }
    }

    #[test]
    fn test_custom_env_prefix() {
        let _lock = ENV_MUTEX.lock().unwrap();

        unsafe {
            env::set_var("SHOP_GW_USERNAME", "prefixed");
        }

        let settings = MerchantSettings::from_source(&EnvSettings::with_prefix("SHOP_GW_"));
        assert_eq!(settings.username, "prefixed");

        unsafe {
            env::remove_var("SHOP_GW_USERNAME");
        }
    }
}
