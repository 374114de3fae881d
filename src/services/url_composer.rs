//! URL construction for the hosted-payment iframe and fraud fingerprint script.
//!
//! Everything here is pure string formatting; nothing talks to the gateway.
//! The username and CSS URL are inserted as configured, without escaping or
//! validation, because the gateway signs and matches the raw values.

use crate::{
    config::MerchantSettings,
    utils::hmac::{SignatureError, sign},
};

pub const PAYNOW_PRODUCTION_URL: &str = "https://paynow.pmnts.io";
pub const PAYNOW_SANDBOX_URL: &str = "https://paynow.pmnts-sandbox.io";
pub const GATEWAY_PRODUCTION_URL: &str = "https://gateway.pmnts.io";
pub const GATEWAY_SANDBOX_URL: &str = "https://gateway.pmnts-sandbox.io";

/// Currency and amount the tokenize-only iframe is signed for
pub const IFRAME_CURRENCY: &str = "AUD";
pub const IFRAME_AMOUNT: &str = "1.0";

/// Fixed iframe feature toggles
pub const IFRAME_QUERY: &str = "show_extras=false&show_email=false&iframe=true&paypal=false\
&tokenize_only=true&masterpass=false&visacheckout=false&hide_button=true&postmessage=true\
&return_target=_self&ajax=true";

/// Build the signed hosted-payment iframe URL for `nonce`
pub fn build_iframe_url(settings: &MerchantSettings, nonce: &str) -> Result<String, SignatureError> {
    let payload = format!("{nonce}:{IFRAME_AMOUNT}:{IFRAME_CURRENCY}");
    let hash = sign(&payload, &settings.shared_secret)?;

    let base_url = if settings.sandbox_mode {
        PAYNOW_SANDBOX_URL
    } else {
        PAYNOW_PRODUCTION_URL
    };

    let mut url = format!(
        "{base_url}/v2/{}/{nonce}/{IFRAME_CURRENCY}/{IFRAME_AMOUNT}/{hash}?{IFRAME_QUERY}",
        settings.username
    );

    if let Some(css_url) = settings.iframe_css.as_deref().filter(|css| !css.is_empty()) {
        let css_signature = sign(css_url, &settings.shared_secret)?;
        url.push_str(&format!("&css={css_url}&css_signature={css_signature}"));
    }

    Ok(url)
}

/// Build the URL of the merchant's fraud fingerprint script
pub fn build_fraud_fingerprint_url(settings: &MerchantSettings) -> String {
    let base_url = if settings.sandbox_mode {
        GATEWAY_SANDBOX_URL
    } else {
        GATEWAY_PRODUCTION_URL
    };

    format!("{base_url}/fraud/fingerprint/{}.js", settings.username)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_settings() -> MerchantSettings {
        MerchantSettings {
            username: "demo".to_string(),
            shared_secret: "s3cr3t".to_string(),
            sandbox_mode: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_iframe_url_matches_known_value() {
        let url = build_iframe_url(&demo_settings(), "abcde").unwrap();

        assert_eq!(
            url,
            "https://paynow.pmnts-sandbox.io/v2/demo/abcde/AUD/1.0/b7c1389b2fe78ee28d7449c45864ee8d\
?show_extras=false&show_email=false&iframe=true&paypal=false&tokenize_only=true\
&masterpass=false&visacheckout=false&hide_button=true&postmessage=true\
&return_target=_self&ajax=true"
        );
    }

    #[test]
    fn test_sandbox_toggle_only_changes_host() {
        let sandbox = demo_settings();
        let production = MerchantSettings {
            sandbox_mode: false,
            ..demo_settings()
        };

        let sandbox_iframe = build_iframe_url(&sandbox, "abcde").unwrap();
        let production_iframe = build_iframe_url(&production, "abcde").unwrap();
        assert_eq!(sandbox_iframe.replace("pmnts-sandbox.io", "pmnts.io"), production_iframe);

        let sandbox_fingerprint = build_fraud_fingerprint_url(&sandbox);
        let production_fingerprint = build_fraud_fingerprint_url(&production);
        assert_eq!(
            sandbox_fingerprint,
            "https://gateway.pmnts-sandbox.io/fraud/fingerprint/demo.js"
        );
        assert_eq!(production_fingerprint, "https://gateway.pmnts.io/fraud/fingerprint/demo.js");
    }

    #[test]
    fn test_css_parameters_are_signed() {
        let settings = MerchantSettings {
            iframe_css: Some("https://shop.example.com/iframe.css".to_string()),
            ..demo_settings()
        };
        let url = build_iframe_url(&settings, "abcde").unwrap();

        assert!(url.ends_with(
            "&css=https://shop.example.com/iframe.css&css_signature=194b519d15279155bc04909870d313c4"
        ));
        assert_eq!(url.matches("&css=").count(), 1);
        assert_eq!(url.matches("&css_signature=").count(), 1);
    }

    #[test]
    fn test_empty_css_adds_nothing() {
        let settings = MerchantSettings {
            iframe_css: Some(String::new()),
            ..demo_settings()
        };
        let url = build_iframe_url(&settings, "abcde").unwrap();

        assert!(!url.contains("css="));
    }

    #[test]
    fn test_secret_never_appears_in_urls() {
        let settings = MerchantSettings {
            iframe_css: Some("https://shop.example.com/iframe.css".to_string()),
            ..demo_settings()
        };

        assert!(!build_iframe_url(&settings, "abcde").unwrap().contains("s3cr3t"));
        assert!(!build_fraud_fingerprint_url(&settings).contains("s3cr3t"));
    }

    #[test]
    fn test_empty_username_passes_through() {
        let settings = MerchantSettings::default();

        let url = build_iframe_url(&settings, "abcde").unwrap();
        assert!(url.starts_with("https://paynow.pmnts.io/v2//abcde/AUD/1.0/"));
        assert_eq!(
            build_fraud_fingerprint_url(&settings),
            "https://gateway.pmnts.io/fraud/fingerprint/.js"
        );
    }
}
