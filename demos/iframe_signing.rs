//! Iframe Signing Demo
//!
//! Prints a signed hosted-payment iframe URL for the settings in the
//! `PMNTS_*` environment variables. Run with:
//!
//! ```
//! PMNTS_USERNAME=demo PMNTS_SHARED_SECRET=s3cr3t PMNTS_SANDBOX_MODE=1 \
//!     cargo run --example iframe_signing
//! ```

use pmnts_checkout_config::{
    MerchantSettings, build_fraud_fingerprint_url, build_iframe_url, generate_nonce, sign,
};

fn main() {
    println!("PMNTS Iframe Signing Demo");
    println!("=========================\n");

    let settings = MerchantSettings::from_env();
    let nonce = generate_nonce();
    let payload = format!("{nonce}:1.0:AUD");

    println!("Configuration:");
    println!("  Username: {}", settings.username);
    println!("  Sandbox: {}", settings.sandbox_mode);
    println!("  Stylesheet: {}", settings.iframe_css.as_deref().unwrap_or("(none)"));

    match sign(&payload, &settings.shared_secret) {
        Ok(hash) => {
            println!("\nSigned payload:");
            println!("  '{payload}' -> {hash}");
        }
        Err(e) => {
            println!("Error generating signature: {e}");
            return;
        }
    }

    match build_iframe_url(&settings, &nonce) {
        Ok(url) => println!("\nIframe URL:\n  {url}"),
        Err(e) => println!("Error building iframe URL: {e}"),
    }

    println!(
        "\nFraud fingerprint script:\n  {}",
        build_fraud_fingerprint_url(&settings)
    );
}
