//! PMNTS Checkout Config - hosted-payment iframe configuration for checkout
//!
//! Builds the configuration the checkout front end needs to embed the PMNTS
//! hosted-payment iframe:
//! - a signed iframe URL (HMAC-MD5 over a random nonce, plus an optional
//!   signed stylesheet URL)
//! - the fraud fingerprint script URL
//! - sandbox, iframe and card-save flags, including whether the customer
//!   already has a card stored for this gateway
//!
//! ## Architecture
//!
//! - `config/` - Merchant settings, customer id signing and server configuration
//! - `utils/` - HMAC signing, nonce generation and request helpers
//! - `services/` - URL composition, customer verification, the token vault seam
//!   and config assembly
//! - `models/` - Checkout config, customer and token types
//! - `handlers/` - HTTP endpoints and the app factory
//! - `middleware/` - Request ID propagation
//! - `telemetry` - Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```
//! use pmnts_checkout_config::{
//!     CustomerContext, GatewayConfigBuilder, InMemoryTokenVault, MerchantSettings,
//! };
//!
//! let settings = MerchantSettings {
//!     username: "demo".to_string(),
//!     shared_secret: "s3cr3t".to_string(),
//!     sandbox_mode: true,
//!     ..Default::default()
//! };
//! let vault = InMemoryTokenVault::default();
//!
//! let config = GatewayConfigBuilder::new(&settings, &vault)
//!     .build(&CustomerContext::guest())
//!     .unwrap();
//! assert!(config.iframe_src.starts_with("https://paynow.pmnts-sandbox.io/v2/demo/"));
//! ```

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

pub use config::{
    CustomerSigningConfig, EnvSettings, MerchantSettings, ServerConfig, SettingsSource,
};
pub use handlers::{checkout_config, create_app, create_base_app, create_openapi_spec, health, version};
pub use middleware::{RequestId, RequestIdMiddleware, RequestIdService};
pub use models::{
    CheckoutConfig, CustomerContext, GatewayConfig, HealthResponse, METHOD_CODE, PaymentSection,
    PaymentToken, VAULT_METHOD_CODE, VersionResponse,
};
pub use services::{
    CustomerAuthError, GatewayConfigBuilder, InMemoryTokenVault, PaymentTokenLookup,
    TokenLookupError, authenticate_customer, build_fraud_fingerprint_url, build_iframe_url,
};
pub use utils::hmac::{
    SignatureError, generate_customer_signature, generate_nonce, sign, validate_customer_signature,
};
