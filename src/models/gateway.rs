//! Checkout configuration consumed by the front-end payment form.

use paperclip::actix::Apiv2Schema;
use serde::{Deserialize, Serialize};

/// Payment method code the gateway integration is registered under
pub const METHOD_CODE: &str = "pmnts_gateway";

/// Payment method code used for cards stored in the vault
pub const VAULT_METHOD_CODE: &str = "pmnts_gateway_vault";

/// Settings the checkout page needs to embed the hosted-payment iframe
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfig {
    /// Signed hosted-payment iframe URL
    pub iframe_src: String,
    pub is_iframe_enabled: bool,
    /// Fraud fingerprint script URL
    pub fraud_fingerprint_src: String,
    pub is_sandbox: bool,
    pub can_save_card: bool,
    #[serde(rename = "customerHasSavedCC")]
    pub customer_has_saved_cc: bool,
    #[serde(rename = "ccVaultCode")]
    pub vault_method_code: String,
}

/// Gateway entry of the payment section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct PaymentSection {
    #[serde(rename = "pmntsGateway")]
    pub pmnts_gateway: GatewayConfig,
}

/// Top-level checkout configuration envelope
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Apiv2Schema)]
pub struct CheckoutConfig {
    pub payment: PaymentSection,
}

impl From<GatewayConfig> for CheckoutConfig {
    fn from(gateway: GatewayConfig) -> Self {
        Self {
            payment: PaymentSection {
                pmnts_gateway: gateway,
            },
        }
    }
}
