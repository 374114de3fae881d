//! Assembly of the checkout gateway configuration.

use crate::{
    config::MerchantSettings,
    models::{CustomerContext, GatewayConfig, METHOD_CODE, VAULT_METHOD_CODE},
    services::{
        token_vault::PaymentTokenLookup,
        url_composer::{build_fraud_fingerprint_url, build_iframe_url},
    },
    utils::hmac::{SignatureError, generate_nonce},
};
use tracing::{debug, warn};

/// Builds the per-request [`GatewayConfig`] from merchant settings and the
/// current customer
///
/// The only collaborator call is the read-only vault lookup. Lookup failures
/// degrade to "no saved card" and are never returned to the caller.
pub struct GatewayConfigBuilder<'a> {
    settings: &'a MerchantSettings,
    token_lookup: &'a dyn PaymentTokenLookup,
}

impl<'a> GatewayConfigBuilder<'a> {
    pub fn new(settings: &'a MerchantSettings, token_lookup: &'a dyn PaymentTokenLookup) -> Self {
        Self {
            settings,
            token_lookup,
        }
    }

    /// Build the configuration with a freshly generated nonce
    pub fn build(&self, customer: &CustomerContext) -> Result<GatewayConfig, SignatureError> {
        self.build_with_nonce(customer, &generate_nonce())
    }

    /// Build the configuration, signing the iframe URL for `nonce`
    pub fn build_with_nonce(
        &self,
        customer: &CustomerContext,
        nonce: &str,
    ) -> Result<GatewayConfig, SignatureError> {
        // Card-save flags depend on the customer, everything else on the merchant
        let config = GatewayConfig {
            iframe_src: build_iframe_url(self.settings, nonce)?,
            is_iframe_enabled: self.settings.iframe_tokenization,
            fraud_fingerprint_src: build_fraud_fingerprint_url(self.settings),
            is_sandbox: self.settings.sandbox_mode,
            can_save_card: self.can_save_card(customer),
            customer_has_saved_cc: self.customer_has_saved_cc(customer),
            vault_method_code: VAULT_METHOD_CODE.to_string(),
        };

        debug!(
            username = %self.settings.username,
            sandbox = config.is_sandbox,
            iframe_enabled = config.is_iframe_enabled,
            can_save_card = config.can_save_card,
            customer_has_saved_cc = config.customer_has_saved_cc,
            "Built gateway checkout config"
        );

        Ok(config)
    }

    /// Logged-in customers may save cards when the merchant allows it
    pub fn can_save_card(&self, customer: &CustomerContext) -> bool {
        customer.is_authenticated() && self.settings.customer_save_credit_card
    }

    /// Whether the customer already has a usable card stored for this gateway
    pub fn customer_has_saved_cc(&self, customer: &CustomerContext) -> bool {
        // Guests never have saved cards
        let Some(customer_id) = customer.customer_id() else {
            return false;
        };

        // Skip the lookup when the session could not load the customer record
        if !customer.customer_loaded() {
            return false;
        }

        // Only tokens stored for this gateway count, the vault code does not
        match self.token_lookup.visible_available_tokens(customer_id) {
            Ok(tokens) => tokens
                .iter()
                .any(|token| token.payment_method_code == METHOD_CODE),
            // Degrade rather than fail checkout
            Err(e) => {
                warn!(
                    customer_id = %customer_id,
                    error = %e,
                    "Saved card lookup failed, treating customer as having no saved cards"
                );
                false
            }
        }
    }
}
