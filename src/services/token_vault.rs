//! Lookup of a customer's stored payment tokens.
//!
//! The vault itself belongs to the host platform; this module defines the
//! seam the config builder calls through, plus an in-memory vault used by
//! the standalone server and the tests.

use crate::models::PaymentToken;
use std::collections::HashMap;
use std::env;
use tracing::{info, warn};

/// Errors a vault lookup can report
#[derive(Debug, thiserror::Error)]
pub enum TokenLookupError {
    #[error("Token vault unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown customer: {0}")]
    InvalidCustomer(String),
}

/// Read access to the host's payment token vault
pub trait PaymentTokenLookup: Send + Sync {
    /// Return the tokens the customer can currently see and use
    fn visible_available_tokens(
        &self,
        customer_id: &str,
    ) -> Result<Vec<PaymentToken>, TokenLookupError>;
}

/// Read-only vault keyed by customer id
#[derive(Clone, Debug, Default)]
pub struct InMemoryTokenVault {
    tokens: HashMap<String, Vec<PaymentToken>>,
}

impl InMemoryTokenVault {
    pub fn new(tokens: HashMap<String, Vec<PaymentToken>>) -> Self {
        Self { tokens }
    }

    pub fn with_tokens(
        mut self,
        customer_id: impl Into<String>,
        tokens: impl IntoIterator<Item = PaymentToken>,
    ) -> Self {
        self.tokens
            .entry(customer_id.into())
            .or_default()
            .extend(tokens);
        self
    }

    /// Parse a vault from a JSON object mapping customer ids to token lists
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    /// Seed the vault from `PMNTS_SAVED_TOKENS`, falling back to an empty vault
    pub fn from_env() -> Self {
        let Ok(json) = env::var("PMNTS_SAVED_TOKENS") else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(vault) => {
                info!(customers = vault.tokens.len(), "Loaded saved payment tokens");
                vault
            }
            Err(e) => {
                warn!(error = %e, "Ignoring malformed PMNTS_SAVED_TOKENS");
                Self::default()
            }
        }
    }
}

impl PaymentTokenLookup for InMemoryTokenVault {
    fn visible_available_tokens(
        &self,
        customer_id: &str,
    ) -> Result<Vec<PaymentToken>, TokenLookupError> {
        Ok(self
            .tokens
            .get(customer_id)
            .map(|tokens| {
                tokens
                    .iter()
                    .filter(|token| token.is_available())
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}
