//! Customer session and stored payment token models.

use serde::{Deserialize, Serialize};

/// The shopper behind the current checkout request
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomerContext {
    customer_id: Option<String>,
    customer_loaded: bool,
}

impl CustomerContext {
    /// A shopper who is not logged in
    pub fn guest() -> Self {
        Self::default()
    }

    /// A logged-in customer whose account could be loaded
    pub fn authenticated(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            customer_loaded: true,
        }
    }

    /// A session that carries a customer id but whose account failed to load
    pub fn unresolved(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            customer_loaded: false,
        }
    }

    pub fn customer_id(&self) -> Option<&str> {
        self.customer_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.customer_id.is_some()
    }

    pub fn customer_loaded(&self) -> bool {
        self.customer_loaded
    }
}

impl From<Option<String>> for CustomerContext {
    fn from(customer_id: Option<String>) -> Self {
        customer_id.map_or_else(Self::guest, Self::authenticated)
    }
}

fn default_true() -> bool {
    true
}

/// A card stored in the host's payment vault
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentToken {
    pub payment_method_code: String,
    #[serde(default)]
    pub public_hash: String,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl PaymentToken {
    pub fn new(payment_method_code: impl Into<String>) -> Self {
        Self {
            payment_method_code: payment_method_code.into(),
            public_hash: String::new(),
            is_visible: true,
            is_active: true,
        }
    }

    /// Whether the token may be offered to the customer at checkout
    pub fn is_available(&self) -> bool {
        self.is_visible && self.is_active
    }
}
