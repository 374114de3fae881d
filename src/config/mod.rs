//! Configuration structures and loading utilities.
//!
//! This module contains the merchant gateway settings, the customer id
//! signing configuration and the HTTP server configuration, including
//! environment variable loading and default values.

pub mod customer_signing;
pub mod server;
pub mod settings;

pub use customer_signing::*;
pub use server::*;
pub use settings::{EnvSettings, MerchantSettings, SettingsSource, is_truthy};
