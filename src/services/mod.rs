//! Business logic and service layer modules.
//!
//! This module contains the core logic of the crate: URL composition for
//! the hosted-payment gateway, the saved-card vault seam, verification of
//! the customer identity, and assembly of the checkout configuration.

pub mod auth;
pub mod config_builder;
pub mod token_vault;
pub mod url_composer;

pub use auth::*;
pub use config_builder::*;
pub use token_vault::*;
pub use url_composer::*;
