//! HTTP request handlers for API endpoints.
//!
//! This module contains the checkout configuration endpoint, the standard
//! health and version endpoints, and the app factory.

pub mod checkout;
pub mod health;
pub mod openapi;
pub mod version;

pub use checkout::*;
pub use health::*;
pub use openapi::*;
pub use version::*;
