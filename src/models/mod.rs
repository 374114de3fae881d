//! Data models for the checkout configuration service.
//!
//! This module contains the checkout configuration returned to the front end,
//! the customer and vault token types, and the standard API responses.

pub mod api;
pub mod customer;
pub mod gateway;

pub use api::*;
pub use customer::*;
pub use gateway::*;
