//! Utility functions and helper modules.
//!
//! This module contains the gateway signing primitives and helpers for
//! reading request metadata.

pub mod hmac;
pub mod http;

pub use self::hmac::*;
pub use http::*;
