//! Custom middleware implementations for the API.
//!
//! This module contains the request ID middleware used to correlate
//! request logs.

pub mod request_id;

pub use request_id::*;
