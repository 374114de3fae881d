//! HTTP utility functions for extracting request information.

use actix_web::HttpRequest;

/// Header the host session layer uses to pass the logged-in customer
pub const CUSTOMER_ID_HEADER: &str = "X-Customer-Id";

/// Extract the authenticated customer identifier, if any
///
/// A missing, non-UTF-8 or blank header means the shopper is a guest.
pub fn extract_customer_id(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(CUSTOMER_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| id.to_string())
}

/// Extract client IP address, preferring the first `X-Forwarded-For` hop
pub fn extract_client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        let ip = forwarded.split(',').next().unwrap_or(forwarded).trim();
        if !ip.is_empty() {
            return ip.to_string();
        }
    }

    req.connection_info()
        .peer_addr()
        .unwrap_or("unknown")
        .to_string()
}
