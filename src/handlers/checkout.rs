//! Checkout configuration endpoint handler.

use crate::{
    config::{CustomerSigningConfig, MerchantSettings},
    middleware::RequestId,
    models::CheckoutConfig,
    services::{GatewayConfigBuilder, PaymentTokenLookup, authenticate_customer},
};
use actix_web::{Error, HttpMessage, HttpRequest, Result, web};
use paperclip::actix::api_v2_operation;
use tracing::{error, info, warn};

/// Checkout configuration endpoint
///
/// Returns the hosted-payment iframe settings for the current shopper. The
/// logged-in customer, if any, is identified by the `X-Customer-Id` header
/// set by the host session layer. When a [`CustomerSigningConfig`] is
/// registered, that header must be signed (`X-Signature`, `X-Timestamp`).
/// Every call signs a fresh nonce, so the iframe URL differs between calls.
#[api_v2_operation(
    summary = "Checkout Gateway Configuration",
    description = "Returns the signed hosted-payment iframe URL, fraud fingerprint script URL and card-save flags for the checkout page.",
    tags("Checkout"),
    responses(
        (status = 200, description = "Successful response", body = CheckoutConfig),
        (status = 401, description = "Unauthorized - Customer id signature missing or invalid"),
        (status = 500, description = "Gateway settings or token vault not configured")
    )
)]
pub async fn checkout_config(req: HttpRequest) -> Result<web::Json<CheckoutConfig>, Error> {
    // Correlate logs with the request ID set by the middleware
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();

    let settings = req
        .app_data::<web::Data<MerchantSettings>>()
        .ok_or_else(|| {
            error!(request_id = %request_id, "Merchant settings missing from app data");
            actix_web::error::ErrorInternalServerError("Gateway settings are not configured")
        })?;

    let token_lookup = req
        .app_data::<web::Data<dyn PaymentTokenLookup>>()
        .ok_or_else(|| {
            error!(request_id = %request_id, "Token vault missing from app data");
            actix_web::error::ErrorInternalServerError("Token vault is not configured")
        })?;

    // Verify the customer id signature if signing is configured
    let signing_config = req
        .app_data::<web::Data<CustomerSigningConfig>>()
        .map(|config| config.get_ref());
    let customer = authenticate_customer(&req, signing_config).map_err(|e| {
        warn!(request_id = %request_id, error = %e, "Rejected customer identity");
        actix_web::error::ErrorUnauthorized("Invalid or missing customer signature")
    })?;

    // Sign a fresh iframe URL and resolve the card-save flags
    let builder = GatewayConfigBuilder::new(settings.get_ref(), token_lookup.get_ref());
    let gateway = builder.build(&customer).map_err(|e| {
        error!(request_id = %request_id, error = %e, "Failed to sign iframe URL");
        actix_web::error::ErrorInternalServerError("Failed to sign gateway request")
    })?;

    info!(
        request_id = %request_id,
        authenticated = customer.is_authenticated(),
        sandbox = gateway.is_sandbox,
        "Served checkout gateway config"
    );

    Ok(web::Json(CheckoutConfig::from(gateway)))
}
