//! OpenAPI specification generation and app factory.

use crate::{
    config::{CustomerSigningConfig, MerchantSettings},
    handlers::{checkout_config, health, version},
    middleware::RequestIdMiddleware,
    services::{InMemoryTokenVault, PaymentTokenLookup},
};
use actix_web::App;
use paperclip::actix::{OpenApiExt, web};
use paperclip::v2::models::{DefaultApiRaw, Info};
use std::sync::Arc;
use tracing::warn;

/// Creates the shared OpenAPI specification for the service
pub fn create_openapi_spec() -> DefaultApiRaw {
    DefaultApiRaw {
        info: Info {
            title: "PMNTS Checkout Config".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: Some(
                "Checkout configuration for the PMNTS hosted-payment iframe.\n\n\
                ## Iframe signing\n\
                The iframe URL path ends in `HMAC-MD5(shared_secret, \"{nonce}:1.0:AUD\")` as lowercase hex.\n\
                A configured stylesheet is passed as `css` with `css_signature = HMAC-MD5(shared_secret, css_url)`.\n\
                The shared secret itself never leaves the service.\n\
                \n\
                **Headers:**\n\
                - `X-Customer-Id`: logged-in customer id set by the host session layer; omit for guests\n\
                - `X-Signature`: HMAC-SHA256 of `{timestamp}.{customer_id}`, required with `X-Customer-Id` when `CUSTOMER_SIGNING_SECRET` is set\n\
                - `X-Timestamp`: Unix timestamp (seconds) used in `X-Signature`\n\
                - `X-Request-ID`: optional correlation id, echoed on every response\n\
                \n\
                **Configuration:**\n\
                - `PMNTS_USERNAME`, `PMNTS_SHARED_SECRET`, `PMNTS_SANDBOX_MODE`\n\
                - `PMNTS_IFRAME_CSS`, `PMNTS_IFRAME_TOKENIZATION`, `PMNTS_CUSTOMER_SAVE_CREDIT_CARD`\n\
                - `PMNTS_SAVED_TOKENS`: JSON object of customer id to stored tokens\n\
                - `CUSTOMER_SIGNING_SECRET`, `CUSTOMER_SIGNING_TOLERANCE`: customer id signing (default tolerance 300 seconds)".into(),
            ),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Creates an app serving the checkout config for `settings`, looking up
/// saved cards through `token_lookup`
///
/// When `customer_signing` is set, customer ids must be signed by the host
/// session layer; otherwise the `X-Customer-Id` header is trusted as is.
pub fn create_app(
    settings: MerchantSettings,
    token_lookup: Arc<dyn PaymentTokenLookup>,
    customer_signing: Option<CustomerSigningConfig>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // Shared state: merchant settings and the saved-card lookup
    let mut app = App::new()
        .wrap(RequestIdMiddleware)
        .wrap_api_with_spec(create_openapi_spec())
        .app_data(web::Data::new(settings))
        .app_data(web::Data::from(token_lookup));

    // The checkout handler only verifies signatures when this is registered
    if let Some(config) = customer_signing {
        app = app.app_data(web::Data::new(config));
    }

    // Routes, then the generated spec at /api/spec/v2
    app.service(web::resource("/api/health").route(web::get().to(health)))
        .service(web::resource("/api/version").route(web::get().to(version)))
        .service(web::resource("/api/checkout/config").route(web::get().to(checkout_config)))
        .with_json_spec_at("/api/spec/v2")
        .build()
}

/// Creates the app with settings and saved tokens loaded from the environment
///
/// This can be used both for testing and as the main application.
pub fn create_base_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let customer_signing = CustomerSigningConfig::from_env();
    if customer_signing.is_none() {
        warn!("CUSTOMER_SIGNING_SECRET not set, trusting unsigned X-Customer-Id headers");
    }

    create_app(
        MerchantSettings::from_env(),
        Arc::new(InMemoryTokenVault::from_env()),
        customer_signing,
    )
}
