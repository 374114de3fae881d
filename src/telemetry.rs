//! Log subscriber setup and structured request fields.

use crate::{config::ServerConfig, utils::extract_client_ip};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// `RUST_LOG` takes precedence over the configured filter. Output is JSON
/// when `LOG_FORMAT=json`, human readable otherwise.
pub fn init_tracing(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json_logs {
        builder.json().try_init()?;
    } else {
        builder.try_init()?;
    }

    info!(
        message = "Tracing initialized",
        service_name = env!("CARGO_PKG_NAME"),
        service_version = env!("CARGO_PKG_VERSION"),
        json = config.json_logs,
    );

    Ok(())
}

/// Request attributes attached to every request log line
pub struct RequestFields {
    pub user_agent: Option<String>,
    pub ip_address: String,
    pub method: String,
    pub path: String,
}

impl RequestFields {
    pub fn from_request(req: &actix_web::HttpRequest) -> Self {
        Self {
            user_agent: req
                .headers()
                .get("user-agent")
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_string()),
            ip_address: extract_client_ip(req),
            method: req.method().to_string(),
            path: req.path().to_string(),
        }
    }
}
