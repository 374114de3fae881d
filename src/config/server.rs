//! HTTP server binding and logging configuration.

use std::env;
use std::path::Path;

/// Configuration for the HTTP listener and log output
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Log filter directive used when `RUST_LOG` is unset
    pub log_filter: String,
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            log_filter: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let bind_address = detect_bind_address(
            env::var("KUBERNETES_SERVICE_HOST").ok().as_deref(),
            env::var("DOCKER_CONTAINER").ok().as_deref(),
            Path::new("/.dockerenv").exists(),
            env::var("BIND_ADDRESS").ok().as_deref(),
        );

        // RUST_LOG still takes precedence when the subscriber is built
        let log_filter = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let json_logs = env::var("LOG_FORMAT")
            .map(|v| v.to_lowercase() == "json")
            .unwrap_or(false);

        Self {
            bind_address,
            log_filter,
            json_logs,
        }
    }
}

/// Pick the listen address: an explicit override wins, containers listen on
/// all interfaces, local runs stay on loopback.
pub fn detect_bind_address(
    k8s_service_host: Option<&str>,
    docker_container: Option<&str>,
    dockerenv_exists: bool,
    bind_override: Option<&str>,
) -> String {
    if let Some(bind) = bind_override.filter(|b| !b.trim().is_empty()) {
        return bind.to_string();
    }

    if k8s_service_host.is_some() || docker_container.is_some() || dockerenv_exists {
        "0.0.0.0:8080".to_string()
    } else {
        "127.0.0.1:8080".to_string()
    }
}
