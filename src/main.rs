use actix_web::HttpServer;
use pmnts_checkout_config::{ServerConfig, create_base_app, telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from_env();

    if let Err(e) = telemetry::init_tracing(&config) {
        eprintln!("Failed to initialize tracing: {e}");
    }

    tracing::info!(bind_address = %config.bind_address, "Starting checkout config server");

    HttpServer::new(create_base_app)
        .bind(&config.bind_address)?
        .run()
        .await
}
