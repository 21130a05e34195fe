use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use medinom::api::router::document_api_router;
use medinom::api::types::ApiContext;
use medinom::config;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let addr: SocketAddr = std::env::var("MEDINOM_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 8000)));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "failed to bind API server");
            std::process::exit(1);
        }
    };

    tracing::info!(%addr, "document API listening");

    let app = document_api_router(ApiContext::default());
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "API server terminated");
        std::process::exit(1);
    }
}
