mod config;
mod routes;

use config::{HostConfig, HostError};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    if let Err(e) = dotenvy::dotenv() {
        if let Some(problem) = config::env_file_problem(&e) {
            tracing::warn!(error = %problem, "failed to read .env");
        }
    }

    if let Err(e) = run().await {
        tracing::error!(error = %e, "salesspark host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr, source })?;

    tracing::info!(port = config.port, api_base = %config.api_base, "salesspark listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
