//! Algorithm Visualizer API server

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use algo_explain::{create_router, AppState, Config, ExplanationResolver};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Initialize logging
    let json_logs = config.log_json;
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "algo_explain=debug,tower_http=debug".into()))
        .with(json_logs.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json_logs).then(tracing_subscriber::fmt::layer))
        .init();

    tracing::info!("Algorithm Visualizer API starting ({})...", config.environment);

    let resolver = ExplanationResolver::standard();
    tracing::info!("Registered strategies: {:?}", resolver.strategy_names());

    let addr = config.socket_addr();
    let app = create_router(AppState::new(config, resolver));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
