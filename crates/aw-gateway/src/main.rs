//! AI weather gateway: HTTP front for the NLP and weather providers.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use aw_gateway::config::GatewayConfig;
use aw_gateway::routes;
use aw_gateway::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is normal in deployed environments.
    let dotenv_loaded = dotenv::dotenv().is_ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        dotenv_loaded,
        "aw-gateway starting"
    );

    let config = GatewayConfig::from_env();

    if config.huggingface.api_token.is_none() {
        tracing::warn!("HUGGINGFACE_API_TOKEN not set: NLP requests will be unauthenticated");
    }
    if config.openweather.api_key.is_none() {
        tracing::warn!("OPENWEATHER_API_KEY not set: weather requests will be rejected upstream");
    }

    let state = AppState::from_config(&config);
    let app = routes::build_router(state);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
