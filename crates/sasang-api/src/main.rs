use tracing_subscriber::EnvFilter;

use sasang_api::config::ApiConfig;
use sasang_api::router;
use sasang_api::state::AppState;
use sasang_storage::objects::ObjectStore;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let store = ObjectStore::open(&config.data_dir).await?;

    let state = AppState {
        store,
        default_instrument: config.default_instrument.clone(),
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(
        addr = %config.bind_addr,
        data_dir = %config.data_dir.display(),
        "listening"
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}
