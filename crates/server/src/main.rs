use anyhow::Result;
use server::{AppState, app, config::ServerConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let db = db::DBService::new(&config.database_url).await?;
    let state = AppState::new(db, &config.asset_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "case tracker listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
