use std::sync::Arc;
use tracing::info;
use xorig_mock::{AppState, Config, router, seed};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "xorig_mock=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    let state = Arc::new(AppState::new());

    if config.seed_demo {
        seed::seed_demo(&state).await?;
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("xorig-mock listening on {addr}");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
