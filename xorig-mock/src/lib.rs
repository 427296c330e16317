//! xorig-mock - in-memory catalog backend
//!
//! Serves the component REST contract from memory. Used by the client's
//! integration tests and as a local dev server.

pub mod api;
pub mod config;
pub mod seed;
pub mod state;
pub mod store;

pub use api::router;
pub use config::Config;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

/// Bind `addr` and serve in a background task, returning the bound address
pub async fn spawn(addr: &str, state: Arc<AppState>) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let app = router(state);

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Mock server error: {e}");
        }
    });

    Ok(local_addr)
}
