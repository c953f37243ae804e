//! # calc_api - Mathematical Operations REST API
//!
//! A thin axum layer over `calc_core`. Handlers do no arithmetic of their
//! own: they pass raw path/body input to calc_core, then shape the typed
//! result or error into JSON.
//!
//! The router is built explicitly at startup and handed to [`serve`]:
//!
//! ```no_run
//! use calc_api::{router, serve, ServerConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = ServerConfig::default();
//! let app = router(&config);
//! serve(app, &config.bind_address()).await
//! # }
//! ```

pub mod config;
pub mod error;
pub mod routes;

use axum::Router;
use tracing::{info, warn};

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::{router, SuccessResponse, ENDPOINTS};

/// Service name reported by `/health`
pub const SERVICE_NAME: &str = "math-operations-api";

/// API version reported by `/`
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bind `address` and serve `app` until Ctrl-C.
pub async fn serve(app: Router, address: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!("Mathematical Operations API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
