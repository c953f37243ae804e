//! # Mathops API Server
//!
//! ```text
//! calc_api --port 8000
//! CORS_ORIGINS=http://localhost:3000 calc_api -v
//! ```

use calc_api::{router, serve, ServerConfig, ENDPOINTS};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(config.verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(config.verbose >= 3) // Show line numbers for -vvv
        .init();

    debug!("Configuration: {:?}", config);
    info!("Starting Mathematical Operations API");
    for endpoint in ENDPOINTS {
        info!("  {:<5} {:<20} {}", endpoint.method, endpoint.path, endpoint.description);
    }

    let app = router(&config);
    serve(app, &config.bind_address()).await
}
