//! Server configuration.
//!
//! Everything is a command-line flag with an environment variable fallback:
//!
//! | flag | env | default |
//! |------|-----|---------|
//! | `--host` | `CALC_API_HOST` | `0.0.0.0` |
//! | `--port` | `CALC_API_PORT` | `8000` |
//! | `--cors-origins` | `CORS_ORIGINS` | local dev servers on 3000/5173 |
//! | `-v` | | info |

use axum::http::{HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tracing::warn;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:5173,http://127.0.0.1:3000,http://127.0.0.1:5173";

/// Mathematical Operations API server
#[derive(Debug, Clone, Parser)]
#[command(name = "calc_api", version)]
#[command(about = "Mathematical Operations API - REST access to calc_core", long_about = None)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "CALC_API_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "CALC_API_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Comma-separated list of allowed CORS origins ("*" allows any)
    #[arg(long, env = "CORS_ORIGINS", value_delimiter = ',', default_value = DEFAULT_CORS_ORIGINS)]
    pub cors_origins: Vec<String>,

    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.split(',').map(str::to_string).collect(),
            verbose: 0,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Tracing filter directive for the configured verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,tower=debug",
        }
    }

    /// Build the CORS layer for the configured origins.
    ///
    /// A `*` entry allows any origin; credentials are then disabled because
    /// browsers reject the wildcard together with credentials.
    pub fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<&str> = self
            .cors_origins
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect();

        let methods = [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ];
        let layer = CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(AllowHeaders::mirror_request());

        if origins.contains(&"*") {
            return layer.allow_origin(AllowOrigin::any());
        }

        let allowed: Vec<HeaderValue> = origins
            .into_iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        layer
            .allow_origin(AllowOrigin::list(allowed))
            .allow_credentials(true)
    }
}
