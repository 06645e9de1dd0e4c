//! unitconv server binary
//!
//! Configuration comes from the environment:
//! - UNITCONV_LISTEN: socket address (default 0.0.0.0:9742)
//! - UNITCONV_WEB_ROOT: static file directory (default ./web)
//! - UNITCONV_CORS: allow any origin (default false)
//! - RUST_LOG: log filter

use tracing::info;
use tracing_subscriber::EnvFilter;
use unitconv_server::{run, ServerConfig, ServerError};

const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("unitconv_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    info!("unitconv server v{} starting", SERVER_VERSION);

    run(config).await
}
