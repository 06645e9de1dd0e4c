//! Listener and lifecycle

use tokio::net::TcpListener;
use tracing::info;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::build_router;

/// Bind the configured address and serve until a shutdown signal arrives
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let app = build_router(&config);
    let listener = TcpListener::bind(config.listen_addr).await?;

    info!("listening on http://{}", listener.local_addr()?);
    info!("serving static files from {}", config.web_root.display());
    if config.enable_cors {
        info!("CORS enabled for any origin");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutting down");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown");
        }
    }
}
