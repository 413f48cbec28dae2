pub mod handlers;
mod types;

pub use types::{DispatchMode, ErrorResponse};

use crate::{Result, config::Config, transform::Transformation};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Builds the receiver routes for one transformation.
pub fn router(transformation: Arc<dyn Transformation>, mode: DispatchMode) -> Router {
    let app_state = handlers::AppState {
        transformation,
        mode,
    };

    Router::new()
        .route("/", post(handlers::receive))
        .route("/healthz", get(handlers::healthz))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: &Config, transformation: Arc<dyn Transformation>) -> Result<()> {
    // Depending on whether a sink is configured, we either reply with the
    // outbound event or send it on.
    let mode = DispatchMode::from_config(config);
    match &mode {
        DispatchMode::Reply => info!("K_SINK not set, replying to inbound requests"),
        DispatchMode::Forward(sink) => info!("Forwarding events to {}", sink.target()),
    }

    let app = router(transformation.clone(), mode);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting {} on {}", transformation.name(), addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", transformation.name());
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining in-flight requests");
}
