//! HTTP gateway for TripDeck documents
//!
//! | Route | Methods | Behaviour |
//! |-------|---------|-----------|
//! | `/api/trip`, `/api/todo`, `/api/note` | GET, POST | read verbatim / overwrite whole object |
//! | `/api/pins` | GET | read only, anything else is 405 |
//! | `/health` | GET | liveness |
//!
//! The gateway holds no document state of its own. Every request goes
//! straight to the [`DocumentStore`](tripdeck_storage::DocumentStore);
//! concurrent writers race and the last write wins.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::{future::pending, io, time::Duration};

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal::ctrl_c};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use error::ApiError;
pub use state::AppState;

use routes::{get_document, get_pins, health, pins_not_allowed, post_document};

/// Build the gateway router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health))
        .route("/api/pins", get(get_pins).fallback(pins_not_allowed))
        .route("/api/:name", get(get_document).post(post_document))
        .layer(cors)
        .with_state(state)
}

/// Serve until Ctrl+C or SIGTERM
pub async fn start_server(config: Config, state: AppState) -> io::Result<()> {
    let app = router(state);

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install signal handler: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }
}
