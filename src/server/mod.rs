//! # HTTP Server for Markup Printing
//!
//! Accepts markup documents over HTTP and prints them.
//!
//! | Route | Method | Response |
//! |-------|--------|----------|
//! | `/` | GET, POST | Usage instructions |
//! | `/xml` | GET | Usage instructions |
//! | `/xml` | POST | Prints the body; `Ok` on success |
//!
//! ## Usage
//!
//! ```bash
//! printml serve --listen 0.0.0.0:5000 --device /dev/ttyAMA0
//! curl --data-binary @receipt.xml -H 'Content-Type: text/xml' http://localhost:5000/xml
//! ```

mod handlers;
mod state;

pub use handlers::usage::usage_page;
pub use state::{AppState, DEFAULT_MAX_BODY_BYTES, ServerConfig};

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::Error;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let max_body = state.config.max_body_bytes;

    Router::new()
        .route(
            "/",
            get(handlers::usage::index).post(handlers::usage::index),
        )
        .route(
            "/xml",
            get(handlers::usage::index).post(handlers::xml::print),
        )
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use printml::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), printml::Error> {
/// serve(ServerConfig::default()).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), Error> {
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| Error::Config(format!("Failed to bind to {}: {}", config.listen_addr, e)))?;

    tracing::info!(
        listen = %config.listen_addr,
        device = %config.printer.device_path,
        baud = config.printer.baud_rate,
        "printml HTTP server started"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
