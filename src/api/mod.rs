//! HTTP API server

use std::future::Future;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::{AppConfig, SHIPMENTS_PATH};
use crate::error::Result;

pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let context_path = state.context_path.clone();
    let api_doc_path = state.api_doc_path.clone();

    let api = Router::new()
        .route(
            SHIPMENTS_PATH,
            get(handlers::list_shipments).post(handlers::create_shipment),
        )
        .route(
            &format!("{SHIPMENTS_PATH}/:id"),
            get(handlers::get_shipment),
        )
        .route(&api_doc_path, get(handlers::api_doc))
        .with_state(state);

    // axum refuses to nest at "/"
    let router = if context_path.is_empty() {
        api
    } else {
        Router::new().nest(&context_path, api)
    };

    router.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
}

/// Bind the configured address and serve until `shutdown` resolves
pub async fn serve<F>(config: &AppConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(config)?;
    let router = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        shipments = %config.shipments_url(),
        api_doc = %config.api_doc_url(),
        "Listening for HTTP traffic"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
