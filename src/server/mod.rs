pub mod handlers;
mod types;

use crate::{Result, config::Config, rag::HttpRagClient};
use axum::{Router, routing::get};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn build_router(state: handlers::AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // axum's `get` would otherwise serve HEAD by dispatching to the GET
        // handler; the proxy contract rejects every method except GET.
        .route(
            "/rag",
            get(handlers::rag_search)
                .head(handlers::method_not_allowed)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One backend client for the process; the resolved URL is injected here.
    let rag = HttpRagClient::new(config.rag.clone());

    let app_state = handlers::AppState { rag: Arc::new(rag) };

    let app = build_router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
