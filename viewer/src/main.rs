//! feedview
//!
//! A minimal feed viewer. Serves a single page that fetches the post list
//! from the posts backend and renders each post's author, image and title.
//! Uses hexagonal (ports & adapters) architecture.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::HttpPostsApi;
use config::Config;
use domain::ports::PostsApi;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub posts_api: Arc<dyn PostsApi>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the viewer's router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(handlers::get_feed))
        .route("/posts/:id/delete", post(handlers::delete_post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,feedview=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting feedview...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!("Reading posts from {}", config.api_url);

    let posts_api = Arc::new(HttpPostsApi::new(
        &config.api_url,
        config.request_timeout,
    )?);

    let app = build_router(AppState { posts_api });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
