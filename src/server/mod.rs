mod handlers;
mod state;

use axum::Router;
use axum::routing::get;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::geo::CityCountryResolver;

pub fn build_router(resolver: Arc<CityCountryResolver>) -> Router {
    let state = Arc::new(AppState { resolver });

    Router::new()
        .route("/api/resolve", get(handlers::resolve))
        .route("/api/status", get(handlers::status))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(host: &str, port: u16, resolver: Arc<CityCountryResolver>) {
    // Warm the index in the background so the first request doesn't
    // pay for the dataset download.
    let warmup = Arc::clone(&resolver);
    tokio::spawn(async move { warmup.initialize().await });

    let app = build_router(resolver);
    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Error: Cannot bind to {}: {}", addr, e);
            std::process::exit(1);
        });

    eprintln!("  Leadatlas server listening on http://{}", addr);
    eprintln!("  Press Ctrl+C to stop.");

    axum::serve(listener, app)
        .await
        .unwrap_or_else(|e| {
            eprintln!("Server error: {}", e);
            std::process::exit(1);
        });
}
