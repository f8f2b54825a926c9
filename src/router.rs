use crate::handlers::health::health_check;
use crate::schemas::AppState;
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Create application router: health check plus the frontend bundle.
///
/// Unknown paths get `index.html` so the client-side router can resolve them.
pub fn create_router(state: AppState) -> Router {
    let index = state.static_dir.join("index.html");
    let frontend = ServeDir::new(&state.static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health_check))
        .fallback_service(frontend)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
