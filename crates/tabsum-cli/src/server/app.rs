//! Axum application setup.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;
use super::ServerConfig;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let api_routes = Router::new()
        .route("/analyze", post(handlers::analyze_upload))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        // Multipart framing adds overhead beyond the file itself.
        .layer(DefaultBodyLimit::max(state.max_upload_bytes + 64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(
    state: AppState,
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state, &config);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
