use crate::error::{ErrorBackend, Result};
use crate::interfaces::ask;
use crate::runner::ollama::OllamaRunner;
use crate::server::app_state::AppState;
use axum::http::StatusCode;
use km_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT, DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use km_core::server::routes::print_all_backend_api_paths;
use std::env;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Builds the application router around the shared state.
///
/// # Behavior
/// - Nests the ask route under `/api`.
/// - Adds tracing for incoming requests and failures.
/// - Allows any origin, method and header; the service sits behind a
///   local chat frontend and carries no access control of its own.
pub fn app(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(ask::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .nest("/api", routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .fallback(fallback)
}

/// Starts the HTTP server using Axum and the shared runner.
///
/// # Arguments
/// * `runner` - The model runner shared across requests.
///
/// # Behavior
/// - Sets up routing for `/api/ask`.
/// - Binds to configured host/port and starts listening.
#[tokio::main]
pub async fn http_server(runner: Arc<OllamaRunner>) -> Result<()> {
    let host = env::var("SERVER_BACKEND_HOST").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_HOST));
    let port = env::var("SERVER_BACKEND_PORT").unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PORT));
    let protocol = env::var("SERVER_BACKEND_PROTOCOL")
        .unwrap_or(String::from(DEFAULT_SERVER_BACKEND_PROTOCOL));

    let app_state = Arc::new(AppState::new(runner));
    let router = app(app_state);

    print_all_backend_api_paths();

    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
