use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use km_core::server::payload::ask_request::AskRequest;
use km_core::server::payload::ask_response::AskResponse;
use std::sync::Arc;

/// Handler for the ask endpoint.
///
/// Forwards the prompt to the configured model runner and wraps its
/// captured stdout in the response payload. The handler always answers
/// 200; runner failures degrade to an empty string. Malformed bodies
/// are rejected by the `Json` extractor before this runs.
pub async fn ask(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AskRequest>,
) -> Json<AskResponse> {
    let response = state.runner.ask(&payload.prompt).await;
    Json(AskResponse { response })
}
