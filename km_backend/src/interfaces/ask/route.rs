use crate::interfaces::ask::controller::ask;
use crate::server::app_state::AppState;
use axum::routing::post;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route("/ask", post(ask))
}
