use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode};
use kitchenmate::runner::ollama::OllamaRunner;
use kitchenmate::server::app_state::AppState;
use kitchenmate::server::http_server::app;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app(command: &str) -> axum::Router {
    let runner = Arc::new(OllamaRunner::new(command, "kitchenmate"));
    app(Arc::new(AppState::new(runner)))
}

fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/ask")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn response_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn well_formed_request_returns_a_response_string() {
    let app = test_app("echo");
    let response = app
        .oneshot(ask_request(&json!({"prompt": "hello"}).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert_eq!(body["response"], "run kitchenmate hello\n");
}

#[tokio::test]
async fn missing_prompt_is_rejected_by_the_extractor() {
    let app = test_app("echo");
    let response = app.oneshot(ask_request("{}")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = test_app("echo");
    let response = app.oneshot(ask_request("not json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn failed_launch_still_answers_200_with_an_empty_response() {
    let app = test_app("definitely-not-a-real-binary");
    let response = app
        .oneshot(ask_request(&json!({"prompt": "hello"}).to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_body(response).await;
    assert_eq!(body["response"], "");
}

#[tokio::test]
async fn concurrent_requests_do_not_mix_outputs() {
    let app = test_app("echo");
    let (first, second) = tokio::join!(
        app.clone()
            .oneshot(ask_request(&json!({"prompt": "alpha"}).to_string())),
        app.clone()
            .oneshot(ask_request(&json!({"prompt": "beta"}).to_string())),
    );

    let first = response_body(first.unwrap()).await;
    let second = response_body(second.unwrap()).await;
    assert_eq!(first["response"], "run kitchenmate alpha\n");
    assert_eq!(second["response"], "run kitchenmate beta\n");
}

#[tokio::test]
async fn preflight_is_allowed_for_any_origin() {
    let app = test_app("echo");
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/ask")
        .header("origin", "http://example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .map(|v| v.to_str().unwrap()),
        Some("*")
    );
}

#[tokio::test]
async fn unknown_route_falls_back_to_404() {
    let app = test_app("echo");
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/models")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
