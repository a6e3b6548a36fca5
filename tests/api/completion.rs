use crate::helpers::{spawn_app, spawn_app_with};
use actix_web::http::StatusCode;
use civic_signal::{configuration::CompletionProviderKind, routes::EMPTY_OUTPUT_PLACEHOLDER};
use secrecy::SecretString;
use serde_json::{Value, json};

#[tokio::test]
async fn completion_proxy_returns_model_output() {
    // Arrange
    let app = spawn_app().await;
    app.stub.enqueue_completion("  Здравейте!  ");

    // Act
    let response = app
        .post_completion(&json!({ "input": "Кажи здравей" }))
        .await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["output"], "Здравейте!");

    let request = &app.stub.requests_to("/chat/completions")[0];
    assert_eq!(request.authorization.as_deref(), Some("Bearer test-api-key"));
    assert_eq!(request.message_content(0), "Кажи здравей");
}

#[tokio::test]
async fn completion_proxy_uses_the_configured_groq_model() {
    // Arrange
    let app = spawn_app_with(|c| c.completion.provider = CompletionProviderKind::Groq).await;
    app.stub.enqueue_completion("ok");

    // Act
    let response = app.post_completion(&json!({ "input": "ping" })).await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());
    let request = &app.stub.requests_to("/chat/completions")[0];
    assert_eq!(request.body["model"], "llama-3.1-8b-instant");
}

#[tokio::test]
async fn completion_proxy_substitutes_placeholder_for_blank_reply() {
    // Arrange
    let app = spawn_app().await;
    app.stub.enqueue_completion("   ");

    // Act
    let response = app.post_completion(&json!({ "input": "ping" })).await;

    // Assert
    assert_eq!(StatusCode::OK.as_u16(), response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["output"], EMPTY_OUTPUT_PLACEHOLDER);
}

#[tokio::test]
async fn completion_proxy_reports_undecodable_reply_as_unexpected() {
    // Arrange
    let app = spawn_app().await;
    app.stub
        .enqueue("/chat/completions", 200, json!({ "choices": "not-a-list" }));

    // Act
    let response = app.post_completion(&json!({ "input": "ping" })).await;

    // Assert
    assert_eq!(
        StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        response.status().as_u16()
    );
    let body: Value = response.json().await.unwrap();
    assert!(body.get("stage").is_none());
}

#[tokio::test]
async fn completion_proxy_rejects_empty_input() {
    // Arrange
    let app = spawn_app().await;

    // Act
    let response = app.post_completion(&json!({ "input": " " })).await;

    // Assert
    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), response.status().as_u16());
    assert!(app.stub.requests().is_empty());
}

#[tokio::test]
async fn completion_proxy_rejects_requests_without_credential() {
    // Arrange
    let app = spawn_app_with(|c| c.completion.api_key = SecretString::from("")).await;

    // Act
    let response = app.post_completion(&json!({ "input": "ping" })).await;

    // Assert
    assert_eq!(StatusCode::BAD_REQUEST.as_u16(), response.status().as_u16());
    assert!(app.stub.requests().is_empty());
}

#[tokio::test]
async fn completion_proxy_hides_service_failure_behind_generic_message() {
    // Arrange
    let app = spawn_app().await;
    app.stub.enqueue(
        "/chat/completions",
        429,
        json!({ "error": { "message": "Rate limit reached" } }),
    );

    // Act
    let response = app.post_completion(&json!({ "input": "ping" })).await;

    // Assert
    assert_eq!(StatusCode::BAD_GATEWAY.as_u16(), response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_ne!(body["error"], "Rate limit reached");
    assert_eq!(body["detail"], "Rate limit reached");
}
