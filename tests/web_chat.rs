use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use salesbot::ai::config::OpenAiConfig;
use salesbot::ai::openai::OpenAiClient;
use salesbot::api::ChatResponse;
use salesbot::tests::util::builtin_responder;
use salesbot::{router, AppState};
use serde_json::json;
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn openai(server: &MockServer) -> Arc<OpenAiClient> {
    Arc::new(OpenAiClient::new(OpenAiConfig {
        api_key: "k".into(),
        chat_model: "gpt-4o-mini".into(),
        stt_model: "whisper-1".into(),
        chat_url: format!("{}/v1/chat/completions", server.uri()),
        stt_url: format!("{}/v1/audio/transcriptions", server.uri()),
        max_tokens: 150,
        temperature: 0.7,
    }))
}

async fn chat(state: AppState, body: serde_json::Value) -> ChatResponse {
    let response = router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/chat")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn widget_message_uses_language_persona() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("acento mexicano"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Desde luego, ¿qué negocio tiene?" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = AppState::new(builtin_responder().with_primary(openai(&server)));
    let body = chat(state, json!({ "message": "Hola", "lang": "es_mx" })).await;
    assert!(!body.error);
    assert_eq!(body.response, "Desde luego, ¿qué negocio tiene?");
    server.verify().await;
}

#[tokio::test]
async fn lang_defaults_to_english() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("You are BRUNO"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "content": "Happy to help!" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = AppState::new(builtin_responder().with_primary(openai(&server)));
    let body = chat(state, json!({ "message": "hi" })).await;
    assert_eq!(body.response, "Happy to help!");
    server.verify().await;
}

#[tokio::test]
async fn outage_still_answers_with_contact() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_api_key"))
        .mount(&server)
        .await;

    let state = AppState::new(builtin_responder().with_primary(openai(&server)));
    let body = chat(state, json!({ "message": "hola", "lang": "es" })).await;
    assert!(!body.error);
    assert!(body.response.contains("WhatsApp: (669) 234-2444"));
}

#[tokio::test]
async fn blank_message_is_rejected_without_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let state = AppState::new(builtin_responder().with_primary(openai(&server)));
    let body = chat(state, json!({ "message": "   ", "lang": "en" })).await;
    assert!(body.error);
    assert_eq!(body.response, "Please send a message.");
    server.verify().await;
}
