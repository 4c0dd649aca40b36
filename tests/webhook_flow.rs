use axum::body::Body;
use axum::http::{Request, StatusCode};
use salesbot::messages;
use salesbot::router;
use salesbot::tests::util::{builtin_responder, telegram_test_state, MockProvider, MockTranscriber};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SENT: &str =
    r#"{"ok":true,"result":{"message_id":1,"date":0,"chat":{"id":42,"type":"private"}}}"#;

fn text_update(text: &str, user_id: u64, language: &str) -> String {
    serde_json::json!({
        "update_id": 1,
        "message": {
            "message_id": 10,
            "date": 0,
            "chat": { "id": 42, "type": "private" },
            "from": {
                "id": user_id,
                "is_bot": false,
                "first_name": "Ana",
                "language_code": language
            },
            "text": text
        }
    })
    .to_string()
}

fn webhook_request(token: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/webhook/{token}"))
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn chat_text_is_answered_through_send_message() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("Con mucho gusto"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&telegram)
        .await;

    let provider = MockProvider::ok("primary", "Con mucho gusto, ¿qué tipo de negocio maneja?");
    let responder = builtin_responder().with_primary(provider.clone());
    let state = telegram_test_state(responder, "TEST", None, &telegram.uri()).unwrap();

    let response = router(state)
        .oneshot(webhook_request("TEST", text_update("Hola, precios?", 7, "es-CO")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(provider.calls(), 1);
    assert!(provider.instructions()[0].contains("paisa"));
    telegram.verify().await;
}

#[tokio::test]
async fn menu_command_skips_the_model() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("pricebook.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&telegram)
        .await;

    let provider = MockProvider::ok("primary", "unused");
    let responder = builtin_responder().with_primary(provider.clone());
    let state = telegram_test_state(responder, "TEST", None, &telegram.uri()).unwrap();

    router(state)
        .oneshot(webhook_request("TEST", text_update("/pb", 7, "en")))
        .await
        .unwrap();

    assert_eq!(provider.calls(), 0);
    telegram.verify().await;
}

#[tokio::test]
async fn owner_gets_owner_menu() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("Owner Mode"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&telegram)
        .await;

    let state = telegram_test_state(builtin_responder(), "TEST", Some(99), &telegram.uri()).unwrap();
    router(state)
        .oneshot(webhook_request("TEST", text_update("/start", 99, "es")))
        .await
        .unwrap();
    telegram.verify().await;
}

#[tokio::test]
async fn wrong_token_is_not_found() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(0)
        .mount(&telegram)
        .await;

    let state = telegram_test_state(builtin_responder(), "TEST", None, &telegram.uri()).unwrap();
    let response = router(state)
        .oneshot(webhook_request("WRONG", text_update("hi", 7, "en")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    telegram.verify().await;
}

#[tokio::test]
async fn malformed_and_non_message_updates_are_acknowledged() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(0)
        .mount(&telegram)
        .await;

    let state = telegram_test_state(builtin_responder(), "TEST", None, &telegram.uri()).unwrap();
    let app = router(state);

    let response = app
        .clone()
        .oneshot(webhook_request("TEST", "{garbage".to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let poll = r#"{"update_id":2,"poll_answer":{"poll_id":"p","user":{"id":7,"is_bot":false,"first_name":"A"},"option_ids":[0]}}"#;
    let response = app
        .oneshot(webhook_request("TEST", poll.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    telegram.verify().await;
}

#[tokio::test]
async fn delivery_failure_still_acknowledges() {
    let telegram = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: can't parse entities"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&telegram)
        .await;

    let state = telegram_test_state(builtin_responder(), "TEST", None, &telegram.uri()).unwrap();
    let response = router(state)
        .oneshot(webhook_request("TEST", text_update("help", 7, "en")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    telegram.verify().await;
}

fn voice_update() -> String {
    serde_json::json!({
        "update_id": 3,
        "message": {
            "message_id": 11,
            "date": 0,
            "chat": { "id": 42, "type": "private" },
            "from": { "id": 7, "is_bot": false, "first_name": "Ana", "language_code": "en" },
            "voice": {
                "file_id": "voice-1",
                "file_unique_id": "u1",
                "duration": 2,
                "mime_type": "audio/ogg",
                "file_size": 4
            }
        }
    })
    .to_string()
}

async fn mount_voice_download(telegram: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/botTEST/GetFile"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"ok":true,"result":{"file_id":"voice-1","file_unique_id":"u1","file_size":4,"file_path":"voice/file_1.oga"}}"#,
            "application/json",
        ))
        .mount(telegram)
        .await;
    Mock::given(method("GET"))
        .and(path("/file/botTEST/voice/file_1.oga"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("OggS", "application/octet-stream"))
        .mount(telegram)
        .await;
}

#[tokio::test]
async fn voice_note_is_transcribed_and_answered() {
    let telegram = MockServer::start().await;
    mount_voice_download(&telegram).await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("Salons start at"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&telegram)
        .await;

    let provider = MockProvider::ok("primary", "Salons start at $997 a month.");
    let responder = builtin_responder()
        .with_primary(provider.clone())
        .with_transcriber(MockTranscriber::ok("how much for a salon"));
    let state = telegram_test_state(responder, "TEST", None, &telegram.uri()).unwrap();

    router(state)
        .oneshot(webhook_request("TEST", voice_update()))
        .await
        .unwrap();

    assert_eq!(provider.calls(), 1);
    telegram.verify().await;
}

#[tokio::test]
async fn unreadable_voice_note_gets_apology() {
    let telegram = MockServer::start().await;
    mount_voice_download(&telegram).await;
    Mock::given(method("POST"))
        .and(path("/botTEST/SendMessage"))
        .and(body_string_contains("couldn't understand the audio"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(SENT, "application/json"))
        .expect(1)
        .mount(&telegram)
        .await;

    let provider = MockProvider::ok("primary", "unused");
    let responder = builtin_responder()
        .with_primary(provider.clone())
        .with_transcriber(MockTranscriber::failing());
    let state = telegram_test_state(responder, "TEST", None, &telegram.uri()).unwrap();

    router(state)
        .oneshot(webhook_request("TEST", voice_update()))
        .await
        .unwrap();

    assert_eq!(provider.calls(), 0);
    assert!(messages::voice_not_understood("en").contains("couldn't understand the audio"));
    telegram.verify().await;
}
