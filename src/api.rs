use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{HeaderName, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use crate::ai::prompts::DEFAULT_LANG;
use crate::handlers::{telegram, voice};
use crate::messages::{HEALTH_SYSTEM, WEB_BAD_REQUEST, WEB_EMPTY_MESSAGE};
use crate::state::AppState;
use crate::system_info::version_string;

/// Widget payload. Both fields may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub lang: Option<String>,
}

impl ChatRequest {
    pub fn message(&self) -> &str {
        self.message.as_deref().map(str::trim).unwrap_or_default()
    }

    pub fn lang(&self) -> &str {
        self.lang.as_deref().unwrap_or(DEFAULT_LANG)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: String,
    pub error: bool,
}

impl ChatResponse {
    fn ok(response: String) -> Self {
        Self {
            response,
            error: false,
        }
    }

    fn error(response: &str) -> Self {
        Self {
            response: response.to_string(),
            error: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthCheck {
    status: &'static str,
    system: &'static str,
    version: String,
}

#[derive(Clone, Debug)]
pub(crate) struct RequestContext {
    pub(crate) request_id: String,
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(health))
        .route("/api/chat", post(web_chat))
        .route("/voice/incoming", post(voice::incoming_call))
        .route("/voice/respond", post(voice::speech_input));

    if state.telegram.is_some() {
        router = router.route("/webhook/{token}", post(telegram::webhook));
    }

    router
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(assign_request_id))
}

async fn health() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok",
        system: HEALTH_SYSTEM,
        version: version_string(),
    })
}

async fn web_chat(
    State(state): State<AppState>,
    Extension(request): Extension<RequestContext>,
    body: Bytes,
) -> Json<ChatResponse> {
    // Parsed by hand so `text/plain` posts from the widget are accepted.
    let payload: ChatRequest = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(request_id = %request.request_id, error = %err, "Web chat error");
            return Json(ChatResponse::error(WEB_BAD_REQUEST));
        }
    };

    let message = payload.message();
    if message.is_empty() {
        tracing::debug!(request_id = %request.request_id, "Empty web chat message");
        return Json(ChatResponse::error(WEB_EMPTY_MESSAGE));
    }

    let lang = payload.lang();
    let reply = state.responder.resolve(message, lang).await;
    tracing::debug!(
        request_id = %request.request_id,
        lang = %lang,
        reply_len = reply.len(),
        "Answered web chat message"
    );
    Json(ChatResponse::ok(reply))
}

async fn assign_request_id(mut req: Request<Body>, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestContext {
        request_id: request_id.clone(),
    });
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let mut response = next.run(req).await;
    let status = response.status();
    if let Ok(value) = request_id.parse() {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-request-id"), value);
    }
    tracing::debug!(
        request_id,
        method = %method,
        path = %uri,
        status = %status,
        "API request completed"
    );
    response
}
