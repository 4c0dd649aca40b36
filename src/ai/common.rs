use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Build a chat completion body with a system instruction and one user turn.
pub fn build_text_chat_body(
    model: &str,
    instruction: &str,
    user_text: &str,
    max_tokens: u32,
    temperature: f64,
) -> Value {
    serde_json::json!({
        "model": model,
        "messages": [
            { "role": "system", "content": instruction },
            { "role": "user", "content": user_text },
        ],
        "max_tokens": max_tokens,
        "temperature": temperature,
    })
}

/// Send a request with bearer auth and turn non-2xx statuses into errors.
pub async fn send_openai_request(
    api_key: &str,
    builder: reqwest::RequestBuilder,
) -> Result<reqwest::Response> {
    let resp = builder.bearer_auth(api_key).send().await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let err_text = resp.text().await.unwrap_or_default();
        warn!(%status, "OpenAI API error");
        return Err(anyhow!("OpenAI API error {status}: {err_text}"));
    }

    Ok(resp)
}

/// Extract the first choice's message content from a raw chat response.
///
/// The content is returned verbatim. A missing or blank content is an error so
/// callers can move on to another provider.
pub fn parse_chat_content(raw: &str) -> Result<String> {
    let chat: ChatResponse = serde_json::from_str(raw)?;
    let content = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing chat choice"))?
        .message
        .content
        .ok_or_else(|| anyhow!("missing chat content"))?;

    if content.trim().is_empty() {
        return Err(anyhow!("empty chat content"));
    }
    debug!(len = content.len(), "parsed chat content");
    Ok(content)
}
