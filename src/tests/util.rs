//! Fakes shared by unit and integration tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use teloxide::Bot;

use crate::ai::prompts::PromptCatalog;
use crate::ai::provider::{CompletionProvider, CompletionRequest, Transcriber};
use crate::ai::resolver::Responder;
use crate::state::{AppState, TelegramChannel};

/// Completion provider with a canned outcome that records every call.
pub struct MockProvider {
    name: &'static str,
    reply: Option<String>,
    calls: AtomicUsize,
    instructions: Mutex<Vec<String>>,
}

impl MockProvider {
    pub fn ok(name: &'static str, reply: &str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
            instructions: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            reply: None,
            calls: AtomicUsize::new(0),
            instructions: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn instructions(&self) -> Vec<String> {
        self.instructions
            .lock()
            .map(|seen| seen.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.instructions.lock() {
            seen.push(request.instruction.to_string());
        }
        self.reply
            .clone()
            .ok_or_else(|| anyhow!("{} unavailable", self.name))
    }
}

pub struct MockTranscriber {
    text: Option<String>,
}

impl MockTranscriber {
    pub fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self {
            text: Some(text.to_string()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self { text: None })
    }
}

#[async_trait]
impl Transcriber for MockTranscriber {
    fn name(&self) -> &'static str {
        "mock-stt"
    }

    async fn transcribe(&self, _audio: &[u8], _file_name: &str) -> Result<String> {
        self.text.clone().ok_or_else(|| anyhow!("quota exceeded"))
    }
}

/// State with the built-in catalog, the given responder pieces and a Telegram
/// bot pointed at `api_url` (usually a wiremock server).
pub fn telegram_test_state(
    responder: Responder,
    token: &str,
    owner_id: Option<u64>,
    api_url: &str,
) -> Result<AppState> {
    let bot = Bot::new(token).set_api_url(reqwest::Url::parse(api_url)?);
    let channel = TelegramChannel {
        bot,
        token: token.to_string(),
        owner_id: owner_id.map(teloxide::types::UserId),
    };
    Ok(AppState::new(responder).with_telegram(channel))
}

pub fn builtin_responder() -> Responder {
    Responder::new(PromptCatalog::builtin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telegram_test_state_reports_bad_api_url() {
        assert!(telegram_test_state(builtin_responder(), "T", None, "not a url").is_err());
    }

    #[test]
    fn telegram_test_state_mounts_channel() {
        let state = telegram_test_state(builtin_responder(), "T", Some(5), "http://127.0.0.1:9")
            .unwrap();
        let channel = state.telegram.unwrap();
        assert_eq!(channel.token, "T");
        assert!(channel.is_owner(teloxide::types::UserId(5)));
    }
}
