use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, instrument, trace};

use crate::ai::common::{build_text_chat_body, parse_chat_content, send_openai_request};
use crate::ai::config::OpenAiConfig;
use crate::ai::provider::{CompletionProvider, CompletionRequest, Transcriber};

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

/// OpenAI chat completions and Whisper transcription.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    #[instrument(level = "trace", skip_all, fields(model = %self.config.chat_model))]
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        let body = build_text_chat_body(
            &self.config.chat_model,
            request.instruction,
            request.user_text,
            self.config.max_tokens,
            self.config.temperature,
        );

        debug!(url = %self.config.chat_url, "sending chat completion request");

        let builder = self.http.post(&self.config.chat_url).json(&body);
        let resp = send_openai_request(&self.config.api_key, builder).await?;

        let raw = resp.text().await?;
        let snippet: String = raw.chars().take(200).collect();
        debug!(snippet = %snippet, "chat response body");
        trace!(raw = %raw, "chat response");
        parse_chat_content(&raw)
    }
}

#[async_trait]
impl Transcriber for OpenAiClient {
    fn name(&self) -> &'static str {
        "whisper"
    }

    #[instrument(level = "trace", skip(self, audio), fields(model = %self.config.stt_model))]
    async fn transcribe(&self, audio: &[u8], file_name: &str) -> Result<String> {
        let part = Part::bytes(audio.to_vec()).file_name(file_name.to_string());
        let form = Form::new()
            .part("file", part)
            .text("model", self.config.stt_model.clone());

        debug!(url = %self.config.stt_url, size = audio.len(), "sending transcription request");

        let builder = self.http.post(&self.config.stt_url).multipart(form);
        let resp = send_openai_request(&self.config.api_key, builder).await?;

        let raw = resp.text().await?;
        let data: TranscriptionResponse = serde_json::from_str(&raw)?;
        trace!(transcription = %data.text, "transcription successful");
        Ok(data.text)
    }
}
