//! Gemini `generateContent` client used as the secondary completion provider.
//!
//! Gemini gets a single user turn, so the persona instruction and the user's
//! message are folded into one text part.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};

use crate::ai::config::GeminiConfig;
use crate::ai::provider::{CompletionProvider, CompletionRequest};

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Fold the instruction and user text into the single prompt Gemini receives.
pub fn combined_prompt(request: &CompletionRequest<'_>) -> String {
    format!(
        "{}\n\nUSER MESSAGE: {}",
        request.instruction, request.user_text
    )
}

#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    #[instrument(level = "trace", skip_all, fields(model = %self.config.model))]
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(combined_prompt(request)),
                }],
            }],
        };

        let url = self.endpoint();
        debug!(url = %url, "sending generateContent request");

        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err_text = resp.text().await.unwrap_or_default();
            warn!(%status, "Gemini API error");
            return Err(anyhow!("Gemini API error {status}: {err_text}"));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "generateContent response");
        parse_candidate_text(&raw)
    }
}

/// Join the text parts of the first candidate.
pub fn parse_candidate_text(raw: &str) -> Result<String> {
    let parsed: GenerateContentResponse = serde_json::from_str(raw)?;
    let content = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| anyhow!("missing Gemini candidate"))?;

    let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
    if text.trim().is_empty() {
        return Err(anyhow!("empty Gemini response"));
    }
    Ok(text)
}
