use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::ai::config::AiConfig;
use crate::ai::gemini::GeminiClient;
use crate::ai::openai::OpenAiClient;
use crate::ai::prompts::PromptCatalog;
use crate::ai::provider::{CompletionProvider, CompletionRequest, Transcriber};
use crate::messages::fallback_reply;

/// Answers user text with the persona for its language.
///
/// Providers are tried in order (primary, then secondary) and the first
/// successful reply wins. When both fail the caller still gets a localized
/// apology, never an error.
#[derive(Clone)]
pub struct Responder {
    catalog: Arc<PromptCatalog>,
    primary: Option<Arc<dyn CompletionProvider>>,
    secondary: Option<Arc<dyn CompletionProvider>>,
    transcriber: Option<Arc<dyn Transcriber>>,
}

impl Responder {
    pub fn new(catalog: PromptCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            primary: None,
            secondary: None,
            transcriber: None,
        }
    }

    pub fn with_primary(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.primary = Some(provider);
        self
    }

    pub fn with_secondary(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.secondary = Some(provider);
        self
    }

    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    /// Wire up the HTTP clients for whichever credentials are configured.
    pub fn from_config(catalog: PromptCatalog, config: &AiConfig) -> Self {
        let mut responder = Self::new(catalog);

        match &config.openai {
            Some(openai) => {
                let client = Arc::new(OpenAiClient::new(openai.clone()));
                responder = responder
                    .with_primary(client.clone())
                    .with_transcriber(client);
                info!(model = %openai.chat_model, "OpenAI provider enabled");
            }
            None => warn!("No OPENAI_API_KEY set - primary provider and transcription disabled"),
        }

        match &config.gemini {
            Some(gemini) => {
                responder = responder.with_secondary(Arc::new(GeminiClient::new(gemini.clone())));
                info!(model = %gemini.model, "Gemini provider enabled");
            }
            None => warn!("No GEMINI_API_KEY set - secondary provider disabled"),
        }

        responder
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Names of the configured completion providers, in fallback order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers().map(|p| p.name()).collect()
    }

    fn providers(&self) -> impl Iterator<Item = &Arc<dyn CompletionProvider>> {
        self.primary.iter().chain(self.secondary.iter())
    }

    #[instrument(level = "debug", skip(self, user_text), fields(len = user_text.len()))]
    pub async fn resolve(&self, user_text: &str, lang: &str) -> String {
        let instruction = self.catalog.select(lang);
        let request = CompletionRequest::new(instruction, user_text);

        for provider in self.providers() {
            match provider.complete(&request).await {
                Ok(reply) => {
                    debug!(provider = provider.name(), "completion succeeded");
                    return reply;
                }
                Err(err) => {
                    warn!(provider = provider.name(), error = %err, "completion failed");
                }
            }
        }

        warn!(lang, "all completion providers failed; sending fallback reply");
        fallback_reply(lang).to_string()
    }

    /// Single transcription attempt. Any failure or an empty transcript is `None`.
    #[instrument(level = "debug", skip(self, audio), fields(size = audio.len()))]
    pub async fn transcribe(&self, audio: &[u8]) -> Option<String> {
        let transcriber = self.transcriber.as_ref()?;
        match transcriber.transcribe(audio, "voice.ogg").await {
            Ok(text) if !text.trim().is_empty() => Some(text),
            Ok(_) => {
                debug!("voice transcription empty; ignoring");
                None
            }
            Err(err) => {
                warn!(transcriber = transcriber.name(), error = %err, "transcription failed");
                None
            }
        }
    }
}
