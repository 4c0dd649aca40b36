//! Seams between the resolver and the hosted AI APIs.
//!
//! Clients are built once at startup and shared behind `Arc<dyn ...>` so the
//! resolver never reaches for global state and tests can swap in fakes.

use anyhow::Result;
use async_trait::async_trait;

/// One completion call: the persona instruction plus the user's text.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRequest<'a> {
    pub instruction: &'a str,
    pub user_text: &'a str,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(instruction: &'a str, user_text: &'a str) -> Self {
        Self {
            instruction,
            user_text,
        }
    }
}

#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String>;
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    fn name(&self) -> &'static str;

    async fn transcribe(&self, audio: &[u8], file_name: &str) -> Result<String>;
}
