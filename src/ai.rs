pub mod common;
pub mod config;
pub mod gemini;
pub mod openai;
pub mod prompts;
pub mod provider;
pub mod resolver;

pub use provider::{CompletionProvider, CompletionRequest, Transcriber};
pub use resolver::Responder;
