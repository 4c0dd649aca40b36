use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use teloxide::types::UserId;

use crate::ai::config::AiConfig;
use crate::ai::prompts::{PromptCatalog, DEFAULT_LANG};

#[derive(Clone, Debug)]
pub struct TelegramConfig {
    pub token: String,
    pub owner_id: Option<UserId>,
}

impl TelegramConfig {
    pub fn from_env() -> Option<Self> {
        let token = match env::var("TELEGRAM_BOT_TOKEN") {
            Ok(t) if !t.trim().is_empty() => t.trim().to_string(),
            _ => return None,
        };
        let owner_id = match env::var("TELEGRAM_OWNER_ID") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(id) => Some(UserId(id)),
                Err(_) => {
                    tracing::warn!(value = %raw, "Ignoring invalid TELEGRAM_OWNER_ID");
                    None
                }
            },
            Err(_) => None,
        };
        Some(Self { token, owner_id })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub base_url: Option<String>,
    pub prompt_catalog_path: Option<PathBuf>,
    pub voice_lang: String,
    pub ai: AiConfig,
    pub telegram: Option<TelegramConfig>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(8000);
        let base_url = env::var("BASE_URL")
            .ok()
            .map(|u| u.trim().trim_end_matches('/').to_string())
            .filter(|u| !u.is_empty());
        let prompt_catalog_path = env::var("PROMPT_CATALOG_PATH").ok().map(PathBuf::from);
        let voice_lang = env::var("VOICE_LANG").unwrap_or_else(|_| DEFAULT_LANG.to_string());
        Self {
            host,
            port,
            base_url,
            prompt_catalog_path,
            voice_lang,
            ai: AiConfig::from_env(),
            telegram: TelegramConfig::from_env(),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }

    /// The operator's catalog file if one is configured, else the built-in one.
    pub fn prompt_catalog(&self) -> Result<PromptCatalog> {
        match &self.prompt_catalog_path {
            Some(path) => PromptCatalog::load(path),
            None => Ok(PromptCatalog::builtin()),
        }
    }
}
