use std::sync::Arc;

use teloxide::{types::UserId, Bot};

use crate::ai::resolver::Responder;
use crate::config::{Config, TelegramConfig};

/// Telegram bot handle plus the secrets the webhook checks against.
#[derive(Clone)]
pub struct TelegramChannel {
    pub bot: Bot,
    pub token: String,
    pub owner_id: Option<UserId>,
}

impl TelegramChannel {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            bot: Bot::new(config.token.clone()),
            token: config.token.clone(),
            owner_id: config.owner_id,
        }
    }

    pub fn is_owner(&self, user: UserId) -> bool {
        self.owner_id == Some(user)
    }
}

/// Read-only state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<Responder>,
    pub telegram: Option<TelegramChannel>,
    pub voice_lang: String,
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(responder: Responder) -> Self {
        Self {
            responder: Arc::new(responder),
            telegram: None,
            voice_lang: crate::ai::prompts::DEFAULT_LANG.to_string(),
            base_url: None,
        }
    }

    pub fn from_config(config: &Config, responder: Responder) -> Self {
        let telegram = config.telegram.as_ref().map(TelegramChannel::new);
        if telegram.is_none() {
            tracing::warn!("No TELEGRAM_BOT_TOKEN set - Telegram webhook disabled");
        }
        Self {
            responder: Arc::new(responder),
            telegram,
            voice_lang: config.voice_lang.clone(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn with_telegram(mut self, channel: TelegramChannel) -> Self {
        self.telegram = Some(channel);
        self
    }

    /// Absolute URL when `BASE_URL` is known, otherwise a path Twilio resolves
    /// against the current request.
    pub fn public_url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{base}{path}"),
            None => path.to_string(),
        }
    }
}
