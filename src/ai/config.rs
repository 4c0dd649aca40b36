use std::env;

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const OPENAI_STT_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Clone, Debug)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub chat_model: String,
    pub stt_model: String,
    pub chat_url: String,
    pub stt_url: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl OpenAiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("OPENAI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return None,
        };
        Some(Self {
            api_key,
            chat_model: env::var("OPENAI_CHAT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            stt_model: env::var("OPENAI_STT_MODEL").unwrap_or_else(|_| "whisper-1".to_string()),
            chat_url: env::var("OPENAI_CHAT_URL").unwrap_or_else(|_| OPENAI_CHAT_URL.to_string()),
            stt_url: env::var("OPENAI_STT_URL").unwrap_or_else(|_| OPENAI_STT_URL.to_string()),
            max_tokens: parse_env("OPENAI_MAX_TOKENS", 150),
            temperature: parse_env("OPENAI_TEMPERATURE", 0.7),
        })
    }
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl GeminiConfig {
    pub fn from_env() -> Option<Self> {
        let api_key = match env::var("GEMINI_API_KEY") {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return None,
        };
        Some(Self {
            api_key,
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            base_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| GEMINI_API_URL.to_string()),
        })
    }
}

/// Provider credentials. A missing key only disables that provider.
#[derive(Clone, Debug, Default)]
pub struct AiConfig {
    pub openai: Option<OpenAiConfig>,
    pub gemini: Option<GeminiConfig>,
}

impl AiConfig {
    pub fn from_env() -> Self {
        Self {
            openai: OpenAiConfig::from_env(),
            gemini: GeminiConfig::from_env(),
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(key, value = %raw, "Ignoring unparseable setting");
                default
            }
        },
        Err(_) => default,
    }
}
