//! Persona instructions keyed by language tag.
//!
//! The built-in catalog is embedded from `prompts/*.txt`. Operators can replace
//! it with a versioned JSON file of the same shape without touching code.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

pub const DEFAULT_LANG: &str = "en";
pub const BUILTIN_VERSION: &str = "2024.12-bruno";

const PROMPT_EN: &str = include_str!("../../prompts/en.txt");
const PROMPT_ES: &str = include_str!("../../prompts/es.txt");
const PROMPT_ES_MX: &str = include_str!("../../prompts/es_mx.txt");

#[derive(Debug, Clone, Deserialize)]
pub struct PromptCatalog {
    version: String,
    #[serde(default = "default_lang")]
    default_lang: String,
    prompts: HashMap<String, String>,
}

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

impl PromptCatalog {
    /// Build a catalog, checking that the default entry exists.
    pub fn new(
        version: impl Into<String>,
        default_lang: impl Into<String>,
        prompts: HashMap<String, String>,
    ) -> Result<Self> {
        let catalog = Self {
            version: version.into(),
            default_lang: default_lang.into(),
            prompts,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn builtin() -> Self {
        let prompts = HashMap::from([
            ("en".to_string(), PROMPT_EN.to_string()),
            ("es".to_string(), PROMPT_ES.to_string()),
            ("es_mx".to_string(), PROMPT_ES_MX.to_string()),
        ]);
        Self {
            version: BUILTIN_VERSION.to_string(),
            default_lang: DEFAULT_LANG.to_string(),
            prompts,
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(raw).context("invalid prompt catalog JSON")?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read prompt catalog {}", path.display()))?;
        let catalog = Self::from_json(&raw)
            .with_context(|| format!("failed to load prompt catalog {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            version = %catalog.version,
            languages = catalog.prompts.len(),
            "Loaded prompt catalog"
        );
        Ok(catalog)
    }

    fn validate(&self) -> Result<()> {
        match self.prompts.get(&self.default_lang) {
            Some(text) if !text.trim().is_empty() => Ok(()),
            Some(_) => bail!("default prompt '{}' is empty", self.default_lang),
            None => bail!("prompt catalog has no entry for default '{}'", self.default_lang),
        }
    }

    /// Instruction text for `lang`, or the default entry when it is unknown.
    pub fn select(&self, lang: &str) -> &str {
        self.prompts
            .get(lang)
            .or_else(|| self.prompts.get(&self.default_lang))
            .map(String::as_str)
            .unwrap_or_default()
    }

    pub fn contains(&self, lang: &str) -> bool {
        self.prompts.contains_key(lang)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Map a client language code (`es-CO`, `en-US`, ...) to a catalog tag.
pub fn normalize_language(code: &str) -> &'static str {
    if code.trim().to_ascii_lowercase().starts_with("es") {
        "es"
    } else {
        "en"
    }
}
