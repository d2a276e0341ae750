//! Application configuration. API credentials, endpoints, tool paths.

use serde::Deserialize;
use std::fmt;

pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";
pub const DEFAULT_AI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_AI_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_AI_MAX_TOKENS: u32 = 2500;
pub const DEFAULT_VERCEL_BIN: &str = "vercel";

#[derive(Deserialize, Default, Clone)]
pub struct AppConfig {
    /// GitHub REST base URL. Read from GH_PORTFOLIO_GITHUB_API_URL.
    #[serde(default)]
    pub github_api_url: Option<String>,

    /// Optional GitHub token; lifts the anonymous rate limit. Read from GH_PORTFOLIO_GITHUB_TOKEN.
    #[serde(default)]
    pub github_token: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // AI Generation Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// AI API key (e.g., OpenAI). Read from GH_PORTFOLIO_AI_API_KEY or OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// AI API URL. Defaults to OpenAI. Read from GH_PORTFOLIO_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// AI model name. Read from GH_PORTFOLIO_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Sampling temperature. Read from GH_PORTFOLIO_AI_TEMPERATURE.
    #[serde(default)]
    pub ai_temperature: Option<f32>,

    /// Output length bound. Read from GH_PORTFOLIO_AI_MAX_TOKENS.
    #[serde(default)]
    pub ai_max_tokens: Option<u32>,

    // ─────────────────────────────────────────────────────────────────────────
    // Deployment Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Vercel token. Read from GH_PORTFOLIO_VERCEL_TOKEN or VERCEL_TOKEN.
    #[serde(default)]
    pub vercel_token: Option<String>,

    /// Deployment CLI executable. Read from GH_PORTFOLIO_VERCEL_BIN.
    #[serde(default)]
    pub vercel_bin: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("GH_PORTFOLIO"));
        if let Ok(path) = std::env::var("GH_PORTFOLIO_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Unprefixed names the tools themselves use, so an existing .env keeps working
        if cfg.ai_api_key.is_none() {
            cfg.ai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if cfg.vercel_token.is_none() {
            cfg.vercel_token = std::env::var("VERCEL_TOKEN").ok();
        }
        Ok(cfg)
    }

    pub fn github_api_url_or_default(&self) -> String {
        self.github_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_GITHUB_API_URL.to_string())
    }

    /// Returns the AI API key if configured and non-empty.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key.clone().filter(|k| !k.trim().is_empty())
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    pub fn ai_temperature_or_default(&self) -> f32 {
        self.ai_temperature.unwrap_or(DEFAULT_AI_TEMPERATURE)
    }

    pub fn ai_max_tokens_or_default(&self) -> u32 {
        self.ai_max_tokens.unwrap_or(DEFAULT_AI_MAX_TOKENS)
    }

    /// Returns true if AI is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Returns the Vercel token if configured and non-empty.
    pub fn vercel_token(&self) -> Option<String> {
        self.vercel_token.clone().filter(|t| !t.trim().is_empty())
    }

    pub fn vercel_bin_or_default(&self) -> String {
        self.vercel_bin
            .clone()
            .unwrap_or_else(|| DEFAULT_VERCEL_BIN.to_string())
    }
}

/// Secrets are shown only as set/unset.
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mask(v: &Option<String>) -> &'static str {
            if v.is_some() { "<set>" } else { "<unset>" }
        }
        f.debug_struct("AppConfig")
            .field("github_api_url", &self.github_api_url)
            .field("github_token", &mask(&self.github_token))
            .field("ai_api_key", &mask(&self.ai_api_key))
            .field("ai_api_url", &self.ai_api_url)
            .field("ai_model", &self.ai_model)
            .field("ai_temperature", &self.ai_temperature)
            .field("ai_max_tokens", &self.ai_max_tokens)
            .field("vercel_token", &mask(&self.vercel_token))
            .field("vercel_bin", &self.vercel_bin)
            .finish()
    }
}
