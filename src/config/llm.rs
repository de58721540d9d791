//! LLM config: OpenAI key, base URL, model, and optional system prompt.

use anyhow::{Context, Result};
use std::env;

/// OpenAI-compatible API configuration, loaded from env.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// OPENAI_API_KEY
    pub api_key: String,
    /// OPENAI_BASE_URL; defaults to the OpenAI API when unset
    pub base_url: Option<String>,
    /// OPENAI_MODEL
    pub model: String,
    /// LLM_SYSTEM_PROMPT or SYSTEM_PROMPT
    pub system_prompt: Option<String>,
}

impl LlmConfig {
    /// Load from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY not set")?;
        let base_url = env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let system_prompt = env::var("LLM_SYSTEM_PROMPT")
            .or_else(|_| env::var("SYSTEM_PROMPT"))
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            api_key,
            base_url,
            model,
            system_prompt,
        })
    }

    /// Validate config (base_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.base_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!("OPENAI_BASE_URL is set but not a valid URL: {}", url_str);
            }
        }
        Ok(())
    }
}
