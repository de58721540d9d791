//! BotConfig: BaseConfig + LlmConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, LlmConfig};

/// Bot config: base (Discord + log + DB + timezone) and LLM sections.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub llm: LlmConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides DISCORD_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let llm = LlmConfig::from_env()?;
        Ok(Self { base, llm })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.llm.validate()
    }

    // --- Base config getters ---
    pub fn discord_token(&self) -> &str {
        &self.base.discord_token
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn timezone(&self) -> &str {
        &self.base.timezone
    }

    // --- LLM config getters ---
    pub fn openai_api_key(&self) -> &str {
        &self.llm.api_key
    }
    pub fn openai_base_url(&self) -> Option<&str> {
        self.llm.base_url.as_deref()
    }
    pub fn openai_model(&self) -> &str {
        &self.llm.model
    }
    pub fn system_prompt(&self) -> Option<&str> {
        self.llm.system_prompt.as_deref()
    }
}
