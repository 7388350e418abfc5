//! Server config: which model answers behind `/chat`. Filled from env / .env.
//!
//! The bind address is not configurable; see [`BIND_ADDR`](crate::BIND_ADDR).

use async_openai::config::OpenAIConfig;

use crate::agent::{ChatAgent, DEFAULT_SYSTEM_PROMPT};
use crate::llm::ChatOpenAI;

/// Error type used for config loading and the binary.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Server config: API base, key, model, temperature and system prompt.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// OpenAI-compatible API base URL, e.g. `https://api.openai.com/v1`.
    pub api_base: String,
    /// API key.
    pub api_key: String,
    /// Model name, e.g. `gpt-4o-mini`.
    pub model: String,
    /// Sampling temperature 0–2. Default: 0.7.
    pub temperature: f32,
    /// System prompt for every turn.
    pub system_prompt: String,
}

impl ServerConfig {
    /// Fill config from env vars. Call `dotenv` first if `.env` should be honored.
    ///
    /// `OPENAI_API_KEY` required; `OPENAI_API_BASE`, `OPENAI_MODEL`, `OPENAI_TEMPERATURE`,
    /// `AGENT_SYSTEM_PROMPT` have defaults. An unparseable temperature falls back to 0.7.
    pub fn from_env() -> Result<Self, Error> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "OPENAI_API_KEY is not set; please configure it in .env",
                )
            })?;
        let api_base = std::env::var("OPENAI_API_BASE")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let temperature = std::env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0.7);
        let system_prompt = std::env::var("AGENT_SYSTEM_PROMPT")
            .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.to_string());
        Ok(Self {
            api_base,
            api_key,
            model,
            temperature,
            system_prompt,
        })
    }

    /// Builds the OpenAI-compatible client for this config.
    pub fn build_llm(&self) -> ChatOpenAI {
        // Strip trailing slash so base + "/chat/completions" has no double slash.
        let openai_config = OpenAIConfig::new()
            .with_api_key(self.api_key.clone())
            .with_api_base(self.api_base.trim_end_matches('/'));
        ChatOpenAI::with_config(openai_config, self.model.clone())
            .with_temperature(self.temperature)
    }

    /// Builds the agent served behind `/chat`.
    pub fn build_agent(&self) -> ChatAgent {
        ChatAgent::with_system_prompt(Box::new(self.build_llm()), self.system_prompt.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Lock used by tests that set/remove server env vars so they run serially and do not race.
    static ENV_LOCK: std::sync::OnceLock<Mutex<()>> = std::sync::OnceLock::new();

    fn env_lock() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner())
    }

    const VARS: [&str; 5] = [
        "OPENAI_API_KEY",
        "OPENAI_API_BASE",
        "OPENAI_MODEL",
        "OPENAI_TEMPERATURE",
        "AGENT_SYSTEM_PROMPT",
    ];

    /// Runs `f` with the given vars set and all other server vars removed, then restores.
    fn with_env<T>(set: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        let _guard = env_lock();
        let saved: Vec<(&str, Option<String>)> =
            VARS.iter().map(|k| (*k, std::env::var(k).ok())).collect();
        for k in VARS {
            std::env::remove_var(k);
        }
        for (k, v) in set {
            std::env::set_var(k, v);
        }
        let out = f();
        for (k, v) in saved {
            match v {
                Some(v) => std::env::set_var(k, v),
                None => std::env::remove_var(k),
            }
        }
        out
    }

    /// **Scenario**: When OPENAI_API_KEY is not set, from_env returns an error naming it.
    #[test]
    fn from_env_fails_when_api_key_is_missing() {
        let result = with_env(&[], ServerConfig::from_env);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("OPENAI_API_KEY"), "error: {}", err);
    }

    /// **Scenario**: An empty OPENAI_API_KEY counts as missing.
    #[test]
    fn from_env_fails_when_api_key_is_empty() {
        let result = with_env(&[("OPENAI_API_KEY", "")], ServerConfig::from_env);
        assert!(result.is_err());
    }

    /// **Scenario**: With only the key set, defaults apply.
    ///
    /// Given: OPENAI_API_KEY is set, nothing else
    /// When: ServerConfig::from_env() is called
    /// Then: api_base, model, temperature and system prompt take their defaults
    #[test]
    fn from_env_succeeds_with_defaults_when_api_key_is_set() {
        let config = with_env(&[("OPENAI_API_KEY", "test-key")], ServerConfig::from_env)
            .expect("from_env should succeed when OPENAI_API_KEY is set");
        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.api_base, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.system_prompt, DEFAULT_SYSTEM_PROMPT);
    }

    /// **Scenario**: Overrides are read; a bad temperature falls back to the default.
    #[test]
    fn from_env_reads_overrides() {
        let config = with_env(
            &[
                ("OPENAI_API_KEY", "k"),
                ("OPENAI_API_BASE", "http://llm.local/v1/"),
                ("OPENAI_MODEL", "local-model"),
                ("OPENAI_TEMPERATURE", "warm"),
                ("AGENT_SYSTEM_PROMPT", "be terse"),
            ],
            ServerConfig::from_env,
        )
        .expect("config");
        assert_eq!(config.api_base, "http://llm.local/v1/");
        assert_eq!(config.model, "local-model");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.build_agent().system_prompt(), "be terse");
        assert_eq!(config.build_llm().model(), "local-model");
    }
}
