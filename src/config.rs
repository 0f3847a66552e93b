use anyhow::{bail, Result};
use std::env;
use std::fmt;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LLMConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Clone)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
}

// Keep the key out of startup logs.
impl fmt::Debug for LLMConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LLMConfig")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    ///
    /// Fails when `OPENAI_API_KEY` is missing or blank, so the server never
    /// starts without a provider credential.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = match lookup("OPENAI_API_KEY") {
            Some(key) if !key.trim().is_empty() => key,
            _ => bail!(
                "OPENAI_API_KEY not set. Set it in your environment (.env or platform secret)."
            ),
        };

        Ok(Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .unwrap_or_else(|| "8000".to_string())
                    .parse()?,
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            },
            llm: LLMConfig {
                openai_api_key,
                openai_base_url: lookup("OPENAI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string())
                    .trim_end_matches('/')
                    .to_string(),
            },
        })
    }
}
