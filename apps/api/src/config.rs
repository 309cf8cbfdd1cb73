use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 10000;
const DEFAULT_LLM_MODEL: &str = "claude-sonnet-4-5";
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 15;
/// Matches the 5 MB cap the upload form enforces client-side.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub anthropic_api_key: Option<String>,
    pub enable_llm_analysis: bool,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            enable_llm_analysis: parse_env("ENABLE_LLM_ANALYSIS", false)?,
            llm_model: optional_env("LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string()),
            llm_timeout_secs: parse_env("LLM_TIMEOUT_SECS", DEFAULT_LLM_TIMEOUT_SECS)?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
        })
    }

    /// The remote analyzer runs only when explicitly enabled and a key is configured.
    pub fn llm_api_key(&self) -> Option<&str> {
        if self.enable_llm_analysis {
            self.anthropic_api_key.as_deref()
        } else {
            None
        }
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(enable: bool, key: Option<&str>) -> Config {
        Config {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            anthropic_api_key: key.map(String::from),
            enable_llm_analysis: enable,
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    #[test]
    fn test_llm_key_requires_enable_flag() {
        assert_eq!(config(false, Some("sk-test")).llm_api_key(), None);
        assert_eq!(config(true, None).llm_api_key(), None);
        assert_eq!(config(true, Some("sk-test")).llm_api_key(), Some("sk-test"));
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("ATS_TEST_BAD_PORT", "not-a-port");
        let result = parse_env::<u16>("ATS_TEST_BAD_PORT", DEFAULT_PORT);
        std::env::remove_var("ATS_TEST_BAD_PORT");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let port = parse_env::<u16>("ATS_TEST_UNSET_PORT", DEFAULT_PORT).unwrap();
        assert_eq!(port, DEFAULT_PORT);
    }
}
