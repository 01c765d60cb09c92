use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings read once at startup. A missing API key is allowed; the services
/// then answer every request with a "not configured" record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
    pub bind_addr: String,
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout = match get("GEMINI_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse::<u64>()
                .with_context(|| format!("GEMINI_TIMEOUT_SECS must be a number of seconds, got '{}'", secs))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: get("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            timeout: Duration::from_secs(timeout),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            static_dir: get("STATIC_DIR").map(PathBuf::from),
        })
    }
}
