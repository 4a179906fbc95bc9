// PromptForge Configuration
// Copyright (c) 2026 Xing_The_Creator | PromptForge
//
// Process-wide settings, read once from the environment (after `.env`)
// and passed by reference from then on.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
    #[error("{0} is selected but its API key is not set")]
    MissingKey(&'static str),
}

/// Which text-generation backend to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderChoice {
    Auto,
    Gemini,
    OpenAi,
    None,
}

impl FromStr for ProviderChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "" => Ok(ProviderChoice::Auto),
            "gemini" => Ok(ProviderChoice::Gemini),
            "openai" => Ok(ProviderChoice::OpenAi),
            "none" | "offline" => Ok(ProviderChoice::None),
            other => Err(other.to_string()),
        }
    }
}

/// What to do when the model cannot produce an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Substitute the local template fill and log a warning.
    #[default]
    Degrade,
    /// Surface the failure to the caller.
    Fail,
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "degrade" | "" => Ok(FallbackPolicy::Degrade),
            "fail" => Ok(FallbackPolicy::Fail),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderChoice,
    pub gemini: EndpointConfig,
    pub openai: EndpointConfig,
    pub fallback: FallbackPolicy,
    pub request_timeout: Duration,
    pub port: u16,
    pub data_dir: PathBuf,
    pub ffmpeg_bin: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider: ProviderChoice::Auto,
            gemini: EndpointConfig {
                api_key: None,
                model: DEFAULT_GEMINI_MODEL.to_string(),
                base_url: DEFAULT_GEMINI_URL.to_string(),
            },
            openai: EndpointConfig {
                api_key: None,
                model: DEFAULT_OPENAI_MODEL.to_string(),
                base_url: DEFAULT_OPENAI_URL.to_string(),
            },
            fallback: FallbackPolicy::Degrade,
            request_timeout: Duration::from_secs(30),
            port: 8000,
            data_dir: PathBuf::from(".promptforge"),
            ffmpeg_bin: "ffmpeg".to_string(),
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("PROMPTFORGE_PROVIDER") {
            cfg.provider = v.parse().map_err(|value| ConfigError::InvalidValue {
                key: "PROMPTFORGE_PROVIDER",
                value,
            })?;
        }
        if let Some(v) = non_empty("PROMPTFORGE_FALLBACK") {
            cfg.fallback = v.parse().map_err(|value| ConfigError::InvalidValue {
                key: "PROMPTFORGE_FALLBACK",
                value,
            })?;
        }

        cfg.gemini.api_key = non_empty("GEMINI_API_KEY");
        if let Some(v) = non_empty("GEMINI_MODEL") {
            cfg.gemini.model = v;
        }
        if let Some(v) = non_empty("GEMINI_API_URL") {
            cfg.gemini.base_url = v;
        }

        cfg.openai.api_key = non_empty("OPENAI_API_KEY");
        if let Some(v) = non_empty("OPENAI_MODEL") {
            cfg.openai.model = v;
        }
        if let Some(v) = non_empty("OPENAI_API_URL") {
            cfg.openai.base_url = v;
        }

        if let Some(v) = non_empty("PROMPTFORGE_TIMEOUT_SECS") {
            let secs: u64 = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PROMPTFORGE_TIMEOUT_SECS",
                value: v.clone(),
            })?;
            cfg.request_timeout = Duration::from_secs(secs);
        }
        if let Some(v) = non_empty("PORT") {
            cfg.port = v.trim().parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT",
                value: v.clone(),
            })?;
        }
        if let Some(v) = non_empty("PROMPTFORGE_DATA_DIR") {
            cfg.data_dir = PathBuf::from(v);
        }
        if let Some(v) = non_empty("FFMPEG_BIN") {
            cfg.ffmpeg_bin = v;
        }

        Ok(cfg)
    }

    /// Resolve `Auto` against the keys that are actually present.
    pub fn resolved_provider(&self) -> Result<ProviderChoice, ConfigError> {
        match self.provider {
            ProviderChoice::Auto => Ok(if self.gemini.api_key.is_some() {
                ProviderChoice::Gemini
            } else if self.openai.api_key.is_some() {
                ProviderChoice::OpenAi
            } else {
                ProviderChoice::None
            }),
            ProviderChoice::Gemini if self.gemini.api_key.is_none() => {
                Err(ConfigError::MissingKey("GEMINI_API_KEY"))
            }
            ProviderChoice::OpenAi if self.openai.api_key.is_none() => {
                Err(ConfigError::MissingKey("OPENAI_API_KEY"))
            }
            other => Ok(other),
        }
    }

    pub fn renders_dir(&self) -> PathBuf {
        self.data_dir.join("renders")
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("studio_store.json")
    }
}
