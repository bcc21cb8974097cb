use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::CardCompareError;
use crate::repository::LatencyProfile;

/// Main configuration structure for card-compare
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub openai: OpenAIConfig,
    pub retry: RetryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub name: String,
    pub bind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Delay catalog lookups the way a remote catalog API would.
    pub simulate_latency: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAIConfig {
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Keys without this prefix are treated as absent.
    pub key_prefix: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Overall budget for one generation, retries included.
    pub deadline_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
    pub jitter_factor: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "card-compare".to_string(),
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
        }
    }
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            key_prefix: "sk-".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            max_tokens: 1500,
            deadline_ms: 20_000,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay_ms: 200,
            max_delay_ms: 5000,
            jitter_factor: 0.2,
        }
    }
}

impl Config {
    /// Load configuration from file with environment variable overrides
    /// ALWAYS returns a valid config - never fails
    pub fn load() -> Self {
        for path in [".env", "../.env"] {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                break;
            }
        }

        let config_path =
            env::var("CARD_COMPARE_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = Self::from_file(&config_path);
        config.apply_env_overrides();

        // Validate configuration - log warnings but don't fail
        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    fn from_file(config_path: &str) -> Self {
        if !Path::new(config_path).exists() {
            tracing::warn!("Config file not found at {} - using defaults", config_path);
            return Self::default();
        }
        match fs::read_to_string(config_path) {
            Ok(contents) => Self::from_yaml(&contents).unwrap_or_else(|e| {
                tracing::error!(
                    "Failed to parse config file {}: {} - using defaults",
                    config_path,
                    e
                );
                Self::default()
            }),
            Err(e) => {
                tracing::error!(
                    "Failed to read config file {}: {} - using defaults",
                    config_path,
                    e
                );
                Self::default()
            }
        }
    }

    pub fn from_yaml(contents: &str) -> Result<Self, serde_yaml::Error> {
        let config = serde_yaml::from_str::<Config>(contents)?;
        tracing::info!("Loaded configuration from yaml");
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Server overrides
        if let Some(name) = lookup("CARD_COMPARE_SERVER_NAME") {
            self.server.name = name;
        }
        if let Some(bind) = lookup("CARD_COMPARE_BIND") {
            self.server.bind = bind;
        }

        // Catalog overrides
        if let Some(flag) = lookup("CARD_COMPARE_SIMULATE_LATENCY") {
            if let Ok(flag) = flag.parse() {
                self.catalog.simulate_latency = flag;
            }
        }

        // OpenAI overrides
        if let Some(var) = lookup("CARD_COMPARE_API_KEY_ENV") {
            self.openai.api_key_env = var;
        }
        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            self.openai.base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.openai.model = model;
        }
        if let Some(deadline) = lookup("CARD_COMPARE_DEADLINE_MS") {
            if let Ok(ms) = deadline.parse() {
                self.openai.deadline_ms = ms;
            }
        }

        // Retry overrides
        if let Some(attempts) = lookup("CARD_COMPARE_RETRY_MAX_ATTEMPTS") {
            if let Ok(n) = attempts.parse() {
                self.retry.max_attempts = n;
            }
        }
        if let Some(jitter) = lookup("CARD_COMPARE_RETRY_JITTER_FACTOR") {
            if let Ok(jitter_val) = jitter.parse() {
                self.retry.jitter_factor = jitter_val;
            }
        }
    }

    /// Validate configuration
    fn validate(&self) -> crate::error::Result<()> {
        if self.server.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(CardCompareError::Config(
                format!("server.bind '{}' is not a host:port address", self.server.bind),
            ));
        }
        if self.openai.api_key_env.is_empty() {
            return Err(CardCompareError::Config(
                "openai.api_key_env cannot be empty".to_string(),
            ));
        }
        if !(0.0..=2.0).contains(&self.openai.temperature) {
            return Err(CardCompareError::Config(
                "openai.temperature must be between 0.0 and 2.0".to_string(),
            ));
        }
        if self.openai.deadline_ms == 0 {
            return Err(CardCompareError::Config(
                "openai.deadline_ms cannot be 0".to_string(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(CardCompareError::Config(
                "retry.max_attempts cannot be 0".to_string(),
            ));
        }
        if self.retry.jitter_factor < 0.0 || self.retry.jitter_factor > 1.0 {
            return Err(CardCompareError::Config(
                "Retry jitter factor must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.retry.initial_delay_ms > self.retry.max_delay_ms {
            return Err(CardCompareError::Config(
                "retry.initial_delay_ms cannot exceed retry.max_delay_ms".to_string(),
            ));
        }
        Ok(())
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        if self.catalog.simulate_latency {
            LatencyProfile::simulated()
        } else {
            LatencyProfile::none()
        }
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.openai.deadline_ms)
    }
}
