//! Credential lookup for the external completion API.
//!
//! The key is re-read on every request, so rotating or removing it takes
//! effect without a restart.

use std::env;
use std::fmt;

use crate::config::OpenAIConfig;

/// An API key that passed the prefix check. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Accepts `raw` only when it is non-empty and starts with `prefix`.
    pub fn parse(raw: &str, prefix: &str) -> Option<Self> {
        let raw = raw.trim();
        (!raw.is_empty() && raw.starts_with(prefix)).then(|| Self(raw.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

pub trait CredentialSource: Send + Sync {
    /// Current key, or `None` when the external path must not be used.
    fn api_key(&self) -> Option<ApiKey>;

    /// Where the key comes from, for log lines.
    fn describe(&self) -> String;
}

/// Reads the key from an environment variable on every call.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
    prefix: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            var: var.into(),
            prefix: prefix.into(),
        }
    }

    pub fn from_config(cfg: &OpenAIConfig) -> Self {
        Self::new(cfg.api_key_env.clone(), cfg.key_prefix.clone())
    }
}

impl CredentialSource for EnvCredentials {
    fn api_key(&self) -> Option<ApiKey> {
        env::var(&self.var)
            .ok()
            .and_then(|raw| ApiKey::parse(&raw, &self.prefix))
    }

    fn describe(&self) -> String {
        self.var.clone()
    }
}

/// Fixed credential, used by tests and embedders that manage secrets themselves.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    key: Option<ApiKey>,
}

impl StaticCredentials {
    pub fn new(raw: Option<&str>, prefix: &str) -> Self {
        Self {
            key: raw.and_then(|r| ApiKey::parse(r, prefix)),
        }
    }

    pub fn absent() -> Self {
        Self { key: None }
    }
}

impl CredentialSource for StaticCredentials {
    fn api_key(&self) -> Option<ApiKey> {
        self.key.clone()
    }

    fn describe(&self) -> String {
        "static credential".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_is_required() {
        assert!(ApiKey::parse("sk-abc", "sk-").is_some());
        assert!(ApiKey::parse("  sk-abc\n", "sk-").is_some());
        assert!(ApiKey::parse("pk-abc", "sk-").is_none());
        assert!(ApiKey::parse("", "sk-").is_none());
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let key = ApiKey::parse("sk-very-secret", "sk-").expect("valid key");
        assert_eq!(format!("{key:?}"), "ApiKey(***)");
        assert_eq!(key.expose(), "sk-very-secret");
    }

    #[test]
    fn missing_env_var_means_no_key() {
        let creds = EnvCredentials::new("CARD_COMPARE_TEST_UNSET_KEY_7f3a", "sk-");
        assert!(creds.api_key().is_none());
        assert_eq!(creds.describe(), "CARD_COMPARE_TEST_UNSET_KEY_7f3a");
    }

    #[test]
    fn static_credentials_apply_the_same_check() {
        assert!(StaticCredentials::new(Some("sk-1"), "sk-").api_key().is_some());
        assert!(StaticCredentials::new(Some("nope"), "sk-").api_key().is_none());
        assert!(StaticCredentials::absent().api_key().is_none());
    }
}
