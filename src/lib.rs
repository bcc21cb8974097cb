pub mod analysis;
pub mod catalog;
pub mod config;
pub mod credentials;
pub mod error;
pub mod filters;
pub mod format;
pub mod generator;
pub mod handlers;
pub mod intent;
pub mod models;
pub mod repository;
pub mod repository_traits;
pub mod responder;
pub mod retry;
pub mod synth;
pub mod transport;

use std::sync::Arc;

use crate::config::Config;
use crate::credentials::EnvCredentials;
use crate::error::Result;
use crate::generator::{FallbackGenerator, TextGenerator};
use crate::handlers::AppState;
use crate::repository::StaticCardRepository;
use crate::responder::RuleBasedResponder;
use crate::retry::RetryPolicy;
use crate::synth::LlmSynth;
use crate::transport::{OpenAiTransport, Transport};

/// Wires the catalog, the language-model path and the rule-based fallback
/// from configuration.
pub fn build_state(cfg: &Config) -> Result<AppState> {
    let repo = Arc::new(StaticCardRepository::seeded(cfg.latency_profile()));

    let transport = OpenAiTransport::from_config(&cfg.openai, RetryPolicy::from(&cfg.retry))?;
    let synth = LlmSynth::from_config(
        &cfg.openai,
        Arc::new(EnvCredentials::from_config(&cfg.openai)),
        Arc::new(transport) as Arc<dyn Transport>,
    );

    let assistant = FallbackGenerator::new(
        Some(Arc::new(synth) as Arc<dyn TextGenerator>),
        RuleBasedResponder::default(),
        cfg.deadline(),
    );

    Ok(AppState::new(repo, Arc::new(assistant)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_config_builds_working_state() {
        let mut cfg = Config::default();
        cfg.catalog.simulate_latency = false;
        cfg.openai.api_key_env = "CARD_COMPARE_TEST_NO_SUCH_KEY_91c2".to_string();
        let state = build_state(&cfg).expect("state should build");
        assert!(state.assistant.has_primary());

        // no credential: the rule-based answer comes back
        let cards = state.repo.all_cards().await;
        let reply = state.assistant.chat_reply("hdfc", &cards).await;
        assert!(reply.starts_with("🏦 **HDFC Bank Credit Cards**"));
    }
}
