//! Text generation seam: a language-model generator composed with the
//! rule-based responder so callers always receive an answer.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::error::{CardCompareError, Result};
use crate::models::CreditCard;
use crate::responder::RuleBasedResponder;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Free-form answer to a user question, grounded in `catalog`.
    async fn chat_reply(&self, message: &str, catalog: &[CreditCard]) -> Result<String>;

    /// Structured comparison report for the selected `cards`.
    async fn compare_analysis(&self, cards: &[CreditCard]) -> Result<String>;
}

/// Tries the primary generator within a deadline and falls back to the
/// rule-based responder on any error or timeout.
pub struct FallbackGenerator {
    primary: Option<Arc<dyn TextGenerator>>,
    fallback: RuleBasedResponder,
    deadline: Duration,
}

impl FallbackGenerator {
    pub fn new(
        primary: Option<Arc<dyn TextGenerator>>,
        fallback: RuleBasedResponder,
        deadline: Duration,
    ) -> Self {
        Self {
            primary,
            fallback,
            deadline,
        }
    }

    /// Rule-based answers only.
    pub fn rule_based() -> Self {
        Self::new(None, RuleBasedResponder::default(), Duration::ZERO)
    }

    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn chat_reply(&self, message: &str, catalog: &[CreditCard]) -> String {
        if let Some(primary) = &self.primary {
            let outcome = timeout(self.deadline, primary.chat_reply(message, catalog)).await;
            if let Some(text) = self.accept(outcome, "chat") {
                return text;
            }
        }
        self.fallback.respond(message, catalog)
    }

    pub async fn compare_analysis(&self, cards: &[CreditCard]) -> String {
        if let Some(primary) = &self.primary {
            let outcome = timeout(self.deadline, primary.compare_analysis(cards)).await;
            if let Some(text) = self.accept(outcome, "compare-analysis") {
                return text;
            }
        }
        crate::analysis::fallback_report(cards)
    }

    fn accept(
        &self,
        outcome: std::result::Result<Result<String>, tokio::time::error::Elapsed>,
        operation: &str,
    ) -> Option<String> {
        let err = match outcome {
            Ok(Ok(text)) if !text.trim().is_empty() => {
                tracing::debug!(operation, "Using language model answer");
                return Some(text);
            }
            Ok(Ok(_)) => CardCompareError::MalformedResponse("empty completion".to_string()),
            Ok(Err(e)) => e,
            Err(_) => CardCompareError::Timeout(self.deadline),
        };
        match err {
            CardCompareError::MissingCredential(_) => {
                tracing::debug!(operation, error = %err, "No credential, using rule-based answer");
            }
            _ => {
                tracing::warn!(operation, error = %err, "Language model failed, using rule-based answer");
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_cards;

    struct SlowGenerator;

    #[async_trait]
    impl TextGenerator for SlowGenerator {
        async fn chat_reply(&self, _message: &str, _catalog: &[CreditCard]) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }

        async fn compare_analysis(&self, _cards: &[CreditCard]) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    fn with_primary(primary: impl TextGenerator + 'static) -> FallbackGenerator {
        FallbackGenerator::new(
            Some(Arc::new(primary)),
            RuleBasedResponder::default(),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn primary_answer_wins_when_it_succeeds() {
        let mut mock = MockTextGenerator::new();
        mock.expect_chat_reply()
            .times(1)
            .returning(|_, _| Ok("model says hi".to_string()));
        let generator = with_primary(mock);
        assert_eq!(generator.chat_reply("hdfc", &seed_cards()).await, "model says hi");
    }

    #[tokio::test]
    async fn primary_errors_fall_back_to_rules() {
        let mut mock = MockTextGenerator::new();
        mock.expect_chat_reply().returning(|_, _| {
            Err(CardCompareError::UpstreamStatus {
                status: 500,
                body: "boom".to_string(),
            })
        });
        mock.expect_compare_analysis()
            .returning(|_| Err(CardCompareError::MissingCredential("OPENAI_API_KEY".into())));
        let generator = with_primary(mock);
        let cards = seed_cards();

        let reply = generator.chat_reply("hdfc", &cards).await;
        assert_eq!(reply, RuleBasedResponder::default().respond("hdfc", &cards));

        let report = generator.compare_analysis(&cards[..2]).await;
        assert_eq!(report, crate::analysis::fallback_report(&cards[..2]));
    }

    #[tokio::test]
    async fn blank_completion_is_rejected() {
        let mut mock = MockTextGenerator::new();
        mock.expect_compare_analysis().returning(|_| Ok("   ".to_string()));
        let generator = with_primary(mock);
        let report = generator.compare_analysis(&[]).await;
        assert!(report.contains("select at least two cards"));
    }

    #[tokio::test(start_paused = true)]
    async fn slow_primary_hits_the_deadline() {
        let generator = with_primary(SlowGenerator);
        let cards = seed_cards();
        let reply = generator.chat_reply("asdkjasd", &cards).await;
        assert!(reply.starts_with("👋 **Welcome to CardCompare India!**"));
        let report = generator.compare_analysis(&cards[..2]).await;
        assert!(report.starts_with("**CREDIT CARD COMPARISON ANALYSIS**"));
    }

    #[tokio::test]
    async fn rule_based_only_never_calls_out() {
        let generator = FallbackGenerator::rule_based();
        assert!(!generator.has_primary());
        let reply = generator.chat_reply("no annual fee", &seed_cards()).await;
        assert!(reply.starts_with("💰 **Credit Cards with No Annual Fee**"));
    }
}
