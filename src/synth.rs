use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::config::OpenAIConfig;
use crate::credentials::CredentialSource;
use crate::error::{CardCompareError, Result};
use crate::generator::TextGenerator;
use crate::models::{CardBenefit, CardFeatures, ChatMessage, CompletionRequest, CreditCard};
use crate::transport::Transport;

const CHAT_SYSTEM_PROMPT: &str = r#"You are an expert AI assistant for CardCompare India, a comprehensive credit card comparison platform. You have detailed knowledge of all Indian credit cards in the database and provide helpful, conversational responses.

IMPORTANT: You should ONLY provide informational responses. Do NOT include any redirect instructions or UI changes. Focus on giving comprehensive, helpful answers based on the credit card data.

Available credit cards data:
{catalog}

Your role:
- Provide detailed, accurate information about credit cards
- Answer questions in a conversational, human-like manner
- Use emojis and formatting to make responses engaging
- Give comprehensive comparisons when asked
- Explain benefits, features, and suitability clearly
- Help users understand credit card terms and benefits
- Provide personalized recommendations based on user needs

Guidelines:
- Be conversational and helpful
- Use specific card names, banks, and details
- Explain complex terms in simple language
- Provide context and background information
- Give practical advice and tips
- Format responses clearly with headers and bullet points
- Include relevant fees, benefits, and features
- Help users make informed decisions

Remember: Focus only on providing information and advice. Do not redirect users or change the UI."#;

const ANALYSIS_SYSTEM_PROMPT: &str = r#"You are a credit card expert analyzing and comparing Indian credit cards.
Provide a comprehensive comparison analysis in the following format:

**CREDIT CARD COMPARISON ANALYSIS**

💰 **COST COMPARISON:**
• [Card Name]: Annual Fee [amount], Joining Fee [amount]

🎁 **REWARDS & CASHBACK:**
• [Card Name]: Up to [X]% cashback (Fuel: [X]%, Dining: [X]%)

✈️ **KEY BENEFITS:**
• [Card Name]: ✓/✗ [benefit], ✓/✗ [benefit]

👥 **ELIGIBILITY:**
• [Card Name]: Min Income [amount], Credit Score [range]

🎯 **RECOMMENDATIONS:**
• For [use case]: [Card Name] [reason]

Be specific, accurate, and helpful. Focus on practical differences that matter to users."#;

/// Card fields sent to the model for a comparison.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisCard<'a> {
    name: &'a str,
    bank: &'a str,
    annual_fee: u32,
    joining_fee: u32,
    reward_rate: f64,
    features: &'a CardFeatures,
    benefits: &'a [CardBenefit],
    target_audience: &'a [String],
}

impl<'a> From<&'a CreditCard> for AnalysisCard<'a> {
    fn from(card: &'a CreditCard) -> Self {
        Self {
            name: &card.name,
            bank: &card.bank,
            annual_fee: card.annual_fee,
            joining_fee: card.joining_fee,
            reward_rate: card.reward_rate,
            features: &card.features,
            benefits: &card.benefits,
            target_audience: &card.target_audience,
        }
    }
}

pub fn chat_system_prompt(catalog: &[CreditCard]) -> Result<String> {
    let cards = serde_json::to_string_pretty(catalog)?;
    Ok(CHAT_SYSTEM_PROMPT.replace("{catalog}", &cards))
}

pub fn analysis_prompt(cards: &[CreditCard]) -> Result<String> {
    let view: Vec<AnalysisCard<'_>> = cards.iter().map(AnalysisCard::from).collect();
    Ok(format!(
        "Compare these Indian credit cards and provide detailed analysis: {}",
        serde_json::to_string_pretty(&view)?
    ))
}

/// `TextGenerator` backed by a chat-completions model.
pub struct LlmSynth {
    credentials: Arc<dyn CredentialSource>,
    tx: Arc<dyn Transport>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl LlmSynth {
    pub fn new(
        credentials: Arc<dyn CredentialSource>,
        tx: Arc<dyn Transport>,
        model: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            credentials,
            tx,
            model,
            temperature,
            max_tokens,
        }
    }

    pub fn from_config(
        cfg: &OpenAIConfig,
        credentials: Arc<dyn CredentialSource>,
        tx: Arc<dyn Transport>,
    ) -> Self {
        Self::new(credentials, tx, cfg.model.clone(), cfg.temperature, cfg.max_tokens)
    }

    async fn complete(&self, system: String, user: String) -> Result<String> {
        let api_key = self
            .credentials
            .api_key()
            .ok_or_else(|| CardCompareError::MissingCredential(self.credentials.describe()))?;

        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::info!(model = %self.model, "Requesting completion");
        let response = self.tx.chat(&api_key, &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| CardCompareError::MalformedResponse("completion returned no choices".to_string()))
    }
}

#[async_trait]
impl TextGenerator for LlmSynth {
    async fn chat_reply(&self, message: &str, catalog: &[CreditCard]) -> Result<String> {
        self.complete(chat_system_prompt(catalog)?, message.to_string())
            .await
    }

    async fn compare_analysis(&self, cards: &[CreditCard]) -> Result<String> {
        self.complete(ANALYSIS_SYSTEM_PROMPT.to_string(), analysis_prompt(cards)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_cards;
    use crate::credentials::StaticCredentials;
    use crate::models::{Choice, CompletionResponse};
    use crate::transport::MockTransport;

    fn reply(content: &str) -> CompletionResponse {
        CompletionResponse {
            choices: vec![Choice {
                message: ChatMessage {
                    role: "assistant".to_string(),
                    content: content.to_string(),
                },
            }],
        }
    }

    fn synth(key: Option<&str>, tx: MockTransport) -> LlmSynth {
        LlmSynth::new(
            Arc::new(StaticCredentials::new(key, "sk-")),
            Arc::new(tx),
            "gpt-4o-mini".to_string(),
            0.7,
            1500,
        )
    }

    #[tokio::test]
    async fn chat_sends_catalog_in_system_prompt() {
        let mut tx = MockTransport::new();
        tx.expect_chat()
            .withf(|key, req| {
                key.expose() == "sk-test"
                    && req.model == "gpt-4o-mini"
                    && req.messages.len() == 2
                    && req.messages[0].role == "system"
                    && req.messages[0].content.contains("\"id\": \"hdfc-regalia\"")
                    && req.messages[1].content == "best travel card?"
            })
            .times(1)
            .returning(|_, _| Ok(reply("Try the Regalia.")));

        let out = synth(Some("sk-test"), tx)
            .chat_reply("best travel card?", &seed_cards())
            .await
            .expect("completion should succeed");
        assert_eq!(out, "Try the Regalia.");
    }

    #[tokio::test]
    async fn analysis_sends_trimmed_card_view() {
        let mut tx = MockTransport::new();
        tx.expect_chat()
            .withf(|_, req| {
                let user = &req.messages[1].content;
                req.messages[0].content.contains("**CREDIT CARD COMPARISON ANALYSIS**")
                    && user.contains("\"annualFee\": 2500")
                    && !user.contains("creditLimit")
            })
            .returning(|_, _| Ok(reply("analysis")));

        let cards = seed_cards();
        let out = synth(Some("sk-test"), tx)
            .compare_analysis(&cards[..2])
            .await
            .expect("completion should succeed");
        assert_eq!(out, "analysis");
    }

    #[tokio::test]
    async fn missing_key_skips_the_transport() {
        let mut tx = MockTransport::new();
        tx.expect_chat().times(0);
        let err = synth(Some("not-a-key"), tx)
            .chat_reply("hi", &seed_cards())
            .await
            .expect_err("should refuse without a valid key");
        assert!(matches!(err, CardCompareError::MissingCredential(_)));
    }

    #[tokio::test]
    async fn empty_choices_are_malformed() {
        let mut tx = MockTransport::new();
        tx.expect_chat()
            .returning(|_, _| Ok(CompletionResponse { choices: vec![] }));
        let err = synth(Some("sk-test"), tx)
            .compare_analysis(&[])
            .await
            .expect_err("no choices");
        assert!(matches!(err, CardCompareError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let mut tx = MockTransport::new();
        tx.expect_chat().returning(|_, _| {
            Err(CardCompareError::UpstreamStatus {
                status: 401,
                body: "bad key".to_string(),
            })
        });
        let err = synth(Some("sk-test"), tx)
            .chat_reply("hi", &[])
            .await
            .expect_err("upstream failure");
        assert!(matches!(err, CardCompareError::UpstreamStatus { status: 401, .. }));
    }

    #[test]
    fn chat_prompt_keeps_informational_only_instruction() {
        let prompt = chat_system_prompt(&seed_cards()).expect("catalog should serialize");
        assert!(!prompt.contains("{catalog}"));
        assert!(prompt.ends_with(
            "Remember: Focus only on providing information and advice. Do not redirect users or change the UI."
        ));
    }
}
