use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use reqwest::Client;
use tokio::time::sleep;

use crate::config::OpenAIConfig;
use crate::credentials::ApiKey;
use crate::error::{CardCompareError, Result};
use crate::models::{CompletionRequest, CompletionResponse};
use crate::retry::RetryPolicy;

/// One chat-completions exchange.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn chat(&self, api_key: &ApiKey, req: &CompletionRequest) -> Result<CompletionResponse>;
}

/// OpenAI-compatible HTTP transport with retries on transient failures.
pub struct OpenAiTransport {
    client: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl OpenAiTransport {
    pub fn new(base_url: &str, retry: RetryPolicy) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("card-compare/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            retry,
        })
    }

    pub fn from_config(cfg: &OpenAIConfig, retry: RetryPolicy) -> Result<Self> {
        Self::new(&cfg.base_url, retry)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn attempt(&self, api_key: &ApiKey, req: &CompletionRequest) -> Result<CompletionResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key.expose())
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CardCompareError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            CardCompareError::MalformedResponse(format!("Failed to parse completion response: {e}"))
        })
    }
}

#[async_trait]
impl Transport for OpenAiTransport {
    async fn chat(&self, api_key: &ApiKey, req: &CompletionRequest) -> Result<CompletionResponse> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(api_key, req).await {
                Ok(response) => return Ok(response),
                Err(e) if self.retry.should_retry(attempt, &e) => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::debug!(attempt, ?delay, error = %e, "Retrying completion request");
                    sleep(delay).await;
                }
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Completion request failed");
                    return Err(e);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChatMessage;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![ChatMessage::user("hello")],
            temperature: 0.7,
            max_tokens: 10,
        }
    }

    #[test]
    fn endpoint_joins_base_url() {
        let t = OpenAiTransport::new("https://api.example.com/v1/", RetryPolicy::none())
            .expect("client should build");
        assert_eq!(t.endpoint(), "https://api.example.com/v1/chat/completions");
    }

    #[test]
    fn request_serializes_in_wire_format() {
        let json = serde_json::to_value(request()).expect("request should serialize");
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 10);
    }

    #[tokio::test]
    async fn unreachable_host_fails_without_retrying_forever() {
        // Port 9 on localhost is expected to refuse connections.
        let t = OpenAiTransport::new("http://127.0.0.1:9/v1", RetryPolicy::none())
            .expect("client should build");
        let key = ApiKey::parse("sk-test", "sk-").expect("valid key");
        let result = t.chat(&key, &request()).await;
        assert!(matches!(result, Err(CardCompareError::Http(_))));
    }
}
