//! HTTP client for an OpenAI-compatible chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::{debug, warn};

use bamboo_core::ports::{ChatPrompt, TextGenerator, UpstreamError};

use super::config::GatewayConfig;

/// Chat completions client. One request per prompt, no retries.
#[derive(Debug)]
pub struct ChatCompletionsClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

impl ChatCompletionsClient {
    pub fn new(config: GatewayConfig) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| UpstreamError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn request_body(&self, prompt: &ChatPrompt) -> Value {
        json!({
            "model": self.config.model,
            "temperature": self.config.temperature,
            "messages": [
                { "role": "system", "content": prompt.system },
                { "role": "user", "content": prompt.user },
            ]
        })
    }

    /// Pull `choices[0].message.content` out of a completion response.
    fn first_choice(response: &Value) -> Result<String, UpstreamError> {
        response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .and_then(|m| m.get("content"))
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                UpstreamError::MalformedReply(format!("unexpected response format: {response}"))
            })
    }
}

#[async_trait]
impl TextGenerator for ChatCompletionsClient {
    async fn complete(&self, prompt: &ChatPrompt) -> Result<String, UpstreamError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(UpstreamError::MissingApiKey)?;

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&self.request_body(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    UpstreamError::Timeout
                } else {
                    UpstreamError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "AI gateway returned error");
            return Err(match status {
                StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited,
                StatusCode::PAYMENT_REQUIRED => UpstreamError::QuotaExhausted,
                other => UpstreamError::Status {
                    status: other.as_u16(),
                    body,
                },
            });
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedReply(format!("failed to parse API response: {e}")))?;

        Self::first_choice(&response_json)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn prompt() -> ChatPrompt {
        ChatPrompt {
            system: "You write posts.".to_string(),
            user: "Write about hooks".to_string(),
        }
    }

    async fn client_for(server: &MockServer, api_key: Option<&str>) -> ChatCompletionsClient {
        ChatCompletionsClient::new(GatewayConfig {
            endpoint: format!("{}/v1/chat/completions", server.uri()),
            api_key: api_key.map(str::to_string),
            timeout_seconds: 5,
            ..GatewayConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer secret"))
            .and(body_partial_json(json!({
                "model": "google/gemini-2.5-flash",
                "messages": [
                    { "role": "system", "content": "You write posts." },
                    { "role": "user", "content": "Write about hooks" },
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "message": { "role": "assistant", "content": "hello" } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("secret")).await;
        assert_eq!(client.complete(&prompt()).await.unwrap(), "hello");
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (429, "rate"),
            (402, "quota"),
            (503, "status"),
        ];

        for (code, kind) in cases {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(code).set_body_string("upstream says no"))
                .mount(&server)
                .await;

            let client = client_for(&server, Some("secret")).await;
            let err = client.complete(&prompt()).await.unwrap_err();
            match kind {
                "rate" => assert!(matches!(err, UpstreamError::RateLimited)),
                "quota" => assert!(matches!(err, UpstreamError::QuotaExhausted)),
                _ => assert!(matches!(
                    err,
                    UpstreamError::Status { status: 503, ref body } if body == "upstream says no"
                )),
            }
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, None).await;
        assert!(matches!(
            client.complete(&prompt()).await,
            Err(UpstreamError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn test_unexpected_shape() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("secret")).await;
        assert!(matches!(
            client.complete(&prompt()).await,
            Err(UpstreamError::MalformedReply(_))
        ));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = ChatCompletionsClient::new(GatewayConfig {
            endpoint: server.uri(),
            api_key: Some("secret".to_string()),
            timeout_seconds: 1,
            ..GatewayConfig::default()
        })
        .unwrap();

        assert!(matches!(
            client.complete(&prompt()).await,
            Err(UpstreamError::Timeout)
        ));
    }
}
