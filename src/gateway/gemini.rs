use super::{CompletionRequest, GatewayError, ModelClient, ResponseFormat};
use crate::config::Config;
use crate::log_debug;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::ExponentialBackoff;

/// Model used when the configuration does not name one
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const MAX_OUTPUT_TOKENS: u32 = 8192;

/// Client for the Gemini `generateContent` endpoint
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    timeout_secs: u64,
    base_url: String,
}

impl GeminiClient {
    /// Build a client from the loaded configuration.
    ///
    /// Fails early with `MissingApiKey` so callers see a configuration
    /// problem before any prompt is built.
    pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
        let api_key = config.effective_api_key();
        if api_key.is_empty() {
            return Err(GatewayError::MissingApiKey);
        }

        Ok(Self {
            client: Client::new(),
            api_key,
            model: config.effective_model().to_string(),
            timeout_secs: config.gateway.request_timeout_secs,
            base_url: API_BASE.to_string(),
        })
    }

    /// Point the client at a different endpoint base (integration tests)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn complete_once(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let request_body = build_request_body(request);
        let api_url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let call = async {
            let response = self
                .client
                .post(&api_url)
                .header("Content-Type", "application/json")
                .json(&request_body)
                .send()
                .await?;

            if !response.status().is_success() {
                let status = response.status().as_u16();
                let body = response.text().await.unwrap_or_default();
                return Err(GatewayError::Api { status, body });
            }

            let response_body: serde_json::Value = response.json().await?;
            extract_text(&response_body)
        };

        match tokio::time::timeout(Duration::from_secs(self.timeout_secs), call).await {
            Ok(result) => result,
            Err(_) => Err(GatewayError::Timeout(self.timeout_secs)),
        }
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        log_debug!(
            "Gateway call: model={}, format={:?}, prompt length={}",
            self.model,
            request.options.response_format,
            request.prompt.len()
        );

        // Initial attempt plus one retry, for transport-class failures only
        let retry_strategy = ExponentialBackoff::from_millis(10).factor(2).take(1);

        let result = RetryIf::spawn(
            retry_strategy,
            || self.complete_once(request),
            GatewayError::is_transient,
        )
        .await;

        match &result {
            Ok(text) => log_debug!("Gateway response: {} chars", text.len()),
            Err(e) => log_debug!("Gateway call failed: {}", e),
        }

        result
    }
}

/// Assemble the `generateContent` request body.
///
/// The model is addressed in the URL; the system instruction travels as a
/// dedicated `systemInstruction` part.
fn build_request_body(request: &CompletionRequest) -> serde_json::Value {
    let mut body = json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    {"text": request.prompt}
                ]
            }
        ],
        "generationConfig": {
            "maxOutputTokens": MAX_OUTPUT_TOKENS
        }
    });

    if let Some(system) = &request.system_instruction {
        body["systemInstruction"] = json!({"parts": [{"text": system}]});
    }

    if let Some(temperature) = request.options.temperature {
        body["generationConfig"]["temperature"] = json!(temperature);
    }

    if request.options.response_format == ResponseFormat::Json {
        body["generationConfig"]["responseMimeType"] = json!("application/json");
    }

    body
}

/// Extract the completion text from a `generateContent` response.
///
/// The response format is:
/// ```json
/// { "candidates": [ { "content": { "parts": [ { "text": "..." } ] } } ] }
/// ```
fn extract_text(response_body: &serde_json::Value) -> Result<String, GatewayError> {
    let content = response_body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or(GatewayError::EmptyResponse)?;

    if content.trim().is_empty() {
        return Err(GatewayError::EmptyResponse);
    }

    Ok(content.to_string())
}
