//! Completion endpoint client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{ApiConfig, AppError};
use crate::ports::{CompletionClient, CompletionError, CompletionRequest};

/// HTTP client for an OpenAI-style chat-completion service.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    endpoint: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client from endpoint configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = join_endpoint(&config.base_url)?;

        Ok(Self {
            api_key: config.api_key.clone(),
            endpoint,
            model: config.model.clone(),
            client,
        })
    }

    /// Create from environment configuration.
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(&ApiConfig::from_env()?)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

/// Resolve the `chat/completions` endpoint under the configured base URL.
///
/// The base is slash-terminated first: `Url::join` would otherwise treat a
/// final segment like `/v1` as a file and replace it instead of appending.
fn join_endpoint(base: &Url) -> Result<Url, AppError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join("chat/completions")
        .map_err(|e| AppError::Configuration(format!("Invalid completion endpoint URL: {}", e)))
}

/// Pull the message out of an OpenAI-style `{"error": {"message": …}}`
/// body, when the service sends one.
fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(|message| message.to_string())
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: CompletionRequest) -> Result<String, CompletionError> {
        let api_request = ApiRequest {
            model: self.model.clone(),
            messages: vec![
                Message { role: "system", content: request.system_prompt },
                Message { role: "user", content: request.user_prompt },
            ],
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&api_request)
            .send()
            .map_err(|e| CompletionError::Unexpected(format!("HTTP request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            let details = extract_error_message(&error_text).unwrap_or(error_text);
            return Err(CompletionError::Api(format!(
                "API error ({}): {}",
                status.as_u16(),
                details
            )));
        }

        let api_response: ApiResponse = response
            .json()
            .map_err(|e| CompletionError::Unexpected(format!("Failed to parse response: {}", e)))?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Unexpected("No completion choices in response".into()))
    }
}
