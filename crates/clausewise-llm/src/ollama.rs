//! Ollama Provider Implementation
//!
//! Talks to the chat endpoint (`/api/chat`) of a local Ollama server. Every
//! call sends a system and a user message and reads back one assistant
//! message; no history is kept between calls.
//!
//! # Features
//!
//! - Configurable endpoint and model
//! - Per-request timeout
//! - Bounded retries with exponential backoff (see [`RetryPolicy`])
//! - Optional JSON mode for structured replies
//!
//! # Examples
//!
//! ```no_run
//! use clausewise_llm::{OllamaProvider, RetryPolicy};
//! use std::time::Duration;
//!
//! let provider = OllamaProvider::new("http://localhost:11434", "gemma3:4b")
//!     .with_timeout(Duration::from_secs(60))
//!     .with_retry_policy(RetryPolicy::new(5, 250, 4_000));
//! ```

use crate::retry::RetryPolicy;
use crate::LlmError;
use clausewise_domain::{ChatProvider, ChatRequest, Role};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "gemma3:4b";

/// Default timeout for one request (2 minutes; whole contracts are slow to read)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Ollama API provider for local LLM inference
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
    timeout: Duration,
    retry: RetryPolicy,
    temperature: Option<f32>,
}

/// Request body for the Ollama chat API
#[derive(Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<OllamaOptions>,
}

#[derive(Serialize)]
struct OllamaMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

/// Response from the Ollama chat API
#[derive(Deserialize)]
struct OllamaChatResponse {
    message: OllamaReply,
    #[allow(dead_code)]
    #[serde(default)]
    done: bool,
}

#[derive(Deserialize)]
struct OllamaReply {
    content: String,
}

impl OllamaProvider {
    /// Create a new Ollama provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: Model to use (e.g., "gemma3:4b", "llama3")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry: RetryPolicy::default(),
            temperature: None,
        }
    }

    /// Create a new Ollama provider on the default local endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the timeout applied to each request
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry policy
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_body<'a>(&'a self, request: &'a ChatRequest) -> OllamaChatRequest<'a> {
        let messages = vec![
            OllamaMessage {
                role: Role::System.as_str(),
                content: &request.system,
            },
            OllamaMessage {
                role: Role::User.as_str(),
                content: &request.user,
            },
        ];

        OllamaChatRequest {
            model: &self.model,
            messages,
            stream: false,
            format: request.json_mode.then_some("json"),
            options: self.temperature.map(|temperature| OllamaOptions { temperature }),
        }
    }

    /// Issue one request with no retries
    async fn send_once(&self, body: &OllamaChatRequest<'_>) -> Result<String, LlmError> {
        let url = format!("{}/api/chat", self.endpoint);

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| self.classify_transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            let chat_response = response
                .json::<OllamaChatResponse>()
                .await
                .map_err(|e| {
                    LlmError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
            return Ok(chat_response.message.content);
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        if status.is_server_error() {
            Err(LlmError::Communication(format!("HTTP {}: {}", status, error_text)))
        } else {
            Err(LlmError::Other(format!("HTTP {}: {}", status, error_text)))
        }
    }

    fn classify_transport_error(&self, e: reqwest::Error) -> LlmError {
        if e.is_timeout() {
            LlmError::Timeout(self.timeout.as_secs())
        } else if e.is_builder() {
            LlmError::Other(format!("Invalid request: {}", e))
        } else {
            LlmError::Communication(format!("Request failed: {}", e))
        }
    }
}

impl ChatProvider for OllamaProvider {
    type Error = LlmError;

    async fn complete(&self, request: &ChatRequest) -> Result<String, Self::Error> {
        let body = self.build_body(request);
        debug!(
            model = %self.model,
            json_mode = request.json_mode,
            user_chars = request.user.len(),
            "Sending chat request"
        );

        let content = self
            .retry
            .run("ollama_chat", || self.send_once(&body))
            .await?;

        debug!(response_chars = content.len(), "Received chat response");
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
