//! OpenAI chat-completions client.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse};
use async_trait::async_trait;
use nocturne_core::{GenerateRequest, GenerateResponse, Role};
use nocturne_error::{ConfigError, GenerationError, GenerationErrorKind, NocturneResult};
use nocturne_interface::NocturneDriver;
use nocturne_rate_limit::RateLimitConfig;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI API client.
///
/// The sole suspension point of the pipeline: every request carries a
/// timeout so no external call blocks indefinitely, and dropping the
/// future aborts the in-flight call.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a client from the environment.
    ///
    /// Reads the API key from `OPENAI_API_KEY` and an optional model
    /// override from `NOCTURNE_MODEL` (default "gpt-4o").
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `OPENAI_API_KEY` is not set.
    #[instrument]
    pub fn from_env() -> NocturneResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::new("OPENAI_API_KEY not set"))?;
        let model =
            std::env::var("NOCTURNE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// Creates a client with an explicit API key and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn new(api_key: impl Into<String>, model: impl AsRef<str>) -> NocturneResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Http(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;
        debug!("Creating new OpenAI client");
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.as_ref().to_string(),
        })
    }

    /// Sends a request to the chat-completions endpoint.
    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn send(&self, request: &ChatRequest) -> NocturneResult<ChatResponse> {
        debug!("Sending request to OpenAI API");

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                let kind = if e.is_timeout() {
                    GenerationErrorKind::Timeout
                } else {
                    GenerationErrorKind::Http(format!("Request failed: {}", e))
                };
                GenerationError::new(kind)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: status.as_u16(),
                message: body,
            })
            .into());
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            GenerationError::new(GenerationErrorKind::Parse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        debug!(response_id = %chat_response.id, "Received response from OpenAI");
        Ok(chat_response)
    }

    /// Converts a generic request to the OpenAI wire format.
    fn convert_request(&self, request: &GenerateRequest) -> NocturneResult<ChatRequest> {
        if request.messages().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::InvalidRequest(
                "Request must carry at least one message".to_string(),
            ))
            .into());
        }

        let messages = request
            .messages()
            .iter()
            .map(|msg| ChatMessage {
                role: match msg.role() {
                    Role::System => "system",
                    Role::User => "user",
                    Role::Assistant => "assistant",
                }
                .to_string(),
                content: msg.content().clone(),
            })
            .collect();

        Ok(ChatRequest {
            model: request
                .model()
                .clone()
                .unwrap_or_else(|| self.model.clone()),
            messages,
            max_tokens: *request.max_tokens(),
            temperature: *request.temperature(),
        })
    }

    /// Extracts the first text choice from a response.
    fn convert_response(response: ChatResponse) -> NocturneResult<GenerateResponse> {
        let text = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| GenerationError::new(GenerationErrorKind::EmptyResponse))?;

        Ok(GenerateResponse::new(text))
    }
}

#[async_trait]
impl NocturneDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> NocturneResult<GenerateResponse> {
        debug!("Generating response with OpenAI");

        let chat_request = self.convert_request(req)?;
        let chat_response = self.send(&chat_request).await?;
        Self::convert_response(chat_response)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn rate_limits(&self) -> &RateLimitConfig {
        // Conservative defaults for the lower OpenAI usage tiers.
        static DEFAULT_RATE_LIMITS: RateLimitConfig = RateLimitConfig {
            requests_per_minute: 60,
            tokens_per_minute: 90_000,
            requests_per_day: 10_000,
            max_concurrent: 4,
        };
        &DEFAULT_RATE_LIMITS
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
