//! OpenAI-compatible chat completions client.

use serde::{Deserialize, Serialize};

use mentor_core::{CompletionRequest, CompletionService, ServiceError, ServiceKind};

use crate::http::{agent, base_url, classify, parse_error};

/// Default API endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const SERVICE: ServiceKind = ServiceKind::Completion;

// ── Request / Response types ─────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// ── Client ───────────────────────────────────────────────────────────────────

/// Blocking client for `POST /v1/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Read the API key from `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self, ServiceError> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ServiceError::MissingCredential {
                service: SERVICE,
                hint: format!("set the {} environment variable", API_KEY_ENV),
            }),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.base_url = base_url(url);
        self
    }

    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl CompletionService for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        if self.api_key.trim().is_empty() {
            return Err(ServiceError::MissingCredential {
                service: SERVICE,
                hint: "API key is empty".to_string(),
            });
        }

        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        tracing::debug!(url = %url, model = %self.model, "chat completion request");

        let response = agent()
            .post(&url)
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| classify(e, SERVICE, &format!("model '{}'", self.model)))?;

        let parsed: ChatResponse = response
            .into_body()
            .read_json()
            .map_err(|e| parse_error(SERVICE, e))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| parse_error(SERVICE, "response contained no message content"))
    }
}
