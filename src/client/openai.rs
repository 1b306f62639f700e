use std::fmt;
use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::error::CompletionError;
use crate::prompt::CompletionRequest;
use crate::utils::debug_log;

use super::CompletionBackend;

#[derive(Debug, Deserialize)]
struct ChatResponse {
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

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// First choice's text, if the response carries one
fn first_choice_text(response: ChatResponse) -> Result<String, CompletionError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or(CompletionError::NoChoices)
}

/// Human-readable message from an error response body.
///
/// Uses the API's `error.message` when present, otherwise the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) if body.trim().is_empty() => "no details provided".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Chat-completion backend speaking the OpenAI wire format over HTTP
pub(crate) struct OpenAiBackend {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl OpenAiBackend {
    pub(crate) fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        // Non-2xx responses are read so the API's error message can be surfaced
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        OpenAiBackend {
            agent,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }
}

impl CompletionBackend for OpenAiBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let start = Instant::now();
        debug_log(&format!(
            "POST {} (model {}, max_tokens {})",
            self.endpoint, request.model, request.max_tokens
        ));

        let mut response = self
            .agent
            .post(self.endpoint.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(request)
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        debug_log(&format!(
            "HTTP {status} after {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        ));

        if !(200..300).contains(&status) {
            let body = response.body_mut().read_to_string().unwrap_or_default();
            return Err(CompletionError::from_status(status, error_message(&body)));
        }

        let parsed: ChatResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;
        first_choice_text(parsed)
    }
}
