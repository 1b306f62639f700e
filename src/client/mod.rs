mod openai;

pub(crate) use openai::OpenAiBackend;

use serde::Serialize;

use crate::consts::WARNING_MARKER;
use crate::error::CompletionError;
use crate::prompt::{CompletionRequest, EMPTY_INPUT_MESSAGE, GenerationParams, build_request};

/// Something that can turn one chat-completion request into text.
///
/// Implementations make exactly one blocking call per invocation and
/// return the first completion's text untouched.
pub(crate) trait CompletionBackend {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

impl<B: CompletionBackend + ?Sized> CompletionBackend for &B {
    fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        (**self).complete(request)
    }
}

/// Kind of text held in place of the explanation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Status {
    Ok,
    Error,
    Empty,
}

/// Outcome of explaining one project name
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Explanation {
    /// Name was blank; nothing was sent
    NeedsInput,
    Text(String),
    Failed(CompletionError),
}

impl Explanation {
    /// Text to show in place of the explanation, always non-empty
    pub(crate) fn display(&self) -> String {
        match self {
            Explanation::NeedsInput => EMPTY_INPUT_MESSAGE.to_string(),
            Explanation::Text(text) => text.clone(),
            Explanation::Failed(e) => format!("{WARNING_MARKER} Error: {e}"),
        }
    }

    pub(crate) fn status(&self) -> Status {
        match self {
            Explanation::NeedsInput => Status::Empty,
            Explanation::Text(_) => Status::Ok,
            Explanation::Failed(_) => Status::Error,
        }
    }
}

pub(crate) struct CompletionClient<B> {
    backend: B,
    params: GenerationParams,
}

impl<B: CompletionBackend> CompletionClient<B> {
    pub(crate) fn new(backend: B, params: GenerationParams) -> Self {
        CompletionClient { backend, params }
    }

    /// Send `request` and return the completion with surrounding whitespace removed
    pub(crate) fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.backend
            .complete(request)
            .map(|text| text.trim().to_string())
    }

    /// Build the prompt for `name` and fetch its explanation
    pub(crate) fn explain(&self, name: &str) -> Explanation {
        let Ok(request) = build_request(name, &self.params) else {
            return Explanation::NeedsInput;
        };
        match self.complete(&request) {
            Ok(text) => Explanation::Text(text),
            Err(e) => Explanation::Failed(e),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeBackend;
    use super::*;
    use crate::prompt::{SYSTEM_PROMPT, user_prompt};

    fn client(fake: &FakeBackend) -> CompletionClient<&FakeBackend> {
        CompletionClient::new(fake, GenerationParams::default())
    }

    #[test]
    fn blank_name_makes_no_call() {
        let fake = FakeBackend::default();
        let client = client(&fake);
        for input in ["", "  ", "\n\t"] {
            let result = client.explain(input);
            assert_eq!(result, Explanation::NeedsInput);
            assert_eq!(result.display(), EMPTY_INPUT_MESSAGE);
            assert_eq!(result.status(), Status::Empty);
        }
        assert_eq!(fake.calls(), 0);
    }

    #[test]
    fn one_call_per_name_with_constant_system_prompt() {
        let fake = FakeBackend::default();
        let client = client(&fake);
        client.explain("Ethereum (ETH)");
        client.explain("Celestia (TIA)");

        let requests = fake.requests.borrow();
        assert_eq!(requests.len(), 2);
        for req in requests.iter() {
            assert_eq!(req.messages[0].content, SYSTEM_PROMPT);
        }
        assert_eq!(
            requests[0].user_content(),
            Some(user_prompt("Ethereum (ETH)").as_str())
        );
        assert_eq!(
            requests[1].user_content(),
            Some(user_prompt("Celestia (TIA)").as_str())
        );
    }

    #[test]
    fn success_is_trimmed() {
        let fake = FakeBackend::replying(Ok("\n  It could make payments instant.  \n".to_string()));
        let result = client(&fake).explain("Solana");
        assert_eq!(
            result,
            Explanation::Text("It could make payments instant.".to_string())
        );
        assert_eq!(result.status(), Status::Ok);
    }

    #[test]
    fn complete_trims_directly() {
        let fake = FakeBackend::replying(Ok("  X  ".to_string()));
        let client = client(&fake);
        let req = build_request("Pyth", &GenerationParams::default()).unwrap();
        assert_eq!(client.complete(&req), Ok("X".to_string()));
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Status::Ok).unwrap(), "ok");
        assert_eq!(serde_json::to_value(Status::Error).unwrap(), "error");
        assert_eq!(serde_json::to_value(Status::Empty).unwrap(), "empty");
    }

    #[test]
    fn failure_renders_with_warning_marker() {
        let errors = [
            CompletionError::Transport("connection refused".to_string()),
            CompletionError::Unauthorized {
                status: 401,
                message: "bad key".to_string(),
            },
            CompletionError::RateLimited {
                message: "slow down".to_string(),
            },
            CompletionError::Malformed("expected value".to_string()),
            CompletionError::NoChoices,
        ];
        for err in errors {
            let fake = FakeBackend::replying(Err(err.clone()));
            let result = client(&fake).explain("Render");
            let shown = result.display();
            assert!(shown.starts_with(WARNING_MARKER), "{shown}");
            assert!(shown.contains(&err.to_string()), "{shown}");
            assert_eq!(result.status(), Status::Error);
        }
    }
}
