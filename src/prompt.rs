//! Prompt builder
//!
//! Pairs the constant persona instruction with a per-project request.

use serde::Serialize;
use thiserror::Error;

use crate::consts::{DEFAULT_MODEL, MAX_TOKENS, TEMPERATURE};

pub(crate) const SYSTEM_PROMPT: &str =
    r#"You are TokenExplainerGPT, an expert in translating advanced crypto projects
into practical, real-world future use cases that anyone can understand.

Your job is to explain what each crypto project could enable in the real world —
and why it matters — to an adult who doesn’t use crypto but wants to understand what’s coming.

Avoid crypto-specific jargon. No blockchain, tokens, or smart contracts.
Instead, focus on:

• What future it enables – What this project might make possible, faster, or better.
• Who benefits – The types of industries, people, or problems it could improve.
• What it replaces or automates – Current systems or companies it could change.
• Analogy – End with one comparison to a well-known product or infrastructure.

Think of this like explaining the internet to someone in the 1990s.
You’re showing them what this could become, in terms they already understand.

Use plain, friendly English. No hype.
"#;

/// Shown instead of an explanation when no project name was given
pub(crate) const EMPTY_INPUT_MESSAGE: &str = "Please enter or select a crypto to explore.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Message {
    pub(crate) role: Role,
    pub(crate) content: String,
}

/// Generation settings attached to every request
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GenerationParams {
    pub(crate) model: String,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::with_model(DEFAULT_MODEL)
    }
}

impl GenerationParams {
    /// Token cap and temperature are fixed; only the model may vary
    pub(crate) fn with_model(model: impl Into<String>) -> Self {
        GenerationParams {
            model: model.into(),
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        }
    }
}

/// Body of a chat-completion call, serialized as-is onto the wire
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CompletionRequest {
    pub(crate) model: String,
    pub(crate) messages: Vec<Message>,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f32,
}

impl CompletionRequest {
    /// Text of the user message, if any
    #[cfg(test)]
    pub(crate) fn user_content(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum PromptError {
    #[error("Please enter or select a crypto to explore.")]
    EmptyInput,
}

pub(crate) fn user_prompt(name: &str) -> String {
    format!(
        "Explain what the crypto project '{name}' could enable in the future, \
         without any crypto jargon, for someone who doesn't use crypto."
    )
}

/// Build the two-message request for `name`, rejecting blank input
pub(crate) fn build_request(
    name: &str,
    params: &GenerationParams,
) -> Result<CompletionRequest, PromptError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PromptError::EmptyInput);
    }

    Ok(CompletionRequest {
        model: params.model.clone(),
        messages: vec![
            Message {
                role: Role::System,
                content: SYSTEM_PROMPT.to_string(),
            },
            Message {
                role: Role::User,
                content: user_prompt(name),
            },
        ],
        max_tokens: params.max_tokens,
        temperature: params.temperature,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        let params = GenerationParams::default();
        for input in ["", "   ", "\t\n"] {
            assert_eq!(
                build_request(input, &params),
                Err(PromptError::EmptyInput)
            );
        }
        assert_eq!(PromptError::EmptyInput.to_string(), EMPTY_INPUT_MESSAGE);
    }

    #[test]
    fn system_message_is_constant_across_names() {
        let params = GenerationParams::default();
        let a = build_request("Bitcoin (BTC)", &params).unwrap();
        let b = build_request("Uniswap", &params).unwrap();

        assert_eq!(a.messages[0], b.messages[0]);
        assert_eq!(a.messages[0].role, Role::System);
        assert_eq!(a.messages[0].content, SYSTEM_PROMPT);
        assert_ne!(a.messages[1], b.messages[1]);
    }

    #[test]
    fn system_prompt_keeps_persona_text() {
        assert!(SYSTEM_PROMPT.starts_with("You are TokenExplainerGPT"));
        assert!(SYSTEM_PROMPT.contains("in the real world —\nand why it matters —"));
        assert!(SYSTEM_PROMPT.contains("doesn’t use crypto"));
        assert!(SYSTEM_PROMPT.contains("• Who benefits – The types of industries"));
        assert!(SYSTEM_PROMPT.contains("• Analogy – End with one comparison"));
        assert!(SYSTEM_PROMPT.ends_with("No hype.\n"));
    }

    #[test]
    fn user_message_embeds_trimmed_name() {
        let req = build_request("  Arweave  ", &GenerationParams::default()).unwrap();
        assert_eq!(req.messages.len(), 2);
        assert_eq!(
            req.user_content(),
            Some(
                "Explain what the crypto project 'Arweave' could enable in the future, \
                 without any crypto jargon, for someone who doesn't use crypto."
            )
        );
    }

    #[test]
    fn fixed_generation_params() {
        let req = build_request("Pyth", &GenerationParams::with_model("gpt-4o-mini")).unwrap();
        assert_eq!(req.model, "gpt-4o-mini");
        assert_eq!(req.max_tokens, 650);
        assert!((req.temperature - 0.65).abs() < f32::EPSILON);
    }

    #[test]
    fn serializes_to_chat_completion_body() {
        let req = build_request("Pyth", &GenerationParams::default()).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-4o");
        assert_eq!(json["max_tokens"], 650);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }
}
