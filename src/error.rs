use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Missing API key: set OPENAI_API_KEY or add api_key to the config file")]
    MissingApiKey,

    #[error("Unknown preset \"{input}\" (use `token-explainer list` to see the choices)")]
    UnknownPreset { input: String },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single call to the completion service.
///
/// Every variant is terminal for the request that produced it; the caller
/// renders it in place of the explanation.
#[derive(Debug, Clone, Error, PartialEq)]
pub(crate) enum CompletionError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Authentication failed ({status}): {message}")]
    Unauthorized { status: u16, message: String },

    #[error("Rate limit or quota exceeded: {message}")]
    RateLimited { message: String },

    #[error("Service returned {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Response contained no completion")]
    NoChoices,
}

impl CompletionError {
    /// Map a non-success HTTP status and its message onto the taxonomy
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            401 | 403 => CompletionError::Unauthorized { status, message },
            429 => CompletionError::RateLimited { message },
            _ => CompletionError::Http { status, message },
        }
    }
}
