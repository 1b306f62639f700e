/// Chat-completion endpoint used when the config file does not name one
pub(crate) const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Model identifier sent with every request unless overridden
pub(crate) const DEFAULT_MODEL: &str = "gpt-4o";

/// Output length cap for a single explanation
pub(crate) const MAX_TOKENS: u32 = 650;

pub(crate) const TEMPERATURE: f32 = 0.65;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Environment variable holding the API key
pub(crate) const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Prefix of every rendered completion failure
pub(crate) const WARNING_MARKER: &str = "⚠️";
