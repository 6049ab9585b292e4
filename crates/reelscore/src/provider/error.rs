use thiserror::Error;

/// Failures raised by movie lookups. Call sites in the core degrade these to empty results.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Missing credentials or an unusable base URL.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status from the relay or upstream API.
    #[error("provider returned status {status}")]
    Status { status: u16 },

    #[error("response could not be decoded: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Short code for structured logs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Transport(err) if err.is_timeout() => "timeout",
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}
