use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordMapError>;

/// Coarse grouping of failures, used by the presentation layer to pick a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    EmptyInput,
    NotConfigured,
    Transport,
    Analysis,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WordMapError {
    #[error("no target word given")]
    EmptyInput,

    #[error("generative API client is not configured: API key missing")]
    ClientNotConfigured,

    #[error("API key rejected: {detail}")]
    AuthenticationFailed { detail: String },

    #[error("generative API request failed: {detail}")]
    TransportFailure { detail: String },

    #[error("response is not valid JSON: {detail}")]
    MalformedResponse { detail: String },

    #[error("{}", shape_message(.index, .reason))]
    InvalidShape {
        index: Option<usize>,
        reason: String,
    },
}

fn shape_message(index: &Option<usize>, reason: &str) -> String {
    match index {
        Some(index) => format!("unexpected response structure at element {index}: {reason}"),
        None => format!("unexpected response structure: {reason}"),
    }
}

impl WordMapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            WordMapError::EmptyInput => ErrorCategory::EmptyInput,
            WordMapError::ClientNotConfigured => ErrorCategory::NotConfigured,
            WordMapError::AuthenticationFailed { .. } | WordMapError::TransportFailure { .. } => {
                ErrorCategory::Transport
            }
            WordMapError::MalformedResponse { .. } | WordMapError::InvalidShape { .. } => {
                ErrorCategory::Analysis
            }
        }
    }

    /// Only transport failures are worth resubmitting as-is.
    pub fn is_retriable(&self) -> bool {
        self.category() == ErrorCategory::Transport
    }

    /// The single line shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            WordMapError::EmptyInput => "Please enter a word to analyze.".to_string(),
            WordMapError::ClientNotConfigured => {
                "The API key is not configured. Set the GEMINI_API_KEY environment variable to run the explorer."
                    .to_string()
            }
            WordMapError::AuthenticationFailed { .. } => {
                "The provided API key is not valid. Check it and try again.".to_string()
            }
            WordMapError::TransportFailure { detail } => {
                format!("Error while calling the Gemini API: {detail}")
            }
            WordMapError::MalformedResponse { .. } | WordMapError::InvalidShape { .. } => {
                format!("Word relation analysis failed: {self}")
            }
        }
    }
}
