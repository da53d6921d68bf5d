use crate::domain::RelatedWordSet;
use crate::error::{ErrorCategory, WordMapError};

pub const SETUP_GUIDANCE: &str =
    "This explorer needs the GEMINI_API_KEY environment variable. Ask your administrator or check your setup.";

/// What the front end should show after a query.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No credential: keep showing setup help, do not offer a retry.
    NotConfigured { message: String, guidance: String },
    Failed { message: String, retriable: bool },
    /// The query succeeded but there is nothing to draw.
    Empty,
    Loaded(RelatedWordSet),
}

impl ViewState {
    pub fn from_outcome(outcome: Result<RelatedWordSet, WordMapError>) -> Self {
        match outcome {
            Ok(words) if words.is_empty() => ViewState::Empty,
            Ok(words) => ViewState::Loaded(words),
            Err(err) if err.category() == ErrorCategory::NotConfigured => {
                ViewState::NotConfigured {
                    message: err.user_message(),
                    guidance: SETUP_GUIDANCE.to_string(),
                }
            }
            Err(err) => ViewState::Failed {
                message: err.user_message(),
                retriable: err.is_retriable(),
            },
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ViewState::NotConfigured { message, .. } | ViewState::Failed { message, .. } => {
                Some(message.as_str())
            }
            ViewState::Empty | ViewState::Loaded(_) => None,
        }
    }

    pub fn accepts_queries(&self) -> bool {
        !matches!(self, ViewState::NotConfigured { .. })
    }
}
