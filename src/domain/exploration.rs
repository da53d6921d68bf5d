use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::word::RelatedWordSet;

/// Result of one query: the target word and the map produced for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exploration {
    pub target_word: String,
    pub words: RelatedWordSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl Exploration {
    pub fn new(target_word: impl Into<String>, words: RelatedWordSet) -> Self {
        Self {
            target_word: target_word.into(),
            words,
            model: None,
            generated_at: Utc::now(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
