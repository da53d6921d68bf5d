use super::llm_client::{LLMClient, TransportError};
use super::prompt::{PromptBuilder, PromptTemplate};
use super::response::GenerateRequest;
use super::validator::normalize;
use crate::config::ExplorerConfig;
use crate::domain::{Exploration, RelatedWordSet};
use crate::error::{Result, WordMapError};
use std::sync::Arc;
use tracing::{error, info};

/// Prompt, one remote call, validation. No retry and no cache.
pub struct WordRelationClient<C: LLMClient> {
    llm: Arc<C>,
    config: ExplorerConfig,
    prompt_builder: PromptBuilder,
}

impl<C: LLMClient> WordRelationClient<C> {
    pub fn new(llm: Arc<C>, config: ExplorerConfig) -> Self {
        Self {
            llm,
            config,
            prompt_builder: PromptBuilder::default(),
        }
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.prompt_builder = PromptBuilder::new(template);
        self
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    pub fn fetch_related_words(&self, target_word: &str) -> Result<RelatedWordSet> {
        let target_word = target_word.trim();
        if target_word.is_empty() {
            return Err(WordMapError::EmptyInput);
        }
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WordMapError::ClientNotConfigured)?;

        let request = GenerateRequest::json(
            self.config.model.as_str(),
            self.prompt_builder.build(target_word),
            self.config.temperature,
        );
        info!(word = target_word, model = %request.model, "requesting related words");

        let raw = self
            .llm
            .generate(api_key, &request)
            .map_err(classify_transport)
            .map_err(|err| log_failure(target_word, err))?;
        let words = normalize(&raw).map_err(|err| log_failure(target_word, err))?;

        info!(word = target_word, count = words.len(), "related words received");
        Ok(words)
    }

    pub fn explore(&self, target_word: &str) -> Result<Exploration> {
        let words = self.fetch_related_words(target_word)?;
        Ok(Exploration::new(target_word.trim(), words).with_model(self.config.model.as_str()))
    }
}

fn classify_transport(err: TransportError) -> WordMapError {
    if err.is_authentication() {
        WordMapError::AuthenticationFailed {
            detail: err.to_string(),
        }
    } else {
        WordMapError::TransportFailure {
            detail: err.to_string(),
        }
    }
}

fn log_failure(target_word: &str, err: WordMapError) -> WordMapError {
    error!(word = target_word, category = ?err.category(), %err, "fetching related words failed");
    err
}
