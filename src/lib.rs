pub mod config;
pub mod domain;
pub mod error;
pub mod ingestion;
pub mod presentation;
pub mod utils;

pub use config::ExplorerConfig;
pub use domain::{Exploration, RelatedWord, RelatedWordSet};
pub use error::{ErrorCategory, WordMapError};
pub use ingestion::{
    normalize, GeminiLLMClient, GenerateRequest, LLMClient, MockLLMClient, PromptBuilder,
    PromptTemplate, TransportError, WordRelationClient,
};
pub use presentation::{PlotLayout, ViewState};
