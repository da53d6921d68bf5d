mod client;
mod llm_client;
pub mod prompt;
mod response;
pub mod validator;

pub use client::WordRelationClient;
pub use llm_client::{GeminiLLMClient, LLMClient, MockLLMClient, TransportError};
pub use prompt::{PromptBuilder, PromptTemplate};
pub use response::GenerateRequest;
pub use validator::{normalize, split_fence, Payload};
