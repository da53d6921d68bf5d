mod exploration;
mod word;

pub use exploration::Exploration;
pub use word::{RelatedWord, RelatedWordSet};
