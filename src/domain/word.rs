use serde::{Deserialize, Serialize};

/// One point of the simulated 2D projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedWord {
    pub word: String,
    pub x: f64,
    pub y: f64,
}

impl RelatedWord {
    pub fn new(word: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            word: word.into(),
            x,
            y,
        }
    }

    pub fn matches(&self, target_word: &str) -> bool {
        self.word.to_lowercase() == target_word.to_lowercase()
    }
}

/// Related words for a single target word, in the order the model returned them.
///
/// Duplicates are kept as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelatedWordSet {
    words: Vec<RelatedWord>,
}

impl RelatedWordSet {
    pub fn new(words: Vec<RelatedWord>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RelatedWord> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[RelatedWord] {
        &self.words
    }

    pub fn first(&self) -> Option<&RelatedWord> {
        self.words.first()
    }

    pub fn into_inner(self) -> Vec<RelatedWord> {
        self.words
    }
}

impl From<Vec<RelatedWord>> for RelatedWordSet {
    fn from(words: Vec<RelatedWord>) -> Self {
        Self::new(words)
    }
}

impl<'a> IntoIterator for &'a RelatedWordSet {
    type Item = &'a RelatedWord;
    type IntoIter = std::slice::Iter<'a, RelatedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
