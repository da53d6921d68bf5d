use crate::domain::{RelatedWord, RelatedWordSet};
use serde::Serialize;

/// Every axis covers at least this span, whatever the data.
pub const MIN_AXIS_EXTENT: f64 = 50.0;
pub const AXIS_PADDING: f64 = 10.0;
pub const MAX_LABEL_CHARS: usize = 10;
pub const MIN_PLOT_WIDTH: u32 = 300;
pub const MAX_PLOT_WIDTH: u32 = 800;
pub const MIN_PLOT_HEIGHT: u32 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values.into_iter().fold(
            (-MIN_AXIS_EXTENT, MIN_AXIS_EXTENT),
            |(min, max), v| (min.min(v), max.max(v)),
        );
        Self {
            min: (min - AXIS_PADDING).floor(),
            max: (max + AXIS_PADDING).ceil(),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Maps a data value onto `[0, 1]` within the domain.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Data split into the two plotted series plus axis domains.
#[derive(Debug, Clone, Serialize)]
pub struct PlotLayout<'a> {
    pub target_word: &'a str,
    pub target: Vec<&'a RelatedWord>,
    pub related: Vec<&'a RelatedWord>,
    pub x_domain: AxisDomain,
    pub y_domain: AxisDomain,
}

impl<'a> PlotLayout<'a> {
    pub fn new(words: &'a RelatedWordSet, target_word: &'a str) -> Self {
        let (target, related) = words.iter().partition(|w| w.matches(target_word));
        Self {
            target_word,
            target,
            related,
            x_domain: AxisDomain::from_values(words.iter().map(|w| w.x)),
            y_domain: AxisDomain::from_values(words.iter().map(|w| w.y)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty() && self.related.is_empty()
    }

    pub fn len(&self) -> usize {
        self.target.len() + self.related.len()
    }
}

/// Long labels keep their first nine characters.
pub fn truncate_label(word: &str) -> String {
    if word.chars().count() > MAX_LABEL_CHARS {
        let head: String = word.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{head}...")
    } else {
        word.to_string()
    }
}

/// Canvas size for a requested width.
pub fn plot_dimensions(width: u32) -> (u32, u32) {
    let width = width.clamp(MIN_PLOT_WIDTH, MAX_PLOT_WIDTH);
    let height = ((width as f64) * 0.6).max(MIN_PLOT_HEIGHT as f64) as u32;
    (width, height)
}
