use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::domain::{RelatedWord, RelatedWordSet};
use crate::error::{Result, WordMapError};

/// Below this many entries the result is suspicious but still used.
pub const SOFT_MIN_ENTRIES: usize = 40;

static FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^```(\w*)?\s*\n?(.*?)\n?\s*```$").expect("fence pattern is valid")
});

/// The two shapes a model reply can take around its JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<'a> {
    Fenced {
        language: Option<&'a str>,
        body: &'a str,
    },
    Bare(&'a str),
}

impl<'a> Payload<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Payload::Fenced { body, .. } => *body,
            Payload::Bare(text) => *text,
        }
    }
}

/// Detects a ```` ```lang ... ``` ```` wrapper. Input is expected to be trimmed.
pub fn split_fence(text: &str) -> Payload<'_> {
    let Some(caps) = FENCE_RE.captures(text) else {
        return Payload::Bare(text);
    };
    match caps.get(2).map(|m| m.as_str()) {
        Some(body) if !body.is_empty() => Payload::Fenced {
            language: caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|lang| !lang.is_empty()),
            body: body.trim(),
        },
        _ => Payload::Bare(text),
    }
}

/// Turns raw model output into a validated set, or rejects it whole.
pub fn normalize(raw_text: &str) -> Result<RelatedWordSet> {
    let trimmed = raw_text.trim().trim_matches('\u{feff}').trim();
    let payload = split_fence(trimmed);
    if let Payload::Fenced { language, .. } = &payload {
        debug!(language = language.unwrap_or(""), "stripped fenced block");
    }

    let value: Value =
        serde_json::from_str(payload.text()).map_err(|err| WordMapError::MalformedResponse {
            detail: err.to_string(),
        })?;

    let set = validate_shape(&value)?;
    if is_short(set.len()) {
        warn!(
            received = set.len(),
            expected = crate::ingestion::prompt::DEFAULT_ENTRY_COUNT,
            "fewer words than requested, the model may not have followed the count"
        );
    }
    Ok(set)
}

/// Whether a set of this size gets the soft-length diagnostic.
pub fn is_short(len: usize) -> bool {
    len < SOFT_MIN_ENTRIES
}

fn validate_shape(value: &Value) -> Result<RelatedWordSet> {
    let Value::Array(items) = value else {
        return Err(WordMapError::InvalidShape {
            index: None,
            reason: format!("expected a JSON array, got {}", kind_of(value)),
        });
    };

    let words = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            validate_entry(item).map_err(|reason| WordMapError::InvalidShape {
                index: Some(index),
                reason,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(RelatedWordSet::new(words))
}

fn validate_entry(item: &Value) -> std::result::Result<RelatedWord, String> {
    let Value::Object(fields) = item else {
        return Err(format!("expected an object, got {}", kind_of(item)));
    };
    let word = match fields.get("word") {
        Some(Value::String(word)) => word.clone(),
        other => return Err(field_error("word", "a string", other)),
    };
    let x = number_field(fields, "x")?;
    let y = number_field(fields, "y")?;
    Ok(RelatedWord { word, x, y })
}

fn number_field(fields: &Map<String, Value>, name: &str) -> std::result::Result<f64, String> {
    match fields.get(name) {
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| format!("`{name}` is not representable as f64")),
        other => Err(field_error(name, "a number", other)),
    }
}

fn field_error(name: &str, expected: &str, found: Option<&Value>) -> String {
    match found {
        Some(value) => format!("`{name}` must be {expected}, got {}", kind_of(value)),
        None => format!("missing `{name}`"),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
