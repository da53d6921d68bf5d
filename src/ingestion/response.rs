use serde::{Deserialize, Serialize};

pub const JSON_MIME_TYPE: &str = "application/json";

/// Provider-neutral description of one text generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub response_mime_type: String,
    pub temperature: f32,
}

impl GenerateRequest {
    pub fn json(model: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_mime_type: JSON_MIME_TYPE.to_string(),
            temperature,
        }
    }
}

// Gemini `generateContent` wire format.

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiGenerateRequest<'a> {
    pub contents: Vec<GeminiContent<'a>>,
    pub generation_config: GeminiGenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiContent<'a> {
    pub parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiGenerationConfig<'a> {
    pub response_mime_type: &'a str,
    pub temperature: f32,
}

impl<'a> From<&'a GenerateRequest> for GeminiGenerateRequest<'a> {
    fn from(request: &'a GenerateRequest) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: &request.prompt,
                }],
            }],
            generation_config: GeminiGenerationConfig {
                response_mime_type: &request.response_mime_type,
                temperature: request.temperature,
            },
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct GeminiGenerateResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidateContent {
    #[serde(default)]
    pub parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiCandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiGenerateResponse {
    /// Text of the first candidate, parts concatenated.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiErrorEnvelope {
    pub error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiErrorBody {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}
