use std::env;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Kept low so coordinates stay parseable across calls.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

const API_KEY_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Settings for talking to the generative API.
///
/// Built once at startup and handed to the client; nothing downstream reads the
/// process environment.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub temperature: f32,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl ExplorerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::default().with_api_key(api_key)
    }

    /// Reads the credential from `GEMINI_API_KEY`, then `API_KEY`.
    pub fn from_env() -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = if api_key.trim().is_empty() {
            None
        } else {
            Some(api_key)
        };
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_counts_as_missing() {
        assert!(!ExplorerConfig::default().with_api_key("   ").is_configured());
        assert!(ExplorerConfig::new("abc").is_configured());
    }

    #[test]
    fn defaults_favor_determinism() {
        let config = ExplorerConfig::default();
        assert!(config.temperature < 0.5);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
    }
}
