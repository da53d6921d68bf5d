use std::sync::Arc;

use wordmap::presentation::{render_svg, PlotLayout};
use wordmap::{
    ErrorCategory, ExplorerConfig, MockLLMClient, RelatedWord, TransportError, ViewState,
    WordMapError, WordRelationClient,
};

const TECHNOLOGY_REPLY: &str =
    r#"[{"word":"technology","x":0,"y":0},{"word":"innovation","x":10,"y":5}]"#;

fn configured(mock: &MockLLMClient) -> WordRelationClient<MockLLMClient> {
    WordRelationClient::new(Arc::new(mock.clone()), ExplorerConfig::new("test-key"))
}

#[test]
fn technology_end_to_end() {
    let mock = MockLLMClient::default();
    mock.push_text(format!("```json\n{TECHNOLOGY_REPLY}\n```"));

    let words = configured(&mock).fetch_related_words("technology").unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words.first(), Some(&RelatedWord::new("technology", 0.0, 0.0)));

    let layout = PlotLayout::new(&words, "technology");
    assert_eq!(layout.target.len(), 1);
    assert_eq!(layout.target[0].word, "technology");
    assert_eq!(layout.related.len(), 1);

    let svg = render_svg(&layout, 800);
    assert!(svg.contains("<g class=\"target\">"));
    assert!(svg.contains("innovation"));
}

#[test]
fn missing_credential_skips_the_network() {
    let mock = MockLLMClient::default();
    mock.push_text(TECHNOLOGY_REPLY);
    let client = WordRelationClient::new(Arc::new(mock.clone()), ExplorerConfig::default());

    assert!(!client.is_configured());
    let err = client.fetch_related_words("technology").unwrap_err();
    assert_eq!(err, WordMapError::ClientNotConfigured);
    assert_eq!(err.category(), ErrorCategory::NotConfigured);
    assert_eq!(mock.call_count(), 0);

    let view = ViewState::from_outcome(Err(err));
    assert!(!view.accepts_queries());
}

#[test]
fn invalid_key_is_reported_distinctly() {
    let auth_mock = MockLLMClient::default();
    auth_mock.push_error(TransportError::Status {
        status: 400,
        message: "API key not valid. Please pass a valid API key. (INVALID_ARGUMENT)".into(),
    });
    let auth_err = configured(&auth_mock)
        .fetch_related_words("technology")
        .unwrap_err();
    assert!(matches!(auth_err, WordMapError::AuthenticationFailed { .. }));

    let generic_mock = MockLLMClient::default();
    generic_mock.push_error(TransportError::Network("connection reset by peer".into()));
    let generic_err = configured(&generic_mock)
        .fetch_related_words("technology")
        .unwrap_err();
    assert!(matches!(generic_err, WordMapError::TransportFailure { .. }));

    assert_eq!(auth_err.category(), ErrorCategory::Transport);
    assert_eq!(generic_err.category(), ErrorCategory::Transport);
    assert_ne!(auth_err.user_message(), generic_err.user_message());
    assert!(auth_err.user_message().contains("API key is not valid"));
}

#[test]
fn client_recovers_after_a_failure() {
    let mock = MockLLMClient::default();
    mock.push_text("hello world");
    mock.push_text(TECHNOLOGY_REPLY);
    let client = configured(&mock);

    let err = client.fetch_related_words("technology").unwrap_err();
    assert!(matches!(err, WordMapError::MalformedResponse { .. }));
    let words = client.fetch_related_words("technology").unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(mock.call_count(), 2);
}

#[test]
fn short_set_is_still_returned() {
    let mock = MockLLMClient::default();
    let words: Vec<_> = (0..12)
        .map(|i| RelatedWord::new(format!("w{i}"), i as f64, -(i as f64)))
        .collect();
    mock.push_text(serde_json::to_string(&words).unwrap());

    let set = configured(&mock).fetch_related_words("w0").unwrap();
    assert_eq!(set.as_slice(), words.as_slice());
}
