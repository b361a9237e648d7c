use pretty_assertions::assert_eq;
use serde_json::json;
use soap_note_api::{
    Error,
    config::LlmConfig,
    llm::{GeminiClient, LlmClient},
    prompt::compose_prompt,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param_is_missing},
};

const GENERATE_PATH: &str = "/models/gemini-pro:generateContent";

fn create_client(server: &MockServer, api_key: Option<&str>) -> GeminiClient {
    let config = LlmConfig {
        base_url: Some(server.uri()),
        api_key: api_key.map(str::to_string),
        model: "gemini-pro".to_string(),
        timeout_secs: Some(5),
        ..LlmConfig::default()
    };
    GeminiClient::new(config).unwrap()
}

fn candidate_response(parts: &[&str], finish_reason: &str) -> serde_json::Value {
    let parts: Vec<_> = parts.iter().map(|text| json!({ "text": text })).collect();
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": finish_reason
        }],
        "usageMetadata": {
            "promptTokenCount": 20,
            "candidatesTokenCount": 10,
            "totalTokenCount": 30
        }
    })
}

#[tokio::test]
async fn test_generate_text_success() {
    let server = MockServer::start().await;
    let prompt = compose_prompt("cough for a week");

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(query_param_is_missing("key"))
        .and(body_json(json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate_response(&["S: cough"], "STOP")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server, Some("test-key"));
    let text = client.generate_text(&prompt).await.unwrap();

    assert_eq!(text, "S: cough");
}

#[tokio::test]
async fn test_generate_text_joins_parts() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(
            &["S: fever\n", "O: 38.5C\n", "A: URI\n", "P: rest"],
            "STOP",
        )))
        .mount(&server)
        .await;

    let client = create_client(&server, Some("test-key"));
    let text = client.generate_text("anything").await.unwrap();

    assert_eq!(text, "S: fever\nO: 38.5C\nA: URI\nP: rest");
}

#[tokio::test]
async fn test_generate_text_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })))
        .mount(&server)
        .await;

    let client = create_client(&server, Some("bad-key"));
    let err = client.generate_text("hello").await.unwrap_err();

    match err {
        Error::Upstream { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("API key not valid."));
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_generate_text_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let client = create_client(&server, Some("test-key"));
    let err = client.generate_text("hello").await.unwrap_err();

    assert!(matches!(err, Error::Upstream { status: 503, .. }));
}

#[tokio::test]
async fn test_generate_text_safety_block() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_response(&[], "SAFETY")))
        .mount(&server)
        .await;

    let client = create_client(&server, Some("test-key"));
    let err = client.generate_text("hello").await.unwrap_err();

    assert!(matches!(err, Error::Blocked { .. }));
}

#[tokio::test]
async fn test_generate_text_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = create_client(&server, Some("test-key"));
    let err = client.generate_text("hello").await.unwrap_err();

    assert!(matches!(err, Error::Serialization(_)));
}

#[tokio::test]
async fn test_generate_text_without_api_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server, None);
    let err = client.generate_text("hello").await.unwrap_err();

    assert!(matches!(err, Error::MissingApiKey { .. }));
}
