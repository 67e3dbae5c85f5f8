//! Integration tests for the `/chat` and `/generate-proposal` endpoints

use proposal_client::{ClientError, HttpProposalBackend, ProposalBackend};
use widget_core::{ChatRequest, ProposalRequest, UiDirective, UserDetails, WidgetConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> HttpProposalBackend {
    HttpProposalBackend::new(&WidgetConfig::with_api_base(server.uri()))
}

fn request(stage: &str, input: &str) -> ChatRequest {
    ChatRequest {
        stage: stage.to_string(),
        user_details: UserDetails::default(),
        user_input: input.to_string(),
    }
}

#[tokio::test]
async fn test_chat_exchange_round_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(serde_json::json!({
            "stage": "get_name",
            "user_details": {"stage_history": []},
            "user_input": "new proposal"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "next_stage": "get_email",
            "user_details": {"stage_history": ["get_name"], "name": "Ada"},
            "bot_message": "Nice to meet you, **Ada**!",
            "ui_elements": {"type": "buttons", "options": ["Continue"]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let reply = backend
        .send_chat(&request("get_name", "new proposal"))
        .await
        .expect("chat exchange");

    assert_eq!(reply.next_stage, "get_email");
    assert_eq!(reply.user_details.get_str("name"), Some("Ada"));
    assert_eq!(
        reply.ui_elements,
        Some(UiDirective::Buttons {
            options: vec!["Continue".into()]
        })
    );
}

#[tokio::test]
async fn test_chat_server_error_is_terminal() {
    let mock_server = MockServer::start().await;

    // A 500 must surface as an error after exactly one attempt.
    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend.send_chat(&request("get_name", "hello")).await;

    assert!(matches!(
        result,
        Err(ClientError::UnexpectedStatus { status, .. }) if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn test_chat_malformed_reply_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend.send_chat(&request("get_name", "hello")).await;

    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn test_generate_proposal_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-proposal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let details: UserDetails =
        serde_json::from_str(r#"{"stage_history":[],"category":"web"}"#).unwrap();
    let backend = backend_for(&mock_server);
    backend
        .generate_proposal(&ProposalRequest::from_details(&details))
        .await
        .expect("generation trigger");
}

#[tokio::test]
async fn test_generate_proposal_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/generate-proposal"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend
        .generate_proposal(&ProposalRequest::from_details(&UserDetails::default()))
        .await;

    assert!(result.is_err());
}
