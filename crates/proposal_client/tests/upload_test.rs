//! Integration tests for the resume upload endpoint

use proposal_client::{HttpProposalBackend, ProposalBackend};
use widget_core::WidgetConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_upload_multipart_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpProposalBackend::new(&WidgetConfig::with_api_base(mock_server.uri()));
    backend
        .upload_resume("/upload-resume", "ada@lovelace.dev", "cv.pdf", b"%PDF-1.4".to_vec())
        .await
        .expect("upload");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains(r#"name="resume""#), "missing resume part: {body}");
    assert!(body.contains(r#"filename="cv.pdf""#), "missing filename: {body}");
    assert!(body.contains(r#"name="email""#), "missing email part: {body}");
    assert!(body.contains("ada@lovelace.dev"));
}

#[tokio::test]
async fn test_upload_failure_is_terminal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload-resume"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpProposalBackend::new(&WidgetConfig::with_api_base(mock_server.uri()));
    let result = backend
        .upload_resume("/upload-resume", "ada@lovelace.dev", "cv.pdf", vec![1, 2, 3])
        .await;

    assert!(result.is_err());
}
