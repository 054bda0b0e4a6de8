use prophecy::core::catalog;
use prophecy::reading::{ReadingError, ReadingService, RemoteReadingService};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn service_for(server: &MockServer) -> RemoteReadingService {
    RemoteReadingService::new(Some("test-key".to_string()), server.uri())
}

async fn fetch(service: &RemoteReadingService) -> Result<prophecy::reading::ReadingResult, ReadingError> {
    service
        .fetch_reading(catalog::find(1).unwrap(), catalog::find(4).unwrap())
        .await
}

// ============================================================================
// Remote Reading Service Tests
// ============================================================================

#[tokio::test]
async fn test_remote_successful_reading() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reading"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(serde_json::json!({
            "card1": { "id": 1, "name": "Morning Star" },
            "card2": { "id": 4 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "card1Image": "https://cdn.example/1.png",
            "card2Image": "https://cdn.example/4.png"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = fetch(&service_for(&mock_server)).await.unwrap();
    assert_eq!(result.card1_image, "https://cdn.example/1.png");
    assert_eq!(result.card2_image, "https://cdn.example/4.png");
}

#[tokio::test]
async fn test_remote_server_error_is_api_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reading"))
        .respond_with(ResponseTemplate::new(500).set_body_string("stars misaligned"))
        .mount(&mock_server)
        .await;

    let err = fetch(&service_for(&mock_server)).await.unwrap_err();
    match err {
        ReadingError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "stars misaligned");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_remote_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reading"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let err = fetch(&service_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, ReadingError::Parse(_)));
}

#[tokio::test]
async fn test_remote_missing_image_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reading"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "card1Image": "https://cdn.example/1.png",
            "card2Image": ""
        })))
        .mount(&mock_server)
        .await;

    let err = fetch(&service_for(&mock_server)).await.unwrap_err();
    assert!(matches!(err, ReadingError::Parse(_)));
}

#[tokio::test]
async fn test_remote_unreachable_is_network_error() {
    // Nothing listens on the discard port.
    let service = RemoteReadingService::new(Some("k".to_string()), "http://127.0.0.1:9".to_string());
    let err = fetch(&service).await.unwrap_err();
    assert!(matches!(err, ReadingError::Network(_)));
}
