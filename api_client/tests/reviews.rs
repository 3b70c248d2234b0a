//! Review endpoints against a mock API server

use std::sync::Arc;

use api_client::{Anonymous, ApiClient, ApiConfig, ApiError, PhotoUpload, StaticToken};
use common::review::NewReview;
use wiremock::matchers::{body_json, body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signed_in(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()), Arc::new(StaticToken::new("tok_123")))
}

#[tokio::test]
async fn test_list_reviews_parses_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/areas/3/reviews"))
        .and(header("authorization", "Bearer tok_123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "space_id": "3", "rating": 4, "comment": "Bright", "created_at": "2025-01-02T10:00:00Z",
             "author_name": "Sam"},
            {"id": "2", "space_id": 3, "rating": 5, "content": "Quiet", "created_at": "2025-01-03T10:00:00Z",
             "photos": ["/uploads/a.jpg"]}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let reviews = signed_in(&mock_server).list_reviews("3").await.unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].display_author(), "Sam");
    assert_eq!(reviews[1].id, "2");
    assert_eq!(reviews[1].text(), Some("Quiet"));
    assert_eq!(reviews[1].photos().len(), 1);
}

#[tokio::test]
async fn test_anonymous_read_is_allowed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/areas/8/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::anonymous(ApiConfig::new(mock_server.uri()));
    assert!(client.list_reviews("8").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_body_becomes_status_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/areas/99/reviews"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({"error": "Space not found"})))
        .mount(&mock_server)
        .await;

    let err = signed_in(&mock_server).list_reviews("99").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Space not found");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/areas/1/reviews"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let err = signed_in(&mock_server).list_reviews("1").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_create_review_posts_body_with_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/areas/5/reviews"))
        .and(header("authorization", "Bearer tok_123"))
        .and(body_json(serde_json::json!({"rating": 4, "comment": "Great outlets"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": 40, "space_id": "5", "rating": 4, "comment": "Great outlets", "created_at": "2025-04-01T00:00:00Z"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let review = NewReview::new(4, "  Great outlets ", vec![]);
    let created = signed_in(&mock_server).create_review("5", &review).await.unwrap();
    assert_eq!(created.id, "40");
}

#[tokio::test]
async fn test_create_review_without_session_never_sends() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/areas/5/reviews"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(ApiConfig::new(mock_server.uri()), Arc::new(Anonymous));
    let err = client.create_review("5", &NewReview::new(5, "", vec![])).await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated));
}

#[tokio::test]
async fn test_upload_photos_sends_multipart_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/reviews/upload-photos"))
        .and(body_string_contains("name=\"photos\""))
        .and(body_string_contains("filename=\"desk.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "photoUrls": ["https://cdn.example.edu/desk.png"]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let upload = PhotoUpload {
        file_name: "desk.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: b"not-really-a-png".to_vec(),
    };
    let urls = signed_in(&mock_server).upload_photos(vec![upload]).await.unwrap();
    assert_eq!(urls, vec!["https://cdn.example.edu/desk.png".to_string()]);
}

#[tokio::test]
async fn test_helpful_and_delete() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/reviews/40/helpful"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"helpful": 3})))
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/reviews/40"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = signed_in(&mock_server);
    assert_eq!(client.mark_review_helpful("40").await.unwrap(), 3);
    client.delete_review("40").await.unwrap();
}
