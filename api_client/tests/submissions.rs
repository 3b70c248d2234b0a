//! Submission endpoints against a mock API server

use std::sync::Arc;

use api_client::{ApiClient, ApiConfig, StaticToken};
use common::submission::{SubmissionDraft, SubmissionStatus};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn signed_in(server: &MockServer) -> ApiClient {
    ApiClient::new(ApiConfig::new(server.uri()), Arc::new(StaticToken::new("tok_admin")))
}

fn submission_json(id: u32, status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id, "user_id": "user_1", "name": "Window Nook", "building": "Hatcher",
        "campus": "central", "status": status, "created_at": "2025-03-03T00:00:00Z"
    })
}

#[tokio::test]
async fn test_list_by_status_uses_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/submissions"))
        .and(query_param("status", "pending"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([submission_json(1, "pending")])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pending = signed_in(&mock_server).list_submissions(Some(SubmissionStatus::Pending)).await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].status, SubmissionStatus::Pending);
}

#[tokio::test]
async fn test_list_all_and_get_one() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/submissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            submission_json(1, "pending"),
            submission_json(2, "rejected")
        ])))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/submissions/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(2, "rejected")))
        .mount(&mock_server)
        .await;

    let client = signed_in(&mock_server);
    assert_eq!(client.list_submissions(None).await.unwrap().len(), 2);
    assert_eq!(client.get_submission("2").await.unwrap().status, SubmissionStatus::Rejected);
}

#[tokio::test]
async fn test_create_omits_empty_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/submissions"))
        .and(body_json(serde_json::json!({
            "user_id": "user_1", "name": "Window Nook", "building": "Hatcher", "campus": "central",
            "noise_level": "quiet"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(submission_json(5, "pending")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let draft = SubmissionDraft {
        name: "Window Nook".to_string(),
        building: "Hatcher".to_string(),
        campus: "central".to_string(),
        noise_level: "quiet".to_string(),
        ..SubmissionDraft::default()
    };
    let request = draft.into_request("user_1", vec![]).unwrap();
    let created = signed_in(&mock_server).create_submission(&request).await.unwrap();
    assert_eq!(created.id, "5");
}

#[tokio::test]
async fn test_update_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/submissions/5/status"))
        .and(body_json(serde_json::json!({"status": "approved"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(submission_json(5, "approved")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let updated = signed_in(&mock_server).update_submission_status("5", SubmissionStatus::Approved).await.unwrap();
    assert_eq!(updated.status, SubmissionStatus::Approved);
}
