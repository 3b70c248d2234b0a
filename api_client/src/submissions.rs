use common::submission::{NewSubmission, Submission, SubmissionStatus};
use reqwest::Method;
use serde::Serialize;

use crate::client::{ApiClient, Auth};
use crate::error::ApiError;

#[derive(Serialize)]
struct StatusUpdate {
    status: SubmissionStatus,
}

impl ApiClient {
    /// All submissions, or only those with `status`.
    pub async fn list_submissions(&self, status: Option<SubmissionStatus>) -> Result<Vec<Submission>, ApiError> {
        let mut request = self.request(Method::GET, "/api/submissions");
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        self.send_json(request, Auth::Optional).await
    }

    pub async fn get_submission(&self, id: &str) -> Result<Submission, ApiError> {
        let request = self.request(Method::GET, &format!("/api/submissions/{id}"));
        self.send_json(request, Auth::Optional).await
    }

    pub async fn create_submission(&self, submission: &NewSubmission) -> Result<Submission, ApiError> {
        let request = self.request(Method::POST, "/api/submissions").json(submission);
        let created: Submission = self.send_json(request, Auth::Required).await?;
        tracing::info!("created submission {} ({})", created.id, created.name);
        Ok(created)
    }

    pub async fn update_submission_status(&self, id: &str, status: SubmissionStatus) -> Result<Submission, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/api/submissions/{id}/status"))
            .json(&StatusUpdate { status });
        let updated: Submission = self.send_json(request, Auth::Required).await?;
        tracing::info!("submission {} is now {}", id, updated.status);
        Ok(updated)
    }
}
