use common::review::{NewReview, Review};
use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::client::{ApiClient, Auth};
use crate::error::ApiError;

/// One image picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoUpload {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadedPhotos {
    photo_urls: Vec<String>,
}

#[derive(Deserialize)]
struct HelpfulCount {
    helpful: u32,
}

impl ApiClient {
    pub async fn list_reviews(&self, space_id: &str) -> Result<Vec<Review>, ApiError> {
        let request = self.request(Method::GET, &format!("/api/areas/{space_id}/reviews"));
        self.send_json(request, Auth::Optional).await
    }

    pub async fn create_review(&self, space_id: &str, review: &NewReview) -> Result<Review, ApiError> {
        let request = self.request(Method::POST, &format!("/api/areas/{space_id}/reviews")).json(review);
        let created: Review = self.send_json(request, Auth::Required).await?;
        tracing::info!("posted review {} for space {}", created.id, space_id);
        Ok(created)
    }

    /// Uploads images as multipart field `photos` and returns their public URLs.
    pub async fn upload_photos(&self, photos: Vec<PhotoUpload>) -> Result<Vec<String>, ApiError> {
        let mut form = Form::new();
        for photo in photos {
            let part = Part::bytes(photo.bytes).file_name(photo.file_name).mime_str(&photo.mime_type)?;
            form = form.part("photos", part);
        }
        let request = self.request(Method::POST, "/api/reviews/upload-photos").multipart(form);
        let uploaded: UploadedPhotos = self.send_json(request, Auth::Required).await?;
        Ok(uploaded.photo_urls)
    }

    /// Returns the review's new helpful count.
    pub async fn mark_review_helpful(&self, review_id: &str) -> Result<u32, ApiError> {
        let request = self.request(Method::PUT, &format!("/api/reviews/{review_id}/helpful"));
        let count: HelpfulCount = self.send_json(request, Auth::Optional).await?;
        Ok(count.helpful)
    }

    pub async fn delete_review(&self, review_id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/reviews/{review_id}"));
        self.send(request, Auth::Required).await?;
        Ok(())
    }
}
