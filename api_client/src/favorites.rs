use common::favorite::{Favorite, NewFavorite};
use reqwest::Method;

use crate::client::{ApiClient, Auth};
use crate::error::ApiError;

impl ApiClient {
    pub async fn list_favorites(&self, user_id: &str) -> Result<Vec<Favorite>, ApiError> {
        let request = self.request(Method::GET, &format!("/api/users/{user_id}/favorites"));
        self.send_json(request, Auth::Required).await
    }

    pub async fn add_favorite(&self, user_id: &str, space_id: &str) -> Result<Favorite, ApiError> {
        let body = NewFavorite { space_id: space_id.to_string() };
        let request = self.request(Method::POST, &format!("/api/users/{user_id}/favorites")).json(&body);
        self.send_json(request, Auth::Required).await
    }

    pub async fn remove_favorite(&self, user_id: &str, space_id: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/api/users/{user_id}/favorites/{space_id}"));
        self.send(request, Auth::Required).await?;
        Ok(())
    }

    /// Any failure reads as "not a favorite".
    pub async fn is_favorite(&self, user_id: &str, space_id: &str) -> bool {
        match self.list_favorites(user_id).await {
            Ok(favorites) => favorites.iter().any(|f| f.resolved_space_id() == Some(space_id)),
            Err(e) => {
                tracing::debug!("favorite check for space {space_id} failed: {e}");
                false
            }
        }
    }
}
