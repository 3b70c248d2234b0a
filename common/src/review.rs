//! Review models exchanged with the review service.

use serde::{Deserialize, Serialize};

use crate::app_const::{MAX_PHOTOS_PER_UPLOAD, MAX_RATING, MIN_RATING};
use crate::serde_util::{opt_string_or_number, string_or_number};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Review {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub space_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub rating: u8,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub photos: Option<Vec<String>>,
    #[serde(default)]
    pub helpful: Option<u32>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub profiles: Option<ReviewProfile>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewProfile {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Review {
    pub fn display_author(&self) -> &str {
        non_blank(&self.author_name)
            .or_else(|| self.profiles.as_ref().and_then(|p| non_blank(&p.full_name)))
            .or_else(|| non_blank(&self.author))
            .unwrap_or("Anonymous")
    }

    pub fn text(&self) -> Option<&str> {
        non_blank(&self.comment).or_else(|| non_blank(&self.content))
    }

    pub fn photos(&self) -> &[String] {
        self.photos.as_deref().unwrap_or_default()
    }

    /// Date part of `created_at` (`YYYY-MM-DD`), or the raw value.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewReview {
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewValidationError {
    #[error("Rating must be between {} and {} stars", MIN_RATING, MAX_RATING)]
    RatingOutOfRange(u8),
    #[error("You can upload up to {} images", MAX_PHOTOS_PER_UPLOAD)]
    TooManyPhotos(usize),
}

impl NewReview {
    pub fn new(rating: u8, comment: &str, photos: Vec<String>) -> Self {
        let comment = comment.trim();
        Self {
            rating,
            comment: (!comment.is_empty()).then(|| comment.to_string()),
            photos: (!photos.is_empty()).then_some(photos),
        }
    }

    pub fn validate(&self) -> Result<(), ReviewValidationError> {
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(ReviewValidationError::RatingOutOfRange(self.rating));
        }
        let photo_count = self.photos.as_ref().map(Vec::len).unwrap_or(0);
        if photo_count > MAX_PHOTOS_PER_UPLOAD {
            return Err(ReviewValidationError::TooManyPhotos(photo_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_api_payload_with_numeric_ids_and_nulls() {
        let json = r#"[{
            "id": 17, "space_id": 3, "user_id": "user_abc", "author": "jdoe",
            "author_name": null, "rating": 4, "comment": "Good light",
            "photos": null, "created_at": "2025-03-01T12:00:00Z",
            "profiles": {"full_name": "Jane Doe"}
        }]"#;
        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        let review = &reviews[0];
        assert_eq!(review.id, "17");
        assert_eq!(review.space_id.as_deref(), Some("3"));
        assert_eq!(review.display_author(), "Jane Doe");
        assert_eq!(review.text(), Some("Good light"));
        assert!(review.photos().is_empty());
        assert_eq!(review.created_date(), "2025-03-01");
    }

    #[test]
    fn author_and_text_fallbacks() {
        let mut review = Review { rating: 5, ..Review::default() };
        assert_eq!(review.display_author(), "Anonymous");
        review.author = Some("jdoe".to_string());
        assert_eq!(review.display_author(), "jdoe");
        review.author_name = Some("  ".to_string());
        assert_eq!(review.display_author(), "jdoe");

        assert_eq!(review.text(), None);
        review.content = Some("legacy body".to_string());
        assert_eq!(review.text(), Some("legacy body"));
    }

    #[test]
    fn new_review_validation() {
        assert!(NewReview::new(5, "", vec![]).validate().is_ok());
        assert_eq!(NewReview::new(0, "", vec![]).validate(), Err(ReviewValidationError::RatingOutOfRange(0)));
        assert_eq!(NewReview::new(6, "", vec![]).validate(), Err(ReviewValidationError::RatingOutOfRange(6)));
        let photos = (0..10).map(|i| format!("p{i}.png")).collect();
        assert_eq!(NewReview::new(3, "", photos).validate(), Err(ReviewValidationError::TooManyPhotos(10)));
    }

    #[test]
    fn new_review_omits_empty_fields() {
        let body = serde_json::to_value(NewReview::new(4, "   ", vec![])).unwrap();
        assert_eq!(body, serde_json::json!({"rating": 4}));
    }
}
