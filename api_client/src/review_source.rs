use async_trait::async_trait;
use common::rating::{Ratings, aggregate_ratings};
use common::review::Review;
use common::study_space::SpaceId;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Where the rating aggregator gets a space's reviews from.
#[async_trait(?Send)]
pub trait ReviewSource {
    async fn reviews(&self, space: SpaceId) -> Result<Vec<Review>, ApiError>;
}

#[async_trait(?Send)]
impl ReviewSource for ApiClient {
    async fn reviews(&self, space: SpaceId) -> Result<Vec<Review>, ApiError> {
        self.list_reviews(&space.to_string()).await
    }
}

/// Aggregates ratings for `ids`, one concurrent fetch per distinct id.
/// Failed fetches read as zero reviews.
pub async fn fetch_ratings<S>(source: &S, ids: impl IntoIterator<Item = SpaceId>) -> Ratings
where
    S: ReviewSource + ?Sized,
{
    aggregate_ratings(ids, |id| source.reviews(id)).await
}
