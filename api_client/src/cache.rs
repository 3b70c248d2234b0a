use std::cell::RefCell;
use std::collections::BTreeMap;

use async_trait::async_trait;
use common::review::Review;
use common::study_space::SpaceId;

use crate::error::ApiError;
use crate::review_source::ReviewSource;

/// Memoizes successful review fetches of an inner source. Failures are not
/// cached, so the next request retries.
#[derive(Debug, Default)]
pub struct CachedReviewSource<S> {
    inner: S,
    cache: RefCell<BTreeMap<SpaceId, Vec<Review>>>,
}

impl<S> CachedReviewSource<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, cache: RefCell::new(BTreeMap::new()) }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Drops the cached reviews of one space, e.g. after posting a review to it.
    pub fn invalidate(&self, space: SpaceId) {
        self.cache.borrow_mut().remove(&space);
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[async_trait(?Send)]
impl<S: ReviewSource> ReviewSource for CachedReviewSource<S> {
    async fn reviews(&self, space: SpaceId) -> Result<Vec<Review>, ApiError> {
        let hit = self.cache.borrow().get(&space).cloned();
        if let Some(reviews) = hit {
            tracing::debug!("review cache hit for space {space}");
            return Ok(reviews);
        }
        let reviews = self.inner.reviews(space).await?;
        self.cache.borrow_mut().insert(space, reviews.clone());
        Ok(reviews)
    }
}
