//! Rating aggregation: fans out one review fetch per space and reduces each
//! review list to an average and a count.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;
use std::future::Future;

use futures::future::join_all;
use serde::{Deserialize, Serialize};

use crate::review::Review;
use crate::study_space::SpaceId;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub average_rating: f64,
    pub review_count: u32,
}

/// Ratings keyed by space. A missing entry reads as [`RatingRecord::EMPTY`].
pub type Ratings = BTreeMap<SpaceId, RatingRecord>;

impl RatingRecord {
    pub const EMPTY: RatingRecord = RatingRecord { average_rating: 0.0, review_count: 0 };

    pub fn from_reviews(reviews: &[Review]) -> Self {
        let review_count = reviews.len() as u32;
        if review_count == 0 {
            return Self::EMPTY;
        }
        let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
        Self { average_rating: sum as f64 / review_count as f64, review_count }
    }

    pub fn has_reviews(&self) -> bool {
        self.review_count > 0
    }

    /// The average to show, or `None` for a space nobody has reviewed yet.
    pub fn display_average(&self) -> Option<f64> {
        self.has_reviews().then_some(self.average_rating)
    }
}

pub fn rating_of(ratings: &Ratings, id: SpaceId) -> RatingRecord {
    ratings.get(&id).copied().unwrap_or(RatingRecord::EMPTY)
}

/// Fetches reviews for every id concurrently and waits for all of them to
/// settle. A failed fetch degrades that id to [`RatingRecord::EMPTY`] and
/// leaves the others untouched, so this never fails. Duplicate ids are
/// fetched once; the result holds exactly one entry per distinct id.
pub async fn aggregate_ratings<I, F, Fut, E>(ids: I, fetch: F) -> Ratings
where
    I: IntoIterator<Item = SpaceId>,
    F: Fn(SpaceId) -> Fut,
    Fut: Future<Output = Result<Vec<Review>, E>>,
    E: Display,
{
    let mut seen = BTreeSet::new();
    let pending = ids
        .into_iter()
        .filter(|id| seen.insert(*id))
        .map(|id| {
            let request = fetch(id);
            async move {
                let record = match request.await {
                    Ok(reviews) => RatingRecord::from_reviews(&reviews),
                    Err(e) => {
                        tracing::warn!("failed to fetch reviews for space {id}: {e}");
                        RatingRecord::EMPTY
                    }
                };
                (id, record)
            }
        })
        .collect::<Vec<_>>();
    join_all(pending).await.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::review;
    use futures::channel::oneshot;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn reviews(ratings: &[u8]) -> Vec<Review> {
        ratings.iter().map(|r| review(*r)).collect()
    }

    #[test]
    fn reduces_to_mean_and_count() {
        let record = RatingRecord::from_reviews(&reviews(&[4, 5]));
        assert_eq!(record, RatingRecord { average_rating: 4.5, review_count: 2 });
        assert_eq!(record.display_average(), Some(4.5));

        let none = RatingRecord::from_reviews(&[]);
        assert_eq!(none, RatingRecord::EMPTY);
        assert_eq!(none.display_average(), None);
    }

    #[tokio::test]
    async fn isolates_failures() {
        let ratings = aggregate_ratings([SpaceId(1), SpaceId(2), SpaceId(3)], |id| async move {
            match id.0 {
                1 => Ok(reviews(&[4, 5])),
                2 => Err("connection reset"),
                _ => Ok(vec![]),
            }
        })
        .await;

        let expected = Ratings::from([
            (SpaceId(1), RatingRecord { average_rating: 4.5, review_count: 2 }),
            (SpaceId(2), RatingRecord::EMPTY),
            (SpaceId(3), RatingRecord::EMPTY),
        ]);
        assert_eq!(ratings, expected);
    }

    #[tokio::test]
    async fn all_failures_still_resolve() {
        let ids = (1..=5).map(SpaceId).collect::<Vec<_>>();
        let ratings = aggregate_ratings(ids.clone(), |_| async { Err::<Vec<Review>, _>("HTTP 500") }).await;
        assert_eq!(ratings.keys().copied().collect::<Vec<_>>(), ids);
        assert!(ratings.values().all(|r| *r == RatingRecord::EMPTY));
    }

    #[tokio::test]
    async fn duplicate_ids_are_fetched_once() {
        let calls = AtomicUsize::new(0);
        let ratings = aggregate_ratings([SpaceId(7), SpaceId(7), SpaceId(8)], |_| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, String>(reviews(&[3])) }
        })
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(ratings.len(), 2);
    }

    #[tokio::test]
    async fn fetches_run_concurrently() {
        // Space 1 only completes once space 2 has started; a serial fan-out
        // would never get there.
        let (tx, rx) = oneshot::channel::<()>();
        let tx = Mutex::new(Some(tx));
        let rx = Mutex::new(Some(rx));
        let ratings = aggregate_ratings([SpaceId(1), SpaceId(2)], |id| {
            let waiter = if id.0 == 1 { rx.lock().unwrap().take() } else { None };
            if id.0 == 2 {
                if let Some(tx) = tx.lock().unwrap().take() {
                    let _ = tx.send(());
                }
            }
            async move {
                if let Some(waiter) = waiter {
                    waiter.await.map_err(|e| e.to_string())?;
                }
                Ok::<_, String>(reviews(&[5]))
            }
        })
        .await;
        assert_eq!(rating_of(&ratings, SpaceId(1)).review_count, 1);
        assert_eq!(rating_of(&ratings, SpaceId(2)).review_count, 1);
    }

    #[test]
    fn missing_entries_read_as_empty() {
        assert_eq!(rating_of(&Ratings::new(), SpaceId(42)), RatingRecord::EMPTY);
    }
}
