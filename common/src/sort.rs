//! Sort engine: orders a filtered list of spaces by aggregated ratings.

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rating::{RatingRecord, Ratings, rating_of};
use crate::study_space::StudySpace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    Default,
    RatingDesc,
    RatingAsc,
    ReviewsDesc,
    ReviewsAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Default,
        SortKey::RatingDesc,
        SortKey::RatingAsc,
        SortKey::ReviewsDesc,
        SortKey::ReviewsAsc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Default => "default",
            SortKey::RatingDesc => "rating-desc",
            SortKey::RatingAsc => "rating-asc",
            SortKey::ReviewsDesc => "reviews-desc",
            SortKey::ReviewsAsc => "reviews-asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Default => "Default",
            SortKey::RatingDesc => "Rating: High to Low",
            SortKey::RatingAsc => "Rating: Low to High",
            SortKey::ReviewsDesc => "Reviews: Most to Least",
            SortKey::ReviewsAsc => "Reviews: Least to Most",
        }
    }

    fn compare(&self, a: &RatingRecord, b: &RatingRecord) -> Ordering {
        match self {
            SortKey::Default => Ordering::Equal,
            SortKey::RatingDesc => b.average_rating.total_cmp(&a.average_rating),
            SortKey::RatingAsc => a.average_rating.total_cmp(&b.average_rating),
            SortKey::ReviewsDesc => b.review_count.cmp(&a.review_count),
            SortKey::ReviewsAsc => a.review_count.cmp(&b.review_count),
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {s:?}"))
    }
}

/// Returns a newly ordered list; the input slice and `ratings` are untouched.
/// Ties keep their input order. Spaces without a ratings entry sort as `{0, 0}`.
pub fn sort_spaces<'a>(spaces: &[&'a StudySpace], ratings: &Ratings, key: SortKey) -> Vec<&'a StudySpace> {
    let mut sorted = spaces.to_vec();
    if key != SortKey::Default {
        sorted.sort_by(|a, b| key.compare(&rating_of(ratings, a.id), &rating_of(ratings, b.id)));
    }
    sorted
}
