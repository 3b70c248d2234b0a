//! Limits and timings shared across crates.

/// Most photos accepted with a single review or submission.
pub const MAX_PHOTOS_PER_UPLOAD: usize = 9;

/// Per-space review fetch budget when aggregating ratings.
pub const REVIEW_FETCH_TIMEOUT_MS: u32 = 10_000;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
