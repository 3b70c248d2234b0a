//! Typed client for the study spaces REST API.

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod review_source;
pub mod reviews;
pub mod submissions;

pub use auth::{Anonymous, StaticToken, TokenProvider};
pub use cache::CachedReviewSource;
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use review_source::{ReviewSource, fetch_ratings};
pub use reviews::PhotoUpload;
