//! Domain model shared by the API client and the frontend.

extern crate serde;

pub mod app_const;
pub mod facets;
pub mod study_space;
pub mod building;
pub mod catalog;
pub mod filter_state;
pub mod filter;
pub mod review;
pub mod rating;
pub mod sort;
pub mod aggregation_pass;
pub mod favorite;
pub mod submission;
pub mod photos;

mod serde_util;

#[cfg(test)]
mod test_support;
