//! Rating aggregation for whatever set of spaces a view is showing.

use std::cell::Cell;
use std::rc::Rc;

use api_client::ReviewSource;
use common::aggregation_pass::PassTracker;
use common::app_const::REVIEW_FETCH_TIMEOUT_MS;
use common::rating::{Ratings, aggregate_ratings};
use common::study_space::SpaceId;
use dioxus::prelude::*;

use crate::api::services::use_services;
use crate::api::timeout::with_timeout;
use crate::data_definitions::notifications::use_notifications;

#[derive(Clone, Copy, PartialEq)]
pub struct SpaceRatings {
    pub ratings: ReadSignal<Ratings>,
    pub loading: ReadSignal<bool>,
}

/// Re-aggregates from fresh fetches whenever `ids` changes. Results of a pass
/// started for an older id list are dropped. Failed or slow fetches read as zero reviews
/// and raise one notification per pass.
pub fn use_space_ratings(ids: Memo<Vec<SpaceId>>) -> SpaceRatings {
    let services = use_services();
    let notifications = use_notifications();
    let mut tracker = use_signal(PassTracker::new);
    let mut ratings = use_signal(Ratings::new);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        let ids = ids();
        let ticket = tracker.write().begin(&ids);
        if ids.is_empty() {
            ratings.set(Ratings::new());
            loading.set(false);
            return;
        }
        loading.set(true);
        let client = services.client.clone();
        spawn(async move {
            let failures = Rc::new(Cell::new(0_usize));
            let result = aggregate_ratings(ticket.input().to_vec(), |id| {
                let client = client.clone();
                let failures = failures.clone();
                async move {
                    let fetched = with_timeout(REVIEW_FETCH_TIMEOUT_MS, client.reviews(id)).await;
                    if fetched.is_err() {
                        failures.set(failures.get() + 1);
                    }
                    fetched
                }
            })
            .await;

            if !tracker.peek().accepts(&ticket) {
                return;
            }
            ratings.set(result);
            loading.set(false);
            if failures.get() > 0 {
                notifications.error(format!("Could not load ratings for {} space(s)", failures.get()));
            }
        });
    });

    SpaceRatings { ratings: ratings.into(), loading: loading.into() }
}
