//! Moderation queue for user submissions.

use common::photos::{filter_supported_images, normalize_image_path};
use common::submission::{Submission, SubmissionStatus};
use dioxus::{logger::tracing, prelude::*};

use crate::api::services::use_services;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::notifications::use_notifications;

const ALL_STATUSES: &str = "all";

#[component]
pub fn AdminSubmissionsPage() -> Element {
    let services = use_services();
    let mut status_filter = use_signal(|| Some(SubmissionStatus::Pending));

    let mut submissions = use_resource(move || {
        let client = services.client.clone();
        let status = status_filter();
        async move { client.list_submissions(status).await.map_err(|e| e.to_string()) }
    });
    let on_changed = Callback::new(move |_: ()| submissions.restart());

    let selected = status_filter().map(|s| s.as_str()).unwrap_or(ALL_STATUSES);
    let listing = match &*submissions.read() {
        None => rsx! { LoadingIndicator { label: "Loading submissions..." } },
        Some(Err(e)) => rsx! { ComponentErrorDisplay { error_txt: e.clone() } },
        Some(Ok(list)) if list.is_empty() => rsx! { div { style: "color: #6B7280;", "Nothing to review." } },
        Some(Ok(list)) => rsx! {
            for submission in list.iter().cloned() {
                SubmissionCard { key: "{submission.id}", submission, on_changed }
            }
        },
    };

    rsx! {
        Title { "Study Spaces - Submissions" }
        div {
            id: "x-admin-submissions-page",
            style: "display: flex; flex-direction: column; gap: 18px; padding: 28px 36px; max-width: 1000px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h1 { style: "font-size: 32px; font-weight: 500; color: #00274C; margin: 0;", "Submissions" }
                div { style: "flex-grow: 1;" }
                label { r#for: "x-status-filter", style: "font-size: 14px; color: #4B5563;", "Show" }
                select {
                    id: "x-status-filter",
                    style: "font-size: 14px; padding: 6px 8px; border-radius: 6px; border: 1px solid #D1D5DB;",
                    onchange: move |e| {
                        let value = e.value();
                        if value == ALL_STATUSES {
                            status_filter.set(None);
                        } else {
                            match value.parse::<SubmissionStatus>() {
                                Ok(status) => status_filter.set(Some(status)),
                                Err(err) => tracing::warn!("ignoring status filter: {err}"),
                            }
                        }
                    },
                    option { value: ALL_STATUSES, selected: selected == ALL_STATUSES, "All" }
                    for status in SubmissionStatus::ALL {
                        option { key: "{status}", value: "{status}", selected: selected == status.as_str(), "{status.label()}" }
                    }
                }
            }
            {listing}
        }
    }
}

fn status_colors(status: SubmissionStatus) -> (&'static str, &'static str) {
    match status {
        SubmissionStatus::Pending => ("#FEF3C7", "#92400E"),
        SubmissionStatus::Approved => ("#D1FAE5", "#065F46"),
        SubmissionStatus::Rejected => ("#FEE2E2", "#991B1B"),
    }
}

#[component]
fn SubmissionCard(submission: Submission, on_changed: Callback<()>) -> Element {
    let services = use_services();
    let notifications = use_notifications();
    let (badge_bg, badge_fg) = status_colors(submission.status);
    let photos: Vec<String> = filter_supported_images(submission.photos.as_deref().unwrap_or_default())
        .iter()
        .map(|p| normalize_image_path(p))
        .collect();
    let amenities = submission.amenities.clone().unwrap_or_default().join(", ");
    let submitted_by = submission.submitter_name.clone().or_else(|| submission.submitter_email.clone()).unwrap_or_else(|| submission.user_id.clone());
    let details = [
        ("Noise", submission.noise_level.clone().unwrap_or_default()),
        ("Privacy", submission.privacy_level.clone().unwrap_or_default()),
        ("Amenities", amenities),
    ];

    let submission_id = submission.id.clone();
    let set_status = move |status: SubmissionStatus| {
        let client = services.client.clone();
        let id = submission_id.clone();
        spawn(async move {
            match client.update_submission_status(&id, status).await {
                Ok(updated) => {
                    tracing::info!("submission {} is now {}", updated.id, updated.status);
                    notifications.success(format!("Submission {}", status.label().to_lowercase()));
                    on_changed(());
                }
                Err(e) => notifications.error(format!("Could not update submission: {e}")),
            }
        });
    };
    let approve = set_status.clone();
    let reject = set_status;

    rsx! {
        div {
            class: "x-submission-card",
            style: "display: flex; flex-direction: column; gap: 8px; background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 16px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                span { style: "font-size: 18px; font-weight: 500; color: #00274C;", "{submission.name}" }
                span {
                    style: "font-size: 12px; padding: 2px 8px; border-radius: 999px; background: {badge_bg}; color: {badge_fg};",
                    "{submission.status.label()}"
                }
                div { style: "flex-grow: 1;" }
                span { style: "font-size: 13px; color: #6B7280;", "{submission.created_at}" }
            }
            div { style: "color: #4B5563;", "{submission.building}, {submission.campus}" }
            if let Some(description) = submission.description.as_deref() {
                p { style: "margin: 0; line-height: 1.5;", "{description}" }
            }
            for (name, value) in details {
                if !value.is_empty() {
                    div { key: "{name}", style: "font-size: 14px;", span { style: "color: #6B7280;", "{name}: " } "{value}" }
                }
            }
            if !photos.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for photo in photos {
                        img { key: "{photo}", src: "{photo}", style: "width: 96px; height: 96px; object-fit: cover; border-radius: 8px;" }
                    }
                }
            }
            div { style: "font-size: 13px; color: #6B7280;", "Submitted by {submitted_by}" }
            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                if submission.status != SubmissionStatus::Approved {
                    button {
                        style: "border: none; border-radius: 8px; padding: 8px 14px; background: #047857; color: white; cursor: pointer;",
                        onclick: move |_| approve(SubmissionStatus::Approved),
                        "Approve"
                    }
                }
                if submission.status != SubmissionStatus::Rejected {
                    button {
                        style: "border: none; border-radius: 8px; padding: 8px 14px; background: #B91C1C; color: white; cursor: pointer;",
                        onclick: move |_| reject(SubmissionStatus::Rejected),
                        "Reject"
                    }
                }
            }
        }
    }
}
