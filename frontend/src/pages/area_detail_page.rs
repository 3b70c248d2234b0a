//! One study area: photos, facts, favorite toggle, reviews and the review form.

use api_client::{PhotoUpload, ReviewSource};
use common::app_const::{MAX_RATING, MIN_RATING};
use common::catalog::Catalog;
use common::photos::{filter_supported_images, normalize_image_path};
use common::rating::RatingRecord;
use common::review::{NewReview, Review};
use common::study_space::{SpaceId, StudySpace};
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::{MdDelete, MdFavorite, MdFavoriteBorder, MdThumbUp};

use crate::api::identity::{open_sign_in, use_current_user};
use crate::api::services::use_services;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::photo_carousel::PhotoCarousel;
use crate::components::photo_picker::PhotoPicker;
use crate::components::rating_display::{RatingSummary, StarRow};
use crate::components::share_link::ShareLinkButton;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::notifications::use_notifications;
use crate::routes::Route;

#[component]
pub fn AreaDetailPage(space_id: SpaceId) -> Element {
    let catalog = Catalog::bundled()?;
    let Some(space) = catalog.space(space_id) else {
        return rsx! {
            Title { "Study Spaces - Unknown area" }
            div {
                style: "padding: 36px 40px; display: flex; flex-direction: column; gap: 12px;",
                h1 { style: "color: #00274C; font-size: 30px; font-weight: 500; margin: 0;", "Study area not found" }
                Link { to: Route::HomePage {}, style: "color: #00274C; text-decoration: underline;", "Back to campus selection" }
            }
        };
    };

    rsx! {
        Title { "Study Spaces - {space.name}" }
        AreaDetailRootComponent { space: space.clone() }
    }
}

/// Lets the review list and the review form share one fetch.
#[derive(Clone, Copy)]
struct ReviewsControl {
    reviews: Resource<Result<Vec<Review>, String>>,
    reload: Callback<()>,
}

#[component]
fn AreaDetailRootComponent(space: ReadSignal<StudySpace>) -> Element {
    let catalog = Catalog::bundled()?;
    let services = use_services();
    let space_id = use_memo(move || space.read().id);

    let mut reviews = use_resource({
        let services = services.clone();
        move || {
            let source = services.reviews.clone();
            let id = space_id();
            async move { source.reviews(id).await.map_err(|e| e.to_string()) }
        }
    });
    let reload = Callback::new(move |_: ()| {
        services.reviews.invalidate(*space_id.peek());
        reviews.restart();
    });
    use_context_provider(|| ReviewsControl { reviews, reload });

    let space = space.read().clone();
    let building = catalog.building(&space.building_id).cloned();

    rsx! {
        div {
            id: "x-area-detail-page",
            style: "display: flex; flex-direction: column; gap: 22px; padding: 28px 36px; max-width: 1100px;",
            if let Some(building) = building {
                Link {
                    to: Route::BuildingPage { building_id: building.id.clone() },
                    style: "color: #00274C; font-size: 14px; text-decoration: underline;",
                    "Back to {building.name}"
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px;",
                div {
                    style: "display: flex; flex-direction: column; gap: 4px;",
                    h1 { style: "font-size: 32px; font-weight: 500; color: #00274C; margin: 0;", "{space.name}" }
                    div { style: "color: #4B5563;", "{space.location}" }
                }
                div { style: "flex-grow: 1;" }
                ShareLinkButton {}
                FavoriteToggle { space_id: space.id }
            }
            PhotoCarousel { photos: space.photos.clone(), alt: space.name.clone() }
            div {
                style: "display: flex; flex-direction: row; gap: 24px; flex-wrap: wrap; align-items: flex-start;",
                InfoTable { space: space.clone() }
                DimensionList { space: space.clone() }
            }
            ReviewsSection { current_space: space.id }
            ReviewForm { space_id: space.id }
        }
    }
}

#[component]
fn InfoTable(space: StudySpace) -> Element {
    let best_for = space.best_for.iter().map(|b| format!("{} {}", b.icon(), b.label())).collect::<Vec<_>>().join(", ");
    let amenities = if space.amenities.is_empty() {
        "None listed".to_string()
    } else {
        space.amenities.iter().map(|a| format!("{} {}", a.icon(), a.label())).collect::<Vec<_>>().join(", ")
    };
    let rooms = if space.is_walk_in_only() || space.bookable_rooms.is_empty() {
        "Walk-in only".to_string()
    } else {
        space.bookable_rooms.iter().map(|r| format!("{} {}", r.icon(), r.label())).collect::<Vec<_>>().join(", ")
    };
    let rows = [
        ("Noise Level", format!("{} {}", space.noise.icon(), space.noise.label())),
        ("Privacy", format!("{} {}", space.enclosed.icon(), space.enclosed.label())),
        ("Best For", best_for),
        ("Amenities", amenities),
        ("Bookable Rooms", rooms),
    ];

    rsx! {
        table {
            id: "x-area-info-table",
            style: "border-collapse: collapse; background: white; border-radius: 12px; overflow: hidden; min-width: 360px; border: 1px solid #E5E7EB;",
            tbody {
                for (name, value) in rows {
                    tr {
                        key: "{name}",
                        style: "border-bottom: 1px solid #F3F4F6;",
                        th { style: "text-align: left; padding: 10px 14px; color: #4B5563; font-weight: 500; white-space: nowrap;", "{name}" }
                        td { style: "padding: 10px 14px;", "{value}" }
                    }
                }
            }
        }
    }
}

#[component]
fn DimensionList(space: StudySpace) -> Element {
    rsx! {
        div {
            id: "x-area-dimensions",
            style: "display: flex; flex-direction: column; gap: 10px; flex: 1 1 360px;",
            h2 { style: "font-size: 20px; font-weight: 500; color: #00274C; margin: 0;", "What to expect" }
            for (title, text) in space.dimensions.entries() {
                if !text.trim().is_empty() {
                    div {
                        key: "{title}",
                        style: "background: white; border: 1px solid #E5E7EB; border-radius: 10px; padding: 10px 14px;",
                        div { style: "font-weight: 500; color: #111827;", "{title}" }
                        div { style: "color: #374151; line-height: 1.5;", "{text}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FavoriteToggle(space_id: SpaceId) -> Element {
    let services = use_services();
    let notifications = use_notifications();
    let user = use_current_user();
    let mut is_favorite = use_signal(|| false);

    let client = services.client.clone();
    let _favorite_check = use_resource(move || {
        let client = client.clone();
        let user = user();
        async move {
            let favorite = match user {
                Some(user) => client.is_favorite(&user.id, &space_id.to_string()).await,
                None => false,
            };
            is_favorite.set(favorite);
        }
    });

    let onclick = move |_| {
        let client = services.client.clone();
        async move {
            let Some(user) = user() else {
                notifications.info("Sign in to save favorites");
                open_sign_in();
                return;
            };
            let space = space_id.to_string();
            let adding = !*is_favorite.peek();
            let result = if adding {
                client.add_favorite(&user.id, &space).await.map(|_| ())
            } else {
                client.remove_favorite(&user.id, &space).await
            };
            match result {
                Ok(()) => {
                    is_favorite.set(adding);
                    notifications.success(if adding { "Added to favorites" } else { "Removed from favorites" });
                }
                Err(e) => notifications.error(format!("Could not update favorites: {e}")),
            }
        }
    };

    let label = if is_favorite() { "Saved" } else { "Save" };
    rsx! {
        button {
            id: "x-favorite-toggle",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 6px;
                border: 1px solid #00274C;
                border-radius: 999px;
                padding: 8px 14px;
                background: white;
                color: #00274C;
                font-size: 15px;
                cursor: pointer;
            ",
            onclick,
            if is_favorite() {
                Icon { icon: MdFavorite, style: "width: 20px; height: 20px; color: #C2185B;" }
            } else {
                Icon { icon: MdFavoriteBorder, style: "width: 20px; height: 20px;" }
            }
            "{label}"
        }
    }
}

#[component]
fn ReviewsSection(current_space: SpaceId) -> Element {
    let control = use_context::<ReviewsControl>();
    let listing = match &*control.reviews.read() {
        None => return rsx! { LoadingIndicator { label: "Loading reviews..." } },
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: e.clone() } },
        Some(Ok(list)) => list.clone(),
    };
    let record = RatingRecord::from_reviews(&listing);

    rsx! {
        div {
            id: "x-reviews-section",
            style: "display: flex; flex-direction: column; gap: 12px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 14px;",
                h2 { style: "font-size: 22px; font-weight: 500; color: #00274C; margin: 0;", "Reviews ({record.review_count})" }
                RatingSummary { record }
            }
            if listing.is_empty() {
                div { style: "color: #6B7280;", "Be the first to review this space." }
            }
            for review in listing {
                ReviewItem { key: "{review.id}", review: review.clone(), space_id: current_space }
            }
        }
    }
}

#[component]
fn ReviewItem(review: Review, space_id: SpaceId) -> Element {
    let control = use_context::<ReviewsControl>();
    let services = use_services();
    let notifications = use_notifications();
    let user = use_current_user();

    let own = user.read().as_ref().is_some_and(|u| review.user_id.as_deref() == Some(u.id.as_str()));
    let photos: Vec<String> = filter_supported_images(review.photos()).iter().map(|p| normalize_image_path(p)).collect();
    let helpful = review.helpful.unwrap_or(0);
    let review_id = review.id.clone();

    let on_helpful = {
        let client = services.client.clone();
        let review_id = review_id.clone();
        move |_| {
            let client = client.clone();
            let review_id = review_id.clone();
            async move {
                match client.mark_review_helpful(&review_id).await {
                    Ok(_) => control.reload.call(()),
                    Err(e) => notifications.error(format!("Could not mark as helpful: {e}")),
                }
            }
        }
    };
    let on_delete = {
        let client = services.client.clone();
        move |_| {
            let client = client.clone();
            let review_id = review_id.clone();
            async move {
                match client.delete_review(&review_id).await {
                    Ok(()) => {
                        tracing::info!("deleted review {review_id} of space {space_id}");
                        notifications.success("Review deleted");
                        control.reload.call(());
                    }
                    Err(e) => notifications.error(format!("Could not delete review: {e}")),
                }
            }
        }
    };

    rsx! {
        div {
            class: "x-review-item",
            style: "display: flex; flex-direction: column; gap: 8px; background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 14px 16px;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                span { style: "font-weight: 500;", "{review.display_author()}" }
                StarRow { average: review.rating as f64, size: 16 }
                span { style: "color: #6B7280; font-size: 13px;", "{review.created_date()}" }
            }
            if let Some(text) = review.text() {
                p { style: "margin: 0; line-height: 1.5;", "{text}" }
            }
            if !photos.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 6px;",
                    for photo in photos {
                        img { key: "{photo}", src: "{photo}", style: "width: 96px; height: 96px; object-fit: cover; border-radius: 8px;" }
                    }
                }
            }
            div {
                style: "display: flex; flex-direction: row; gap: 10px;",
                button {
                    style: "{ACTION_BUTTON_STYLE}",
                    onclick: on_helpful,
                    Icon { icon: MdThumbUp, style: "width: 16px; height: 16px;" }
                    "Helpful ({helpful})"
                }
                if own {
                    button {
                        style: "{ACTION_BUTTON_STYLE}",
                        onclick: on_delete,
                        Icon { icon: MdDelete, style: "width: 16px; height: 16px;" }
                        "Delete"
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewForm(space_id: SpaceId) -> Element {
    let control = use_context::<ReviewsControl>();
    let services = use_services();
    let notifications = use_notifications();
    let user = use_current_user();

    let mut rating = use_signal(|| MAX_RATING);
    let mut comment = use_signal(String::new);
    let mut photos = use_signal(Vec::<PhotoUpload>::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = services.client.clone();
        async move {
            if user.peek().is_none() {
                notifications.info("Sign in to leave a review");
                open_sign_in();
                return;
            }
            submitting.set(true);
            let picked = photos.peek().clone();
            let mut photo_urls = Vec::new();
            if !picked.is_empty() {
                match client.upload_photos(picked).await {
                    Ok(urls) => photo_urls = urls,
                    Err(e) => {
                        tracing::warn!("photo upload failed: {e}");
                        notifications.error(format!("Photos were not uploaded: {e}"));
                    }
                }
            }
            let review = NewReview::new(*rating.peek(), &comment.peek(), photo_urls);
            let outcome = match review.validate() {
                Ok(()) => client.create_review(&space_id.to_string(), &review).await.map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            match outcome {
                Ok(_) => {
                    notifications.success("Review submitted successfully!");
                    rating.set(MAX_RATING);
                    comment.set(String::new());
                    photos.set(Vec::new());
                    control.reload.call(());
                }
                Err(e) => notifications.error(e),
            }
            submitting.set(false);
        }
    };

    rsx! {
        form {
            id: "x-review-form",
            style: "display: flex; flex-direction: column; gap: 12px; background: white; border: 1px solid #E5E7EB; border-radius: 12px; padding: 16px;",
            onsubmit: on_submit,
            h2 { style: "font-size: 20px; font-weight: 500; color: #00274C; margin: 0;", "Write a review" }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 10px;",
                label { r#for: "x-review-rating", "Rating" }
                select {
                    id: "x-review-rating",
                    onchange: move |e| {
                        if let Ok(value) = e.value().parse::<u8>() {
                            rating.set(value);
                        }
                    },
                    for value in (MIN_RATING..=MAX_RATING).rev() {
                        option { key: "{value}", value: "{value}", selected: value == rating(), "{value} stars" }
                    }
                }
                StarRow { average: rating() as f64 }
            }
            textarea {
                placeholder: "What is it like to study here?",
                rows: "4",
                style: "font-family: inherit; font-size: 15px; padding: 8px; border-radius: 8px; border: 1px solid #D1D5DB;",
                value: "{comment}",
                oninput: move |e| comment.set(e.value()),
            }
            PhotoPicker { picked: photos }
            button {
                r#type: "submit",
                disabled: submitting(),
                style: "align-self: flex-start; border: none; border-radius: 8px; padding: 10px 18px; background: #00274C; color: white; font-size: 15px; cursor: pointer;",
                if submitting() { "Submitting..." } else { "Submit review" }
            }
        }
    }
}

const ACTION_BUTTON_STYLE: &str = "
    display: inline-flex;
    align-items: center;
    gap: 4px;
    border: 1px solid #D1D5DB;
    border-radius: 999px;
    padding: 4px 10px;
    background: white;
    color: #374151;
    font-size: 13px;
    cursor: pointer;
";
