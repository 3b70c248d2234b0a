use common::photos::{filter_supported_images, normalize_image_path};
use common::rating::RatingRecord;
use common::study_space::StudySpace;
use dioxus::prelude::*;

use crate::components::rating_display::RatingSummary;
use crate::routes::Route;

/// Card of one study area in a browse list.
#[component]
pub fn SpaceCard(
    space: ReadSignal<StudySpace>,
    rating: ReadSignal<RatingRecord>,
    building_name: ReadSignal<Option<String>>,
    #[props(default = false)] ratings_loading: bool,
) -> Element {
    let space = space.read().clone();
    let cover = filter_supported_images(&space.photos).first().map(|p| normalize_image_path(p));
    let best_for = space.best_for.iter().map(|b| b.label()).collect::<Vec<_>>().join(", ");

    rsx! {
        Link {
            to: Route::AreaDetailPage { space_id: space.id },
            div {
                class: "x-space-card",
                style: "
                    display: flex;
                    flex-direction: column;
                    width: 300px;
                    border-radius: 14px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                    overflow: hidden;
                    transition: box-shadow 120ms ease, transform 120ms ease;
                ",
                if let Some(src) = cover {
                    img { src: "{src}", alt: "{space.name}", style: "width: 100%; height: 170px; object-fit: cover;" }
                } else {
                    div {
                        style: "width: 100%; height: 170px; background: #E5E7EB; display: flex; align-items: center; justify-content: center; color: #6B7280;",
                        "No photo"
                    }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 6px; padding: 14px;",
                    div { style: "font-size: 18px; font-weight: 500; color: #00274C;", "{space.name}" }
                    if let Some(building) = building_name() {
                        div { style: "font-size: 14px; color: #4B5563;", "{building}" }
                    }
                    div { style: "font-size: 13px; color: #6B7280;", "{space.location}" }
                    div {
                        style: "display: flex; flex-wrap: wrap; gap: 6px; margin-top: 4px;",
                        span { class: "x-badge", style: BADGE_STYLE, "{space.noise.icon()} {space.noise.label()}" }
                        span { class: "x-badge", style: BADGE_STYLE, "{space.enclosed.icon()} {space.enclosed.label()}" }
                        if !best_for.is_empty() {
                            span { class: "x-badge", style: BADGE_STYLE, "{best_for}" }
                        }
                    }
                    RatingSummary { record: rating(), loading: ratings_loading }
                }
            }
        }
    }
}

const BADGE_STYLE: &str = "
    font-size: 12px;
    padding: 3px 8px;
    border-radius: 999px;
    background: #EEF2FF;
    color: #1E3A8A;
    white-space: nowrap;
";
