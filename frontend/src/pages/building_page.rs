use common::catalog::Catalog;
use common::photos::normalize_image_path;
use common::rating::rating_of;
use common::sort::{SortKey, sort_spaces};
use common::study_space::{SpaceId, StudySpace};
use dioxus::{logger::tracing, prelude::*};

use crate::api::space_ratings::use_space_ratings;
use crate::components::space_card::SpaceCard;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::routes::Route;

#[component]
pub fn BuildingPage(building_id: String) -> Element {
    let catalog = Catalog::bundled()?;
    let Some(building) = catalog.building(&building_id) else {
        return rsx! {
            Title { "Study Spaces - Unknown building" }
            div {
                style: "padding: 36px 40px; display: flex; flex-direction: column; gap: 12px;",
                h1 { style: "color: #00274C; font-size: 30px; font-weight: 500; margin: 0;", "Building not found" }
                Link { to: Route::HomePage {}, style: "color: #00274C; text-decoration: underline;", "Back to campus selection" }
            }
        };
    };

    rsx! {
        Title { "Study Spaces - {building.name}" }
        BuildingPageRootComponent { building_id }
    }
}

#[component]
fn BuildingPageRootComponent(building_id: ReadSignal<String>) -> Element {
    let catalog = Catalog::bundled()?;
    let ids = use_memo(move || catalog.spaces_in_building(&building_id.read()).iter().map(|s| s.id).collect::<Vec<SpaceId>>());
    let ratings = use_space_ratings(ids);
    let mut sort = use_signal(SortKey::default);

    let Some(building) = catalog.building(&building_id.read()) else {
        return rsx! {};
    };
    let spaces = catalog.spaces_in_building(&building.id);
    let ratings_map = ratings.ratings.read();
    let sorted: Vec<StudySpace> = sort_spaces(&spaces, &ratings_map, sort()).into_iter().cloned().collect();
    let loading = (ratings.loading)();
    let image = normalize_image_path(&building.image);

    rsx! {
        div {
            id: "x-building-page",
            style: "display: flex; flex-direction: column; gap: 18px; padding: 28px 36px;",
            Link {
                to: Route::campus(building.campus),
                style: "color: #00274C; font-size: 14px; text-decoration: underline;",
                "Back to {building.campus.title()}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 24px; flex-wrap: wrap;",
                if !image.is_empty() {
                    img { src: "{image}", alt: "{building.name}", style: "width: 360px; height: 220px; object-fit: cover; border-radius: 14px;" }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 8px; max-width: 640px;",
                    h1 { style: "font-size: 32px; font-weight: 500; color: #00274C; margin: 0;", "{building.name}" }
                    div { style: "color: #4B5563;", "{building.address}" }
                    div { style: "color: #4B5563;", "{building.building_type}" }
                    p { style: "line-height: 1.6; margin: 0;", "{building.description}" }
                }
            }
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h2 { style: "font-size: 20px; font-weight: 400; color: #4B5770; margin: 0;", "{spaces.len()} study areas" }
                div { style: "flex-grow: 1;" }
                label { r#for: "x-building-sort", style: "font-size: 14px; color: #4B5563;", "Sort by" }
                select {
                    id: "x-building-sort",
                    style: "font-size: 14px; padding: 6px 8px; border-radius: 6px; border: 1px solid #D1D5DB;",
                    onchange: move |e| match e.value().parse::<SortKey>() {
                        Ok(key) => sort.set(key),
                        Err(err) => tracing::warn!("ignoring sort selection: {err}"),
                    },
                    for key in SortKey::ALL {
                        option { key: "{key}", value: "{key}", selected: key == sort(), "{key.label()}" }
                    }
                }
            }
            if loading {
                LoadingIndicator { label: "Loading ratings..." }
            }
            if sorted.is_empty() {
                div { style: "color: #6B7280;", "No study areas listed in this building yet." }
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 20px;",
                for space in sorted {
                    SpaceCard {
                        key: "{space.id}",
                        rating: rating_of(&ratings_map, space.id),
                        building_name: None,
                        ratings_loading: loading,
                        space: space.clone(),
                    }
                }
            }
        }
    }
}
