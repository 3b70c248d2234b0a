use common::catalog::Catalog;
use common::favorite::Favorite;
use common::rating::rating_of;
use common::study_space::{SpaceId, StudySpace};
use dioxus::prelude::*;

use crate::api::identity::{open_sign_in, use_current_user};
use crate::api::services::use_services;
use crate::api::space_ratings::use_space_ratings;
use crate::components::error_boundary::ComponentErrorDisplay;
use crate::components::space_card::SpaceCard;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::notifications::use_notifications;

#[component]
pub fn FavoritesPage() -> Element {
    let user = use_current_user();

    rsx! {
        Title { "Study Spaces - Favorites" }
        div {
            id: "x-favorites-page",
            style: "display: flex; flex-direction: column; gap: 18px; padding: 28px 36px;",
            h1 { style: "font-size: 32px; font-weight: 500; color: #00274C; margin: 0;", "My Favorites" }
            if let Some(user) = user() {
                FavoritesList { user_id: user.id }
            } else {
                div {
                    style: "display: flex; flex-direction: column; gap: 10px; color: #4B5563;",
                    "Sign in to see the spaces you saved."
                    button {
                        style: "align-self: flex-start; border: none; border-radius: 8px; padding: 10px 18px; background: #00274C; color: white; cursor: pointer;",
                        onclick: move |_| open_sign_in(),
                        "Sign in"
                    }
                }
            }
        }
    }
}

#[component]
fn FavoritesList(user_id: ReadSignal<String>) -> Element {
    let catalog = Catalog::bundled()?;
    let services = use_services();
    let notifications = use_notifications();

    let mut favorites = use_resource({
        let client = services.client.clone();
        move || {
            let client = client.clone();
            let user_id = user_id();
            async move { client.list_favorites(&user_id).await.map_err(|e| e.to_string()) }
        }
    });
    let ids = use_memo(move || match &*favorites.read() {
        Some(Ok(list)) => list.iter().filter_map(Favorite::catalog_id).collect::<Vec<SpaceId>>(),
        _ => Vec::new(),
    });
    let ratings = use_space_ratings(ids);

    let spaces: Vec<StudySpace> = match &*favorites.read() {
        None => return rsx! { LoadingIndicator { label: "Loading favorites..." } },
        Some(Err(e)) => return rsx! { ComponentErrorDisplay { error_txt: e.clone() } },
        Some(Ok(_)) => ids.read().iter().filter_map(|id| catalog.space(*id)).cloned().collect(),
    };
    let ratings_map = ratings.ratings.read();
    let loading = (ratings.loading)();

    let on_remove = Callback::new(move |space_id: SpaceId| {
        let client = services.client.clone();
        spawn(async move {
            match client.remove_favorite(&user_id.peek(), &space_id.to_string()).await {
                Ok(()) => {
                    notifications.success("Removed from favorites");
                    favorites.restart();
                }
                Err(e) => notifications.error(format!("Could not remove favorite: {e}")),
            }
        });
    });

    rsx! {
        if spaces.is_empty() {
            div { style: "color: #6B7280;", "No favorites yet. Use the Save button on a study area to keep it here." }
        }
        div {
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 20px;",
            for space in spaces {
                div {
                    key: "{space.id}",
                    style: "display: flex; flex-direction: column; gap: 6px;",
                    SpaceCard {
                        rating: rating_of(&ratings_map, space.id),
                        building_name: catalog.building(&space.building_id).map(|b| b.name.clone()),
                        ratings_loading: loading,
                        space: space.clone(),
                    }
                    button {
                        style: "align-self: flex-start; border: none; background: transparent; color: #B91C1C; cursor: pointer; text-decoration: underline; font-size: 13px;",
                        onclick: move |_| on_remove(space.id),
                        "Remove"
                    }
                }
            }
        }
    }
}
