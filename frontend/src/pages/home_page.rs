use common::building::Campus;
use common::catalog::Catalog;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_maps_icons::MdPlace;

use crate::routes::Route;

/// Campus selection.
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Study Spaces - Home" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                min-height: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
            ",

            MainTitle {}
            SubText {}

            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                for campus in Campus::ALL {
                    CampusCard { key: "{campus}", campus }
                }
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                color: #00274C;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            img { src: asset!("/assets/favicon.svg"), alt: "Study Spaces", style: "width: 46px; height: 46px;" }
            span { "Find your" }
            span { style: "color: #D4A000;", "study space" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "color: #111827; font-size: 22px; line-height: 1.6; max-width: 720px;",
            "Browse libraries, lounges and study rooms across campus. Filter by noise, amenities and privacy, then see what other students rate them."
        }
    }
}

#[component]
fn CampusCard(campus: Campus) -> Element {
    let catalog = Catalog::bundled()?;
    let buildings = catalog.buildings_on_campus(campus).len();
    let areas = catalog.spaces_on_campus(campus).len();
    let background = match campus {
        Campus::Central => "linear-gradient(135deg, #00274C 0%, #1F4E8C 100%)",
        Campus::North => "linear-gradient(135deg, #0B5345 0%, #1E8449 100%)",
    };

    rsx! {
        Link {
            to: Route::campus(campus),
            div {
                id: "x-card-campus-{campus}",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 420px;
                    min-height: 220px;
                    border-radius: 22px;
                    padding: 22px 22px 26px 22px;
                    background: {background};
                    color: white;
                    box-shadow: 0 8px 24px rgba(0,0,0,0.12);
                ",
                div {
                    style: "display: flex; align-items: center; gap: 8px; font-size: 30px; font-weight: 500;",
                    Icon { icon: MdPlace, style: "width: 28px; height: 28px;" }
                    "{campus.title()}"
                }
                div { style: "height: 1px; background: rgba(255,255,255,0.6); width: 100%;" }
                div { style: "font-size: 20px; color: rgba(255,255,255,0.92);", "{buildings} buildings" }
                div { style: "font-size: 20px; color: rgba(255,255,255,0.92);", "{areas} study areas" }
            }
        }
    }
}
