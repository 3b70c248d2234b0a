use common::building::Building;
use common::photos::normalize_image_path;
use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn BuildingCard(building: ReadSignal<Building>, area_count: usize) -> Element {
    let building = building.read().clone();
    let image = normalize_image_path(&building.image);
    let noun = if area_count == 1 { "study area" } else { "study areas" };

    rsx! {
        Link {
            to: Route::BuildingPage { building_id: building.id.clone() },
            div {
                class: "x-building-card",
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
                if !image.is_empty() {
                    img { src: "{image}", alt: "{building.name}", style: "width: 100%; height: 160px; object-fit: cover;" }
                }
                div {
                    style: "display: flex; flex-direction: column; gap: 6px; padding: 14px;",
                    div { style: "font-size: 18px; font-weight: 500; color: #00274C;", "{building.name}" }
                    div { style: "font-size: 13px; color: #6B7280;", "{building.address}" }
                    div { style: "font-size: 14px; color: #4B5563;", "{building.building_type}" }
                    div { style: "font-size: 14px; color: #1E3A8A; font-weight: 500;", "{area_count} {noun}" }
                }
            }
        }
    }
}
