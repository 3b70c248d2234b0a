use common::facets::{BookableRoom, EnclosedLevel, NoiseLevel};
use dioxus::prelude::*;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "Study Spaces - About" }
        div {
            id: "x-about-container",
            style: "display: flex; flex-direction: column; gap: 18px; padding: 36px 40px; max-width: 860px; line-height: 1.6;",
            h1 { style: "color: #00274C; font-size: 36px; font-weight: 500; margin: 0;", "About" }
            p {
                "A student-maintained directory of places to study on campus. Every space lists how loud it is, what it is good for, which amenities it has and whether a room can be reserved. Ratings come from reviews left by other students."
            }
            h2 { style: "color: #00274C; font-size: 22px; font-weight: 500; margin: 0;", "How filters work" }
            p {
                "Within a filter group any checked value matches, so checking Quiet and Silent shows spaces that are either. Amenities are the exception: a space must have every amenity you check. Different groups always combine, so each one narrows the list further."
            }
            h2 { style: "color: #00274C; font-size: 22px; font-weight: 500; margin: 0;", "Glossary" }
            dl {
                style: "display: grid; grid-template-columns: max-content 1fr; gap: 6px 18px; margin: 0;",
                for level in NoiseLevel::ALL {
                    if let Some(description) = level.description() {
                        dt { key: "noise-{level.as_str()}", style: "font-weight: 500;", "{level.icon()} {level.label()}" }
                        dd { key: "noise-d-{level.as_str()}", style: "margin: 0;", "{description}" }
                    }
                }
                for level in EnclosedLevel::ALL {
                    if let Some(description) = level.description() {
                        dt { key: "enclosed-{level.as_str()}", style: "font-weight: 500;", "{level.icon()} {level.label()}" }
                        dd { key: "enclosed-d-{level.as_str()}", style: "margin: 0;", "{description}" }
                    }
                }
                for room in BookableRoom::ALL {
                    if let Some(description) = room.description() {
                        dt { key: "room-{room.as_str()}", style: "font-weight: 500;", "{room.icon()} {room.label()}" }
                        dd { key: "room-d-{room.as_str()}", style: "margin: 0;", "{description}" }
                    }
                }
            }
            h2 { style: "color: #00274C; font-size: 22px; font-weight: 500; margin: 0;", "Missing a space?" }
            p {
                "Suggest it from the Submit page. Submissions are checked by a moderator before they show up here."
            }
        }
    }
}
