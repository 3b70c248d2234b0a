use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        Title { "Study Spaces - Not Found" }
        div {
            style: "display: flex; flex-direction: column; gap: 14px; padding: 36px 40px;",
            h1 { style: "color: #00274C; font-size: 36px; font-weight: 500; margin: 0;", "Page not found" }
            p { style: "color: #4B5563;", "Nothing lives at /{path}." }
            Link { to: Route::HomePage {}, style: "color: #00274C; text-decoration: underline;", "Back to campus selection" }
        }
    }
}
