use dioxus::prelude::*;

use crate::api::identity::use_current_user_provider;
use crate::api::services::AppServices;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::notifications::ToastStack;
use crate::data_definitions::notifications::use_notifications_provider;
use crate::routes::Route;
const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(AppServices::from_env);
    use_notifications_provider();
    use_current_user_provider();

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
        ToastStack {}
    }
}
