//! Side navigation bar wrapping every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdFavorite, MdHome, MdInfo};
use dioxus_free_icons::icons::md_content_icons::MdAddBox;
use dioxus_free_icons::icons::md_maps_icons::MdMap;
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::icons::md_toggle_icons::MdCheckBox;
use dioxus_free_icons::{Icon, IconShape};

use crate::api::identity::{open_sign_in, use_current_user};
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;
use common::building::Campus;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: row;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-nav-sidebar",
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 40px;
                    width: 70px;
                    height: 100%;
                    background-color: #00274C;
                    padding: 16px;
                    flex-shrink: 0;
                ",

                NavbarTopLogo {}
                NavbarTopIconLinks {}

                div { style: "flex-grow: 1;" }

                NavbarUserBadge {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-width: 100px; height: 100%; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarTopLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            img { src: asset!("/assets/favicon.svg"), alt: "Study Spaces", style: "width: 38px; height: 38px;" }
        }
    }
}

#[component]
fn NavbarTopIconLinks() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                gap: 24px;
                width: 38px;
                align-items: center;
                justify-content: center;
            ",
            IconLink { to: Route::HomePage {}, icon: MdHome, label: "Home" }
            IconLink { to: Route::campus(Campus::Central), icon: MdMap, label: Campus::Central.title().to_string() }
            IconLink { to: Route::FavoritesPage {}, icon: MdFavorite, label: "Favorites" }
            IconLink { to: Route::SubmitPage {}, icon: MdAddBox, label: "Submit a Space" }
            IconLink { to: Route::AdminSubmissionsPage {}, icon: MdCheckBox, label: "Review Submissions" }
            IconLink { to: Route::AboutPage {}, icon: MdInfo, label: "About" }
        }
    }
}

#[component]
fn NavbarUserBadge() -> Element {
    let user = use_current_user();
    let label = match user() {
        Some(u) => u.display_name,
        None => "Sign in".to_string(),
    };
    let signed_in = user.read().is_some();
    let opacity = if signed_in { "1" } else { "0.6" };
    rsx! {
        button {
            title: "{label}",
            style: "
                border: none;
                background: transparent;
                cursor: pointer;
                color: white;
                width: 38px;
                display: flex;
                justify-content: center;
                opacity: {opacity};
            ",
            onclick: move |_| {
                if !signed_in {
                    open_sign_in();
                }
            },
            Icon { icon: MdPerson, style: "width: 26px; height: 26px;" }
        }
    }
}

#[component]
fn IconLink<T: IconShape + Clone + PartialEq + 'static>(to: Route, icon: T, label: String) -> Element {
    rsx! {
        span {
            title: "{label}",
            Link {
                to: to,
                span {
                    style: "color: white;",
                    Icon { icon: icon, style: "width: 26px; height: 26px;" }
                }
            }
        }
    }
}
