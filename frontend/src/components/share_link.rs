use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_content_icons::MdLink;
use wasm_bindgen_futures::JsFuture;

use crate::data_definitions::notifications::use_notifications;

async fn copy_current_url() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no browser window".to_string())?;
    let url = window.location().href().map_err(|e| format!("{e:?}"))?;
    JsFuture::from(window.navigator().clipboard().write_text(&url)).await.map_err(|e| format!("{e:?}"))?;
    Ok(url)
}

/// Copies the address of the current page.
#[component]
pub fn ShareLinkButton() -> Element {
    let notifications = use_notifications();
    rsx! {
        button {
            id: "x-share-link",
            title: "Copy link",
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
            onclick: move |_| async move {
                match copy_current_url().await {
                    Ok(url) => {
                        tracing::info!("link copied to clipboard: {url}");
                        notifications.info("Link copied to clipboard");
                    }
                    Err(e) => {
                        tracing::warn!("clipboard write failed: {e}");
                        notifications.error("Could not copy the link");
                    }
                }
            },
            Icon { icon: MdLink, style: "width: 20px; height: 20px;" }
            "Share"
        }
    }
}
