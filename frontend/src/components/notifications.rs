use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::data_definitions::notifications::{ToastKind, use_notifications};

fn toast_style(kind: ToastKind) -> String {
    let (background, color) = match kind {
        ToastKind::Success => ("#ECFDF5", "#047857"),
        ToastKind::Info => ("#EFF6FF", "#1D4ED8"),
        ToastKind::Error => ("#FEF2F2", "#B91C1C"),
    };
    format!("
        display: flex;
        flex-direction: row;
        align-items: center;
        gap: 10px;
        padding: 12px 14px;
        border-radius: 10px;
        border: 1px solid {color};
        background: {background};
        color: {color};
        box-shadow: 0 6px 16px rgba(0,0,0,0.08);
        font-size: 15px;
    ")
}

/// Bottom-right stack of transient notifications.
#[component]
pub fn ToastStack() -> Element {
    let notifications = use_notifications();
    let toasts = notifications.toasts();

    rsx! {
        div {
            id: "x-toast-stack",
            style: "
                position: fixed;
                right: 20px;
                bottom: 20px;
                display: flex;
                flex-direction: column;
                gap: 10px;
                z-index: 2000;
                max-width: 380px;
            ",
            for toast in toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "x-toast",
                    style: toast_style(toast.kind),
                    div { style: "flex-grow: 1;", "{toast.message}" }
                    button {
                        style: "border: none; background: transparent; cursor: pointer; color: inherit; display: flex;",
                        onclick: move |_| notifications.dismiss(toast.id),
                        Icon { icon: MdClose, style: "width: 18px; height: 18px;" }
                    }
                }
            }
        }
    }
}
