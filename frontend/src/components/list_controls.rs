//! Result count, sort selector and active filter chips above the area list.

use common::building::Building;
use common::filter_state::{FacetValue, FilterState};
use common::sort::SortKey;
use dioxus::{logger::tracing, prelude::*};
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;

use crate::components::facet_panel::{LINK_BUTTON_STYLE, facet_value_label};

#[component]
pub fn ListControls(
    shown: usize,
    total: usize,
    sort: SortKey,
    state: ReadSignal<FilterState>,
    buildings: ReadSignal<Vec<Building>>,
    on_sort: Callback<SortKey>,
    on_toggle: Callback<FacetValue>,
    on_clear_all: Callback<()>,
) -> Element {
    let chips = state.read().selected_values();

    rsx! {
        div {
            id: "x-list-controls",
            style: "display: flex; flex-direction: column; gap: 10px; padding: 12px 0;",
            div {
                style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                h2 {
                    style: "font-size: 18px; font-weight: 400; color: #4B5770; margin: 0;",
                    if shown == total {
                        "{total} study areas"
                    } else {
                        "Showing {shown} of {total} study areas"
                    }
                }
                div { style: "flex-grow: 1;" }
                label { r#for: "x-sort-select", style: "font-size: 14px; color: #4B5563;", "Sort by" }
                select {
                    id: "x-sort-select",
                    style: "font-size: 14px; padding: 6px 8px; border-radius: 6px; border: 1px solid #D1D5DB;",
                    onchange: move |e| {
                        match e.value().parse::<SortKey>() {
                            Ok(key) => on_sort(key),
                            Err(err) => tracing::warn!("ignoring sort selection: {err}"),
                        }
                    },
                    for key in SortKey::ALL {
                        option { key: "{key}", value: "{key}", selected: key == sort, "{key.label()}" }
                    }
                }
            }
            if !chips.is_empty() {
                div {
                    style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 8px; align-items: center;",
                    for value in chips {
                        FilterChip {
                            key: "{value:?}",
                            label: facet_value_label(&value, &buildings.read()),
                            value: value.clone(),
                            on_toggle,
                        }
                    }
                    button {
                        style: "{LINK_BUTTON_STYLE}",
                        onclick: move |_| on_clear_all(()),
                        "Clear all"
                    }
                }
            }
        }
    }
}

/// Active selection; clicking it toggles the value off.
#[component]
fn FilterChip(value: FacetValue, label: String, on_toggle: Callback<FacetValue>) -> Element {
    rsx! {
        button {
            class: "x-filter-chip",
            style: "
                display: inline-flex;
                align-items: center;
                gap: 4px;
                padding: 4px 6px 4px 12px;
                border-radius: 999px;
                border: 1px solid #00274C;
                background: #EEF2FF;
                color: #00274C;
                font-size: 13px;
                cursor: pointer;
            ",
            onclick: move |_| on_toggle(value.clone()),
            "{label}"
            Icon { icon: MdClose, style: "width: 14px; height: 14px;" }
        }
    }
}
