//! Left-hand facet checklist of the browse view.

use common::building::Building;
use common::facets::Facet;
use common::filter_state::{FacetValue, FilterState};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank};

#[derive(Clone, Copy)]
struct FacetPanelContext {
    state: ReadSignal<FilterState>,
    on_toggle: Callback<FacetValue>,
    on_clear_facet: Callback<Facet>,
}

/// Display name of a facet value; building ids resolve to building names.
pub fn facet_value_label(value: &FacetValue, buildings: &[Building]) -> String {
    match value {
        FacetValue::Building(id) => buildings.iter().find(|b| &b.id == id).map(|b| b.name.clone()).unwrap_or_else(|| id.clone()),
        other => other.label(),
    }
}

fn facet_options(facet: Facet, buildings: &[Building]) -> Vec<FacetValue> {
    match facet {
        Facet::Building => buildings.iter().map(|b| FacetValue::Building(b.id.clone())).collect(),
        _ => FacetValue::options(facet),
    }
}

#[component]
pub fn FacetPanel(
    state: ReadSignal<FilterState>,
    buildings: ReadSignal<Vec<Building>>,
    on_toggle: Callback<FacetValue>,
    on_clear_facet: Callback<Facet>,
    on_clear_all: Callback<()>,
) -> Element {
    use_context_provider(|| FacetPanelContext { state, on_toggle, on_clear_facet });
    let active = state.read().active_count();

    rsx! {
        div {
            id: "x-facet-panel",
            style: "
                display: flex;
                flex-direction: column;
                gap: 18px;
                width: 290px;
                flex-shrink: 0;
                padding: 18px;
                background: white;
                border-right: 1px solid #E5E7EB;
                height: 100%;
                overflow-y: auto;
            ",
            div {
                style: "display: flex; flex-direction: row; align-items: center;",
                h2 { style: "font-size: 20px; font-weight: 500; margin: 0; color: #00274C;", "Filters" }
                div { style: "flex-grow: 1;" }
                if active > 0 {
                    button {
                        style: "{LINK_BUTTON_STYLE}",
                        onclick: move |_| on_clear_all(()),
                        "Clear all ({active})"
                    }
                }
            }
            for facet in Facet::ALL {
                FacetSection {
                    key: "{facet:?}",
                    facet,
                    options: facet_options(facet, &buildings.read()),
                    buildings,
                }
            }
        }
    }
}

#[component]
fn FacetSection(facet: Facet, options: Vec<FacetValue>, buildings: ReadSignal<Vec<Building>>) -> Element {
    let ctx = use_context::<FacetPanelContext>();
    let selected = ctx.state.read().selected_count(facet);
    if options.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "x-facet-section",
            style: "display: flex; flex-direction: column; gap: 4px;",
            div {
                style: "display: flex; flex-direction: row; align-items: baseline; gap: 8px;",
                span { style: "font-size: 16px; font-weight: 500; color: #111827;", "{facet.title()}" }
                if let Some(hint) = facet.hint() {
                    span { style: "font-size: 12px; color: #6B7280; font-style: italic;", "({hint})" }
                }
                div { style: "flex-grow: 1;" }
                if selected > 0 {
                    button {
                        style: "{LINK_BUTTON_STYLE}",
                        onclick: move |_| (ctx.on_clear_facet)(facet),
                        "Clear"
                    }
                }
            }
            for value in options {
                FacetCheckbox {
                    key: "{value:?}",
                    label: facet_value_label(&value, &buildings.read()),
                    description: value.description().map(str::to_string),
                    value: value.clone(),
                }
            }
        }
    }
}

#[component]
fn FacetCheckbox(value: FacetValue, label: String, description: Option<String>) -> Element {
    let ctx = use_context::<FacetPanelContext>();
    let is_checked = ctx.state.read().is_selected(&value);

    rsx! {
        div {
            class: "x-facet-list-item",
            title: description.unwrap_or_default(),
            style: "
                display: flex;
                flex-direction: row;
                gap: 8px;
                cursor: pointer;
                padding: 4px;
                align-items: center;
            ",
            onclick: move |_| (ctx.on_toggle)(value.clone()),

            if is_checked {
                Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #00274C; flex-shrink: 0;" }
            } else {
                Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #374151; flex-shrink: 0;" }
            }
            div {
                style: "
                    font-size: 15px;
                    line-height: 22px;
                    color: #111827;
                    overflow: hidden;
                    text-overflow: ellipsis;
                    white-space: nowrap;
                    min-width: 0;
                ",
                "{label}"
            }
        }
    }
}

pub(crate) const LINK_BUTTON_STYLE: &str = "
    border: none;
    background: transparent;
    color: #00274C;
    cursor: pointer;
    text-decoration: underline;
    font-size: 13px;
    padding: 0;
";
