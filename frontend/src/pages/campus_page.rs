//! Campus browse view: buildings tab, or all study areas with facet
//! filters, sorting and aggregated ratings.

use common::building::{Building, Campus};
use common::catalog::Catalog;
use common::facets::Facet;
use common::filter::filter_spaces;
use common::filter_state::{FacetValue, FilterState};
use common::rating::rating_of;
use common::sort::{SortKey, sort_spaces};
use common::study_space::{SpaceId, StudySpace};
use dioxus::prelude::*;

use crate::api::space_ratings::{SpaceRatings, use_space_ratings};
use crate::components::building_card::BuildingCard;
use crate::components::facet_panel::FacetPanel;
use crate::components::list_controls::ListControls;
use crate::components::space_card::SpaceCard;
use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::campus_view::CampusView;
use crate::data_definitions::url_param::UrlParam;
use crate::routes::Route;

#[component]
pub fn CampusPage(campus: Campus, view: CampusView, filters: UrlParam<FilterState>, sort: SortKey) -> Element {
    rsx! {
        Title { "Study Spaces - {campus.title()}" }
        CampusPageRootComponent { campus, view, filters: filters.0.clone(), sort }
    }
}

/// Every browse state change is a navigation, so back and forward replay it.
#[derive(Clone, Copy, PartialEq)]
struct CampusNavigation {
    campus: ReadSignal<Campus>,
    view: ReadSignal<CampusView>,
    filters: ReadSignal<FilterState>,
    sort: ReadSignal<SortKey>,
}

impl CampusNavigation {
    fn go(&self, view: CampusView, filters: FilterState, sort: SortKey) {
        navigator().push(Route::CampusPage { campus: *self.campus.peek(), view, filters: filters.into(), sort });
    }

    fn with_filters(&self, edit: impl FnOnce(&mut FilterState)) {
        let mut filters = self.filters.peek().clone();
        edit(&mut filters);
        self.go(*self.view.peek(), filters, *self.sort.peek());
    }
}

#[component]
fn CampusPageRootComponent(
    campus: ReadSignal<Campus>,
    view: ReadSignal<CampusView>,
    filters: ReadSignal<FilterState>,
    sort: ReadSignal<SortKey>,
) -> Element {
    let catalog = Catalog::bundled()?;
    let nav = CampusNavigation { campus, view, filters, sort };

    // ratings cover every area on the campus, independent of filtering
    let rating_ids = use_memo(move || {
        if view() != CampusView::Areas {
            return Vec::new();
        }
        catalog.spaces_on_campus(campus()).iter().map(|s| s.id).collect::<Vec<SpaceId>>()
    });
    let ratings = use_space_ratings(rating_ids);

    rsx! {
        div {
            id: "x-campus-page-root-component",
            style: "height: 100%; width: 100%; display: flex; flex-direction: column;",
            div {
                id: "x-campus-top-bar",
                style: "
                    border-bottom: 1px solid #D1D5DB;
                    background-color: #F8FCFF;
                    flex-shrink: 0;
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 24px;
                    height: 76px;
                    padding: 0 28px;
                ",
                h1 { style: "font-size: 28px; font-weight: 500; color: #00274C; margin: 0;", "{campus().title()}" }
                for tab in [CampusView::Buildings, CampusView::Areas] {
                    CampusTab { key: "{tab}", tab, active: view() == tab, nav }
                }
            }
            div {
                id: "x-campus-bottom-space",
                style: "width: 100%; display: flex; flex-direction: row; flex-grow: 1; min-height: 0;",
                if view() == CampusView::Buildings {
                    BuildingGrid { campus }
                } else {
                    AreaBrowser { campus, filters, sort, ratings, nav }
                }
            }
        }
    }
}

#[component]
fn CampusTab(tab: CampusView, active: bool, nav: CampusNavigation) -> Element {
    let border = if active { "#FFCB05" } else { "transparent" };
    rsx! {
        button {
            style: "
                border: none;
                border-bottom: 3px solid {border};
                background: transparent;
                font-size: 17px;
                color: #00274C;
                padding: 8px 4px;
                cursor: pointer;
            ",
            onclick: move |_| {
                if !active {
                    nav.go(tab, nav.filters.peek().clone(), *nav.sort.peek());
                }
            },
            "{tab.label()}"
        }
    }
}

#[component]
fn BuildingGrid(campus: ReadSignal<Campus>) -> Element {
    let catalog = Catalog::bundled()?;
    let campus = campus();
    let buildings = catalog.buildings_on_campus(campus);

    rsx! {
        div {
            id: "x-building-grid",
            style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 20px; padding: 24px 28px; overflow-y: auto; align-content: flex-start; width: 100%;",
            if buildings.is_empty() {
                div { style: "color: #6B7280;", "No buildings listed for this campus yet." }
            }
            for building in buildings {
                BuildingCard {
                    key: "{building.id}",
                    area_count: catalog.spaces_in_building(&building.id).len(),
                    building: building.clone(),
                }
            }
        }
    }
}

#[component]
fn AreaBrowser(
    campus: ReadSignal<Campus>,
    filters: ReadSignal<FilterState>,
    sort: ReadSignal<SortKey>,
    ratings: SpaceRatings,
    nav: CampusNavigation,
) -> Element {
    let catalog = Catalog::bundled()?;
    let buildings = use_memo(move || catalog.buildings_on_campus(campus()).into_iter().cloned().collect::<Vec<Building>>());

    let campus_spaces = catalog.spaces_on_campus(campus());
    let total = campus_spaces.len();
    let filtered = filter_spaces(campus_spaces.iter().copied(), &filters.read());
    let ratings_map = ratings.ratings.read();
    let sorted: Vec<StudySpace> = sort_spaces(&filtered, &ratings_map, sort()).into_iter().cloned().collect();
    let loading = (ratings.loading)();

    let on_toggle = Callback::new(move |value: FacetValue| nav.with_filters(|f| f.toggle(value)));
    let on_clear_facet = Callback::new(move |facet: Facet| nav.with_filters(|f| f.clear_facet(facet)));
    let on_clear_all = Callback::new(move |_: ()| nav.with_filters(FilterState::clear_all));
    let on_sort = Callback::new(move |key: SortKey| nav.go(CampusView::Areas, nav.filters.peek().clone(), key));

    rsx! {
        FacetPanel { state: filters, buildings, on_toggle, on_clear_facet, on_clear_all }
        div {
            id: "x-area-list",
            style: "flex-grow: 1; min-width: 0; padding: 4px 28px 28px 28px; overflow-y: auto;",
            ListControls {
                shown: sorted.len(),
                total,
                sort: sort(),
                state: filters,
                buildings,
                on_sort,
                on_toggle,
                on_clear_all,
            }
            if loading {
                LoadingIndicator { label: "Loading ratings..." }
            }
            if sorted.is_empty() {
                div {
                    style: "color: #4B5563; font-size: 16px; padding: 24px 0;",
                    "No study areas match these filters."
                }
            }
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; gap: 20px;",
                for space in sorted {
                    SpaceCard {
                        key: "{space.id}",
                        rating: rating_of(&ratings_map, space.id),
                        building_name: buildings.read().iter().find(|b| b.id == space.building_id).map(|b| b.name.clone()),
                        ratings_loading: loading,
                        space: space.clone(),
                    }
                }
            }
        }
    }
}
