use common::building::Campus;
use common::filter_state::FilterState;
use common::sort::SortKey;
use common::study_space::SpaceId;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;
use crate::data_definitions::campus_view::CampusView;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::about_page::AboutPage;
use crate::pages::admin_submissions_page::AdminSubmissionsPage;
use crate::pages::area_detail_page::AreaDetailPage;
use crate::pages::building_page::BuildingPage;
use crate::pages::campus_page::CampusPage;
use crate::pages::favorites_page::FavoritesPage;
use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::submit_page::SubmitPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/campus/:campus/:view/:filters/:sort")]
    CampusPage {
        campus: Campus,
        view: CampusView,
        filters: UrlParam<FilterState>,
        sort: SortKey,
    },


    #[route("/building/:building_id")]
    BuildingPage { building_id: String },


    #[route("/space/:space_id")]
    AreaDetailPage { space_id: SpaceId },


    #[route("/favorites")]
    FavoritesPage {},

    #[route("/submit")]
    SubmitPage {},

    #[route("/admin/submissions")]
    AdminSubmissionsPage {},

    #[route("/about")]
    AboutPage {},

    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },
}

impl Route {
    pub fn campus(campus: Campus) -> Self {
        Self::CampusPage {
            campus,
            view: CampusView::Buildings,
            filters: UrlParam::default(),
            sort: SortKey::Default,
        }
    }

    pub fn campus_areas(campus: Campus, filters: FilterState, sort: SortKey) -> Self {
        Self::CampusPage { campus, view: CampusView::Areas, filters: filters.into(), sort }
    }
}
