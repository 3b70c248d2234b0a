use std::rc::Rc;
use std::sync::Arc;

use api_client::{ApiClient, ApiConfig, CachedReviewSource};
use dioxus::{logger::tracing, prelude::*};

use crate::api::identity::ClerkSession;

/// Clients shared by every page.
#[derive(Clone)]
pub struct AppServices {
    pub client: ApiClient,
    /// Review lists shown on detail pages; invalidated after posting.
    pub reviews: Rc<CachedReviewSource<ApiClient>>,
}

impl AppServices {
    pub fn from_env() -> Self {
        let config = ApiConfig::from_env();
        tracing::info!("review service at {}", config.base_url());
        let client = ApiClient::new(config, Arc::new(ClerkSession));
        Self { reviews: Rc::new(CachedReviewSource::new(client.clone())), client }
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}
