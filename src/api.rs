//! Server functions backing the store's fetch actions.

use std::sync::Arc;

use cfg_if::cfg_if;
use leptos::*;

use crate::{
    catalog::Catalog,
    config::ServerConfig,
    model::{Category, City, Event},
};

/// Server-side state handed to every server function through context.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
    pub nearest_radius_km: f64,
    pub nearest_limit: usize,
}

impl ApiContext {
    pub fn new(catalog: Catalog, config: &ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            nearest_radius_km: config.nearest_radius_km,
            nearest_limit: config.nearest_limit,
        }
    }
}

cfg_if! { if #[cfg(feature = "ssr")] {
    fn api_context() -> Result<ApiContext, ServerFnError> {
        use_context::<ApiContext>()
            .ok_or_else(|| ServerFnError::ServerError("event catalog is not available".to_string()))
    }
}}

#[server(GetCities, "/api")]
pub async fn get_cities() -> Result<Vec<City>, ServerFnError> {
    let context = api_context()?;
    Ok(context.catalog.cities().to_vec())
}

#[server(GetNearestEvents, "/api")]
pub async fn get_nearest_events(latitude: f64, longitude: f64) -> Result<Vec<Event>, ServerFnError> {
    let context = api_context()?;
    let events = context.catalog.nearest_events(
        latitude,
        longitude,
        context.nearest_radius_km,
        context.nearest_limit,
    );
    log::debug!(
        "{} events near ({latitude}, {longitude})",
        events.len()
    );
    Ok(events)
}

#[server(GetCategories, "/api")]
pub async fn get_categories() -> Result<Vec<Category>, ServerFnError> {
    let context = api_context()?;
    Ok(context.catalog.categories().to_vec())
}

#[server(GetCategoryByName, "/api")]
pub async fn get_category_by_name(name: String) -> Result<Option<Category>, ServerFnError> {
    let context = api_context()?;
    Ok(context.catalog.category_by_name(&name).cloned())
}
