//! Fetch actions. Each one runs through the query client, so identical
//! requests in flight are shared and recent responses come from cache, then
//! dispatches the result into the [`Store`].
//!
//! Actions are fire-and-forget: callers observe results through the store.

use std::future::Future;

use leptos::*;
use leptos_query::{use_query_client, QueryKey, QueryValue};

use crate::{
    api::{get_categories, get_category_by_name, get_cities, get_nearest_events},
    model::City,
    store::{Action, GeoKey, Store},
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AllCities;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AllCategories;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CategoryName(String);

pub fn fetch_city_list(store: Store) {
    fetch_into_store(
        "cities",
        AllCities,
        |_| get_cities(),
        move |cities| store.dispatch(Action::NearestCitiesLoaded(cities)),
    );
}

pub fn select_city(store: Store, city: City) {
    log::info!("selected city {} ({})", city.name, city.id);
    store.dispatch(Action::SelectCity(city));
}

pub fn fetch_nearest_event_list(store: Store, latitude: f64, longitude: f64) {
    let origin = GeoKey::new(latitude, longitude);
    store.dispatch(Action::NearestEventsRequested(origin));
    fetch_into_store(
        "nearest events",
        origin,
        |origin: GeoKey| get_nearest_events(origin.latitude(), origin.longitude()),
        move |events| store.dispatch(Action::NearestEventsLoaded { origin, events }),
    );
}

pub fn fetch_category_list(store: Store) {
    fetch_into_store(
        "categories",
        AllCategories,
        |_| get_categories(),
        move |categories| store.dispatch(Action::CategoriesLoaded(categories)),
    );
}

pub fn fetch_category_by_name(store: Store, name: String) {
    fetch_into_store(
        "category by name",
        CategoryName(name.clone()),
        |key: CategoryName| get_category_by_name(key.0),
        move |category| store.dispatch(Action::CategoryLoaded { name, category }),
    );
}

fn fetch_into_store<K, T, Fu>(
    label: &'static str,
    key: K,
    fetcher: impl Fn(K) -> Fu + 'static,
    on_loaded: impl FnOnce(T) + 'static,
) where
    K: QueryKey + 'static,
    T: Clone + 'static,
    Result<T, ServerFnError>: QueryValue + 'static,
    Fu: Future<Output = Result<T, ServerFnError>> + 'static,
{
    let client = use_query_client();
    log::debug!("fetching {label} for {key:?}");

    spawn_local(async move {
        let state = client.fetch_query(key, fetcher).await;
        match state.data() {
            Some(Ok(value)) => on_loaded(value.clone()),
            Some(Err(error)) => log::error!("failed to fetch {label}: {error}"),
            None => log::warn!("{label} query finished without data"),
        }
    });
}
