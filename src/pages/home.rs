use leptos::*;

use crate::{
    actions::{fetch_category_list, fetch_nearest_event_list},
    components::{
        banner::PublicBanner,
        category::CategoryList,
        event::PublicEventList,
        header::PublicHeader,
        layout::{ContainerDefault, LayoutDefault},
        search_bar::PublicSearchBar,
    },
    derived::{DerivedList, FillPolicy},
    model::City,
    store::{use_store, AppState, Store},
    view_model::{genre_events, map_category_list, map_event_list, CategoryItem, EventItem, Genre},
};

/// Where the home page is in its data lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeStatus {
    /// No city selected yet.
    Idle,
    /// A city is selected but no nearby events have been mapped.
    FetchingNearest,
    Populated,
}

/// Local derived state of the home page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeModel {
    pub nearest_events: DerivedList<EventItem>,
    pub tech_events: DerivedList<EventItem>,
    pub film_events: DerivedList<EventItem>,
    pub categories: DerivedList<CategoryItem>,
    city: Option<City>,
}

impl Default for HomeModel {
    fn default() -> Self {
        Self {
            nearest_events: DerivedList::new(FillPolicy::Track),
            tech_events: DerivedList::new(FillPolicy::Once),
            film_events: DerivedList::new(FillPolicy::Once),
            categories: DerivedList::new(FillPolicy::Once),
            city: None,
        }
    }
}

impl HomeModel {
    /// Brings every derived list up to date with `state`.
    /// Returns whether anything visible changed.
    pub fn sync(&mut self, state: &AppState) -> bool {
        let mut changed = false;

        if self.city != state.city.selected {
            self.city = state.city.selected.clone();
            changed = true;
        }

        let nearest = &state.event.nearest_events;
        changed |= self
            .nearest_events
            .refresh(nearest.version(), || map_event_list(nearest.get()));

        let categories = &state.category.categories;
        for (genre, list) in [
            (Genre::Tech, &mut self.tech_events),
            (Genre::Film, &mut self.film_events),
        ] {
            changed |= list.refresh(categories.version(), || {
                match genre_events(categories.get(), genre) {
                    Some(events) => map_event_list(events),
                    None => {
                        if !categories.get().is_empty() {
                            log::debug!("no {} category, skipping its section", genre.name());
                        }
                        None
                    }
                }
            });
        }

        changed |= self
            .categories
            .refresh(categories.version(), || map_category_list(categories.get()));

        changed
    }

    pub fn status(&self) -> HomeStatus {
        match (&self.city, self.nearest_events.is_empty()) {
            (None, _) => HomeStatus::Idle,
            (Some(_), true) => HomeStatus::FetchingNearest,
            (Some(_), false) => HomeStatus::Populated,
        }
    }

    /// Heading of the nearby events section.
    pub fn nearest_title(&self) -> String {
        match &self.city {
            Some(city) => format!("Event near {}, {}", city.name, city.country_abbr),
            None => "Event near you".to_string(),
        }
    }
}

/// `(latitude, longitude)` to fetch nearby events for.
pub fn nearest_fetch_origin(city: Option<&City>) -> Option<(f64, f64)> {
    city.map(|c| (c.location.latitude(), c.location.longitude()))
}

/// Wires the home page to the store: `fetch_categories` runs once, `fetch_nearest`
/// runs with `(latitude, longitude)` whenever the selected city changes, and the
/// returned model follows the store.
pub fn create_home_model(
    store: Store,
    fetch_categories: impl Fn() + 'static,
    fetch_nearest: impl Fn(f64, f64) + 'static,
) -> RwSignal<HomeModel> {
    let model = create_rw_signal(HomeModel::default());

    create_effect(move |_| fetch_categories());

    let selected_city = store.selected_city();
    create_effect(move |_| {
        let city = selected_city.get();
        if let Some((latitude, longitude)) = nearest_fetch_origin(city.as_ref()) {
            fetch_nearest(latitude, longitude);
        }
    });

    create_effect(move |previous: Option<HomeStatus>| {
        let changed = store
            .with(|state| model.try_update_untracked(|m| m.sync(state)))
            .unwrap_or(false);
        if changed {
            model.update(|_| {});
        }

        let status = model.with_untracked(HomeModel::status);
        if previous != Some(status) {
            log::debug!("home status {status:?}");
        }
        status
    });

    model
}

/// Public landing page.
#[component]
pub fn Home() -> impl IntoView {
    let store = use_store();
    let model = create_home_model(
        store,
        move || fetch_category_list(store),
        move |latitude, longitude| fetch_nearest_event_list(store, latitude, longitude),
    );

    let nearest = Signal::derive(move || model.with(|m| m.nearest_events.items().to_vec()));
    let tech = Signal::derive(move || model.with(|m| m.tech_events.items().to_vec()));
    let film = Signal::derive(move || model.with(|m| m.film_events.items().to_vec()));
    let categories = Signal::derive(move || model.with(|m| m.categories.items().to_vec()));
    let nearest_title = Signal::derive(move || model.with(HomeModel::nearest_title));

    view! {
        <LayoutDefault>
            <PublicHeader/>
            <ContainerDefault>
                <PublicBanner/>
                <PublicSearchBar/>
                <Show when=move || !nearest.with(Vec::is_empty)>
                    <PublicEventList title=nearest_title events=nearest/>
                </Show>
                <Show when=move || !tech.with(Vec::is_empty)>
                    <PublicEventList title=Genre::Tech.name().to_string() events=tech/>
                </Show>
                <Show when=move || !film.with(Vec::is_empty)>
                    <PublicEventList title=Genre::Film.name().to_string() events=film/>
                </Show>
                <CategoryList categories title="Browse events by category"/>
            </ContainerDefault>
        </LayoutDefault>
    }
}
