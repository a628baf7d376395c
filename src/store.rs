//! Global application state and the only way to change it: [`Action`]s.
//!
//! [`AppState::reduce`] is pure; [`Store`] wraps it in a signal and is provided
//! through context, the same way the query client is.

use leptos::*;

use crate::{
    derived::Versioned,
    model::{Category, City, Event},
};

/// A coordinate pair rounded to micro-degrees so it can be hashed and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoKey {
    latitude_e6: i64,
    longitude_e6: i64,
}

impl GeoKey {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude_e6: (latitude * 1e6).round() as i64,
            longitude_e6: (longitude * 1e6).round() as i64,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude_e6 as f64 / 1e6
    }

    pub fn longitude(&self) -> f64 {
        self.longitude_e6 as f64 / 1e6
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CityState {
    pub nearest: Versioned<Vec<City>>,
    pub selected: Option<City>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventState {
    pub nearest_events: Versioned<Vec<Event>>,
    /// Origin of the most recent nearest-events request.
    pub requested: Option<GeoKey>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryState {
    pub categories: Versioned<Vec<Category>>,
    /// Last category looked up by name; `None` inside means no such category.
    pub selected: Option<NamedCategory>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedCategory {
    pub name: String,
    pub category: Option<Category>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub city: CityState,
    pub event: EventState,
    pub category: CategoryState,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    NearestCitiesLoaded(Vec<City>),
    SelectCity(City),
    NearestEventsRequested(GeoKey),
    NearestEventsLoaded { origin: GeoKey, events: Vec<Event> },
    CategoriesLoaded(Vec<Category>),
    CategoryLoaded {
        name: String,
        category: Option<Category>,
    },
}

impl AppState {
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::NearestCitiesLoaded(cities) => {
                if self.city.selected.is_none() {
                    self.city.selected = cities.first().cloned();
                }
                self.city.nearest.set(cities);
            }
            Action::SelectCity(city) => {
                self.city.selected = Some(city);
            }
            Action::NearestEventsRequested(origin) => {
                self.event.requested = Some(origin);
            }
            Action::NearestEventsLoaded { origin, events } => {
                if self.event.requested.is_some_and(|requested| requested != origin) {
                    log::debug!("dropping nearest events for stale origin {origin:?}");
                    return;
                }
                self.event.nearest_events.set(events);
            }
            Action::CategoriesLoaded(categories) => {
                self.category.categories.set(categories);
            }
            Action::CategoryLoaded { name, category } => {
                self.category.selected = Some(NamedCategory { name, category });
            }
        }
    }
}

/// Reactive handle to the [`AppState`].
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: create_rw_signal(state),
        }
    }

    pub fn dispatch(&self, action: Action) {
        log::debug!("dispatch {}", action_name(&action));
        self.state.update(|state| state.reduce(action));
    }

    /// Reads the state and subscribes the running effect to it.
    pub fn with<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with(f)
    }

    pub fn with_untracked<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        self.state.with_untracked(f)
    }

    /// A memoized slice of the state.
    pub fn select<T: PartialEq + Clone + 'static>(
        &self,
        selector: impl Fn(&AppState) -> T + 'static,
    ) -> Memo<T> {
        let state = self.state;
        create_memo(move |_| state.with(&selector))
    }

    pub fn selected_city(&self) -> Memo<Option<City>> {
        self.select(|s| s.city.selected.clone())
    }

    pub fn nearest_cities(&self) -> Memo<Vec<City>> {
        self.select(|s| s.city.nearest.get().clone())
    }

    pub fn selected_category(&self) -> Memo<Option<NamedCategory>> {
        self.select(|s| s.category.selected.clone())
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::NearestCitiesLoaded(_) => "NearestCitiesLoaded",
        Action::SelectCity(_) => "SelectCity",
        Action::NearestEventsRequested(_) => "NearestEventsRequested",
        Action::NearestEventsLoaded { .. } => "NearestEventsLoaded",
        Action::CategoriesLoaded(_) => "CategoriesLoaded",
        Action::CategoryLoaded { .. } => "CategoryLoaded",
    }
}

/// Provides an empty [`Store`] to the current scope.
pub fn provide_store() -> Store {
    let store = Store::new(AppState::default());
    provide_context(store);
    store
}

/// Retrieves the [`Store`] from the current scope.
pub fn use_store() -> Store {
    use_context::<Store>().expect("Store missing. Call provide_store() in App.")
}
