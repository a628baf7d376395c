use leptos::*;

use crate::{actions::select_city, store::use_store};

/// Location picker for the home page. Picking a city replaces the selection
/// in the store, which in turn refetches the nearest events.
#[component]
pub fn PublicSearchBar() -> impl IntoView {
    let store = use_store();
    let cities = store.nearest_cities();
    let selected = store.selected_city();

    let on_change = move |event: ev::Event| {
        let id = event_target_value(&event);
        let city = cities.with_untracked(|cities| cities.iter().find(|c| c.id == id).cloned());
        match city {
            Some(city) => select_city(store, city),
            None => log::warn!("picked unknown city {id:?}"),
        }
    };

    view! {
        <div class="public-search-bar">
            <label for="city-picker">"Events near"</label>
            <select id="city-picker" on:change=on_change>
                <For
                    each=move || cities.get()
                    key=|city| city.id.clone()
                    children=move |city| {
                        let id = city.id.clone();
                        let is_selected = move || {
                            selected.with(|s| s.as_ref().is_some_and(|s| s.id == id))
                        };
                        view! {
                            <option value=city.id.clone() prop:selected=is_selected>
                                {format!("{}, {}", city.name, city.country_abbr)}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
