use leptos::*;
use leptos_router::use_params_map;

use crate::{
    actions::fetch_category_by_name,
    components::{
        event::PublicEventList,
        header::PublicHeader,
        layout::{ContainerDefault, LayoutDefault},
    },
    store::{use_store, NamedCategory},
    view_model::{map_event_list, EventItem},
};

/// What the category page shows for the category named in the URL.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryView {
    Loading,
    NotFound,
    Events(Vec<EventItem>),
}

impl CategoryView {
    /// `selected` may still hold the result of a previously visited category.
    pub fn for_name(name: &str, selected: Option<&NamedCategory>) -> Self {
        match selected {
            Some(selected) if selected.name == name => match &selected.category {
                Some(category) => {
                    CategoryView::Events(map_event_list(&category.events).unwrap_or_default())
                }
                None => CategoryView::NotFound,
            },
            _ => CategoryView::Loading,
        }
    }
}

/// Category name carried by the `:name` route segment.
pub fn category_name_from_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(name) => name.into_owned(),
        Err(err) => {
            log::warn!("category segment {segment:?} is not valid UTF-8 once decoded: {err}");
            segment.to_string()
        }
    }
}

/// Events of a single category, at `/categories/:name`.
#[component]
pub fn CategoryPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let name = create_memo(move |_| {
        params.with(|p| p.get("name").map(|segment| category_name_from_segment(segment)).unwrap_or_default())
    });

    create_effect(move |_| {
        let name = name.get();
        if !name.is_empty() {
            fetch_category_by_name(store, name);
        }
    });

    let selected = store.selected_category();
    let page = create_memo(move |_| {
        name.with(|name| selected.with(|selected| CategoryView::for_name(name, selected.as_ref())))
    });

    view! {
        <LayoutDefault>
            <PublicHeader/>
            <ContainerDefault>
                {move || match page.get() {
                    CategoryView::Loading => {
                        view! { <p class="category-page--status">"Loading " {name} "..."</p> }
                            .into_view()
                    }
                    CategoryView::NotFound => {
                        view! { <p class="category-page--status">"There is no " {name} " category."</p> }
                            .into_view()
                    }
                    CategoryView::Events(items) if items.is_empty() => {
                        view! { <p class="category-page--status">"No upcoming events."</p> }
                            .into_view()
                    }
                    CategoryView::Events(items) => {
                        view! { <PublicEventList title=name.get() events=Signal::derive(move || items.clone())/> }
                            .into_view()
                    }
                }}
            </ContainerDefault>
        </LayoutDefault>
    }
}
