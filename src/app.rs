use std::time::Duration;

use leptos::*;
use leptos_meta::*;
use leptos_query::{provide_query_client_with_options, DefaultQueryOptions};
use leptos_router::*;

use crate::{
    actions::fetch_city_list,
    error_template::{AppError, ErrorTemplate},
    pages::{category::CategoryPage, home::Home, not_found::NotFound},
    store::provide_store,
};

/// Root component: shared contexts, the city list, and the routes.
#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_query_client_with_options(DefaultQueryOptions {
        stale_time: Some(Duration::from_secs(60)),
        ..DefaultQueryOptions::default()
    });
    let store = provide_store();

    create_effect(move |_| fetch_city_list(store));

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/meetup-web.css"/>
        <Title text="Meetup"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! { <ErrorTemplate outside_errors/> }.into_view()
        }>
            <ErrorBoundary fallback=|errors| view! { <ErrorTemplate errors/> }>
                <Routes>
                    <Route path="" view=Home/>
                    <Route path="categories/:name" view=CategoryPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </ErrorBoundary>
        </Router>
    }
}
