use cfg_if::cfg_if;
use leptos::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
    cfg_if! { if #[cfg(feature = "ssr")] {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }}

    view! { <h1>"Uh oh!" <br/> "We couldn't find that page!"</h1> }
}
