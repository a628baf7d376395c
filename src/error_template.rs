use cfg_if::cfg_if;
use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Renders the errors collected by the router or an [`ErrorBoundary`].
#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match outside_errors {
        Some(e) => create_rw_signal(e),
        None => match errors {
            Some(e) => e,
            None => create_rw_signal(Errors::default()),
        },
    };

    // Only the errors we know how to report; anything else is logged.
    let errors: Vec<AppError> = errors
        .get_untracked()
        .into_iter()
        .filter_map(|(_, error)| {
            let app_error = error.downcast_ref::<AppError>().cloned();
            if app_error.is_none() {
                log::error!("unhandled error: {error}");
            }
            app_error
        })
        .collect();

    cfg_if! { if #[cfg(feature = "ssr")] {
        if let (Some(response), Some(first)) =
            (use_context::<leptos_axum::ResponseOptions>(), errors.first())
        {
            response.set_status(first.status_code());
        }
    }}

    view! {
        <h1>{if errors.len() > 1 { "Errors" } else { "Error" }}</h1>
        <For
            each=move || errors.clone().into_iter().enumerate()
            key=|(index, _)| *index
            children=move |(_, error)| {
                let code = error.status_code().to_string();
                let message = error.to_string();
                view! {
                    <h2>{code}</h2>
                    <p>"Error: " {message}</p>
                }
            }
        />
    }
}
