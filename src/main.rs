#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use meetup_web::{
        api::ApiContext, app::App, catalog::Catalog, config::ServerConfig,
        fileserv::file_and_error_handler,
    };

    let config = ServerConfig::from_env()?;
    simple_logger::init_with_level(config.log_level)?;

    let catalog = Catalog::load(&config.catalog_path)?;
    log::info!(
        "loaded catalog from {}: {} cities, {} categories",
        config.catalog_path.display(),
        catalog.cities().len(),
        catalog.categories().len()
    );
    let api = ApiContext::new(catalog, &config);

    // Setting get_configuration(None) means we'll be using cargo-leptos's env values
    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(api.clone()),
            App,
        )
        .fallback(file_and_error_handler)
        .with_state(leptos_options);

    log::info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for a purely client-side app
    // see lib.rs for hydration function instead
}
