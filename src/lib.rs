//! Public landing page of a Meetup-style events site, built with Leptos.
//!
//! The page reads from a single [`store::Store`], asks for data through the
//! fetch [`actions`], and renders lists derived by the pure [`view_model`]
//! functions. Remote data is served by the [`api`] server functions.

use cfg_if::cfg_if;

pub mod actions;
pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod derived;
pub mod error_template;
pub mod model;
pub mod pages;
pub mod store;
pub mod view_model;

cfg_if! { if #[cfg(feature = "ssr")] {
    pub mod fileserv;
}}

cfg_if! { if #[cfg(feature = "hydrate")] {
    use wasm_bindgen::prelude::wasm_bindgen;

    #[wasm_bindgen]
    pub fn hydrate() {
        use crate::app::*;
        _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();
        leptos::mount_to_body(App);
    }
}}
