//! beets-web - Browser front-end for a beets music library
//!
//! Browse, search and filter the library, drill into items, run `beet`
//! commands, trigger imports, and inspect or edit the beets configuration,
//! all against the beets HTTP API.

pub mod app_service;
pub mod pages;

use app_service::AppService;
use beets_core::ClientConfig;
use dioxus::prelude::*;
use pages::{AppLayout, Commands, Import, Library, Settings};
use tracing::debug;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
/// Tailwind's play CDN compiles the utility classes used by the components
/// at load time.
pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Library {},
    #[route("/commands")]
    Commands {},
    #[route("/import")]
    Import {},
    #[route("/settings")]
    Settings {},
}

/// Startup configuration from the page URL: the API defaults to the page's
/// origin and the query string may override it.
pub fn config_from_window() -> ClientConfig {
    let Some(location) = web_sys_x::window().map(|w| w.location()) else {
        return ClientConfig::default();
    };
    let origin = location.origin().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    ClientConfig::from_location(&origin, &search)
}

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let config = use_context::<ClientConfig>();
    let app_service = use_hook(move || AppService::new(config));
    use_context_provider(|| app_service.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
