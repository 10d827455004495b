use std::rc::Rc;

use dioxus::prelude::*;

use gateway::{GatewayConfig, RestGateway, SharedGateway};
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::entity_links::{register_entity_links, EntityLinks};
use ui::components::AppNavbar;
use ui::views::{Augments, Home, HorseDetail, HorseSearch, StableDetail, StableSearch};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/horses")]
    HorseSearch {},
    #[route("/horses/:horse_id")]
    HorseDetail { horse_id: String },
    #[route("/augments")]
    Augments {},
    #[route("/stables")]
    StableSearch {},
    #[route("/stables/:stable_name")]
    StableDetail { stable_name: String },
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_horses(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::HorseSearch {},
        "{label}"
    })
}
fn nav_augments(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Augments {},
        "{label}"
    })
}
fn nav_stables(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::StableSearch {},
        "{label}"
    })
}

fn horse_link(horse_id: &str, label: &str) -> Element {
    rsx!(Link {
        class: "entity-link",
        to: Route::HorseDetail { horse_id: horse_id.to_string() },
        "{label}"
    })
}
fn stable_link(stable_name: &str, label: &str) -> Element {
    rsx!(Link {
        class: "entity-link",
        to: Route::StableDetail { stable_name: stable_name.to_string() },
        "{label}"
    })
}
fn stable_index_link(label: &str) -> Element {
    rsx!(Link {
        class: "button button--ghost",
        to: Route::StableSearch {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        register_nav(NavBuilder {
            home: nav_home,
            horses: nav_horses,
            augments: nav_augments,
            stables: nav_stables,
        });
        register_entity_links(EntityLinks {
            horse: horse_link,
            stable: stable_link,
            stable_index: stable_index_link,
        });
    }

    // One gateway handle for the whole app; views pull it from context so
    // tests can hand them fixtures instead.
    use_context_provider(|| Rc::new(RestGateway::new(GatewayConfig::from_env())) as SharedGateway);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
