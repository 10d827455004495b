use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know the platform's `Route` enum.
///
/// If a builder is registered, `AppNavbar` renders its own nav from the
/// supplied links; otherwise it falls back to any raw `children` passed.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub horses: fn(label: &str) -> Element,
    pub augments: fn(label: &str) -> Element,
    pub stables: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|builder| {
        let home = (builder.home)("Home");
        let horses = (builder.horses)("Horses");
        let augments = (builder.augments)("Augments");
        let stables = (builder.stables)("Stables");

        rsx! {
            nav { class: "navbar__links",
                {home}
                {horses}
                {augments}
                {stables}
            }
        }
        .expect("AppNavbar: rsx render failed")
    });

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Paddock" }
                    }
                    span { class: "navbar__brand-subtitle", "racing stats browser" }
                }

                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }
            }
        }
    }
}
