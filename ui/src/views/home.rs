use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "Paddock" }
            p { "Statistics browser for the racing sim: every number lives in the hosted store, this app just asks good questions." }

            ul { class: "page-home__features",
                li { "Search horses and read a full race history with a finish-time trend." }
                li { "Rank augment loadouts by win or place rate, overall or per bloodline." }
                li { "Find stables and browse their rosters." }
            }
            p { class: "page-home__cta",
                "Pick a section from the navigation above to start."
            }
        }
    }
}
