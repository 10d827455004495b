use dioxus::prelude::*;

use gateway::SharedGateway;

use crate::components::entity_links;
use crate::core::fetch::{QueryState, RequestSeq};
use crate::core::timing;
use crate::queries;

const DEBOUNCE_MS: u64 = 250;

#[component]
pub fn StableSearch() -> Element {
    let gateway = use_context::<SharedGateway>();
    let mut term = use_signal(String::new);
    let mut results = use_signal(|| QueryState::<Vec<String>>::Idle);
    let mut seq = use_signal(RequestSeq::default);

    let mut run_search = {
        let gateway = gateway.clone();
        move |raw: String| {
            term.set(raw.clone());
            let ticket = seq.with_mut(|seq| seq.issue());

            let trimmed = raw.trim().to_string();
            if trimmed.is_empty() {
                results.set(QueryState::Idle);
                return;
            }

            results.set(QueryState::Loading);
            let gateway = gateway.clone();
            let mut results = results;
            let seq = seq;
            spawn(async move {
                timing::sleep_ms(DEBOUNCE_MS).await;
                if !seq.with(|seq| seq.is_current(ticket)) {
                    return;
                }

                let outcome = queries::search_stables(gateway.as_ref(), &trimmed).await;
                if !seq.with(|seq| seq.is_current(ticket)) {
                    return;
                }

                results.set(match outcome {
                    Ok(stables) => QueryState::Ready(stables),
                    Err(message) => QueryState::Failed(message),
                });
            });
        }
    };

    let state = results();

    rsx! {
        section { class: "page page-stable-search",
            h1 { "Search Stables" }

            input {
                r#type: "text",
                class: "search-input",
                placeholder: "Type stable name...",
                value: "{term}",
                oninput: move |evt| run_search(evt.value()),
            }

            match state {
                QueryState::Idle => rsx! {
                    p { class: "page__hint", "Start typing to find a stable." }
                },
                QueryState::Loading => rsx! {
                    p { class: "page__status", "Loading..." }
                },
                QueryState::Failed(message) => rsx! {
                    p { class: "page__error", "⚠️ {message}" }
                },
                QueryState::Ready(stables) if stables.is_empty() => rsx! {
                    p { class: "page__status", "No stables found for \"{term}\"." }
                },
                QueryState::Ready(stables) => rsx! {
                    ul { class: "result-list",
                        for stable in stables {
                            li { key: "{stable}", class: "result-list__item",
                                {entity_links::stable_link(&stable, &stable)}
                            }
                        }
                    }
                },
            }
        }
    }
}
