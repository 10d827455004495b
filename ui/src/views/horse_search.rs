use dioxus::prelude::*;

use gateway::{HorseSummary, SharedGateway};

use crate::components::entity_links;
use crate::core::fetch::{QueryState, RequestSeq};
use crate::core::timing;
use crate::queries;

/// Wait for the keyboard to settle before hitting the store.
const DEBOUNCE_MS: u64 = 250;

#[component]
pub fn HorseSearch() -> Element {
    let gateway = use_context::<SharedGateway>();
    let mut term = use_signal(String::new);
    let mut results = use_signal(|| QueryState::<Vec<HorseSummary>>::Idle);
    let mut seq = use_signal(RequestSeq::default);

    let mut run_search = {
        let gateway = gateway.clone();
        move |raw: String| {
            term.set(raw.clone());
            // Issuing the ticket first makes any in-flight response stale.
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

                let outcome = queries::search_horses(gateway.as_ref(), &trimmed).await;
                if !seq.with(|seq| seq.is_current(ticket)) {
                    return;
                }

                results.set(match outcome {
                    Ok(horses) => QueryState::Ready(horses),
                    Err(message) => QueryState::Failed(message),
                });
            });
        }
    };

    let state = results();

    rsx! {
        section { class: "page page-horse-search",
            h1 { "Search Horses" }

            input {
                r#type: "text",
                class: "search-input",
                placeholder: "Type a horse name...",
                value: "{term}",
                oninput: move |evt| run_search(evt.value()),
            }

            match state {
                QueryState::Idle => rsx! {
                    p { class: "page__hint", "Start typing to search the field." }
                },
                QueryState::Loading => rsx! {
                    p { class: "page__status", "Loading..." }
                },
                QueryState::Failed(message) => rsx! {
                    p { class: "page__error", "⚠️ {message}" }
                },
                QueryState::Ready(horses) if horses.is_empty() => rsx! {
                    p { class: "page__status", "No horses found for \"{term}\"." }
                },
                QueryState::Ready(horses) => rsx! {
                    ul { class: "result-list",
                        for horse in horses {
                            li { key: "{horse.horse_id}", class: "result-list__item",
                                span { class: "result-list__icon", "🐎 " }
                                {entity_links::horse_link(&horse.horse_id, &horse.horse_name)}
                            }
                        }
                    }
                },
            }
        }
    }
}
