use dioxus::prelude::*;

use gateway::{SharedGateway, StableHorseRow};

use crate::components::entity_links;
use crate::core::fetch::{QueryState, RequestSeq};
use crate::core::format;
use crate::queries;

#[component]
pub fn StableDetail(stable_name: ReadOnlySignal<String>) -> Element {
    let gateway = use_context::<SharedGateway>();
    let mut roster = use_signal(|| QueryState::<Vec<StableHorseRow>>::Idle);
    let mut seq = use_signal(RequestSeq::default);

    use_effect(move || {
        let name = stable_name();
        let ticket = seq.with_mut(|seq| seq.issue());
        roster.set(QueryState::Loading);

        let gateway = gateway.clone();
        let mut roster = roster;
        let seq = seq;
        spawn(async move {
            let outcome = queries::load_stable_roster(gateway.as_ref(), &name).await;
            if !seq.with(|seq| seq.is_current(ticket)) {
                return;
            }
            roster.set(match outcome {
                Ok(horses) => QueryState::Ready(horses),
                Err(message) => QueryState::Failed(message),
            });
        });
    });

    let name = stable_name();
    let snapshot = roster();

    rsx! {
        div { class: "page page-stable-detail",
            {entity_links::stable_index_link("← Back to stable search")}

            h1 { "Stable: {name}" }

            match snapshot {
                QueryState::Idle | QueryState::Loading => rsx! {
                    p { class: "page__status", "Loading horses..." }
                },
                QueryState::Failed(message) => rsx! {
                    p { class: "page__error", "⚠️ {message}" }
                },
                QueryState::Ready(horses) if horses.is_empty() => rsx! {
                    p { class: "page__status", "No horses found in this stable." }
                },
                QueryState::Ready(horses) => rsx! {
                    table { class: "data-table",
                        thead {
                            tr {
                                th { "Horse Name" }
                                th { "Bloodline" }
                                th { "Generation" }
                                th { "Rating" }
                                th { "Earnings" }
                            }
                        }
                        tbody {
                            for horse in horses {
                                tr { key: "{horse.horse_id}",
                                    td {
                                        {entity_links::horse_link(&horse.horse_id, &horse.horse_name)}
                                    }
                                    td { "{horse.bloodline}" }
                                    td { "{horse.generation}" }
                                    td { "{horse.rating}" }
                                    td { {format::format_money(horse.earnings)} }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
