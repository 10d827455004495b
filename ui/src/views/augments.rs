use dioxus::prelude::*;

use gateway::SharedGateway;

use crate::core::fetch::{QueryState, RequestSeq};
use crate::core::format;
use crate::core::projection::{sort_by_metric_desc, AugmentBoardRow, RateMetric};
use crate::queries;

#[component]
pub fn Augments() -> Element {
    let gateway = use_context::<SharedGateway>();
    let mut bloodlines = use_signal(|| QueryState::<Vec<String>>::Idle);
    // None is the "All" sentinel: the unfiltered stats variant.
    let mut selected = use_signal(|| Option::<String>::None);
    let mut metric = use_signal(RateMetric::default);
    let mut board = use_signal(|| QueryState::<Vec<AugmentBoardRow>>::Idle);
    let mut seq = use_signal(RequestSeq::default);

    // Filter options load once; the board reloads per filter change below.
    use_future({
        let gateway = gateway.clone();
        move || {
            let gateway = gateway.clone();
            let mut bloodlines = bloodlines;
            async move {
                bloodlines.set(QueryState::Loading);
                match queries::load_bloodlines(gateway.as_ref()).await {
                    Ok(names) => bloodlines.set(QueryState::Ready(names)),
                    Err(message) => bloodlines.set(QueryState::Failed(message)),
                }
            }
        }
    });

    use_effect(move || {
        let scope = selected();
        let ticket = seq.with_mut(|seq| seq.issue());
        board.set(QueryState::Loading);

        let gateway = gateway.clone();
        let mut board = board;
        let seq = seq;
        spawn(async move {
            let outcome = queries::load_augment_board(gateway.as_ref(), scope.as_deref()).await;
            if !seq.with(|seq| seq.is_current(ticket)) {
                return;
            }
            board.set(match outcome {
                Ok(rows) => QueryState::Ready(rows),
                Err(message) => QueryState::Failed(message),
            });
        });
    });

    let options = bloodlines();
    let ranking = metric();
    let snapshot = board();

    rsx! {
        div { class: "page page-augments",
            h1 { "Best Augments by Bloodline" }

            div { class: "filter-bar",
                select {
                    class: "filter-bar__select",
                    onchange: move |evt| {
                        let value = evt.value();
                        selected.set(if value.is_empty() { None } else { Some(value) });
                    },
                    option { value: "", "All bloodlines" }
                    if let Some(names) = options.ready() {
                        for name in names.iter() {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }

                div { class: "filter-bar__metric", role: "group", aria_label: "Ranking metric",
                    button {
                        r#type: "button",
                        class: if ranking == RateMetric::Win { "button button--primary" } else { "button" },
                        onclick: move |_| metric.set(RateMetric::Win),
                        "Win %"
                    }
                    button {
                        r#type: "button",
                        class: if ranking == RateMetric::Place { "button button--primary" } else { "button" },
                        onclick: move |_| metric.set(RateMetric::Place),
                        "Place %"
                    }
                }
            }

            if let QueryState::Failed(message) = &options {
                p { class: "page__error", "⚠️ {message}" }
            }

            match snapshot {
                QueryState::Idle | QueryState::Loading => rsx! {
                    p { class: "page__status", "Loading..." }
                },
                QueryState::Failed(message) => rsx! {
                    p { class: "page__error", "⚠️ {message}" }
                },
                QueryState::Ready(rows) if rows.is_empty() => rsx! {
                    p { class: "page__status", "No data found for the selected filters." }
                },
                QueryState::Ready(rows) => render_board(rows, ranking),
            }
        }
    }
}

fn render_board(mut rows: Vec<AugmentBoardRow>, metric: RateMetric) -> Element {
    sort_by_metric_desc(&mut rows, metric);

    rsx! {
        table { class: "data-table",
            thead {
                tr {
                    th { "CPU Augment" }
                    th { "RAM Augment" }
                    th { "Hydraulic Augment" }
                    th { "Races" }
                    th { "Wins" }
                    th { "Places" }
                    th { "Win %" }
                    th { "Place %" }
                }
            }
            tbody {
                for (index, row) in rows.into_iter().enumerate() {
                    tr { key: "{index}",
                        td { "{row.cpu_augment}" }
                        td { "{row.ram_augment}" }
                        td { "{row.hydraulic_augment}" }
                        td { "{row.races}" }
                        td { "{row.wins}" }
                        td { "{row.places}" }
                        td { {format::format_rate(row.win_rate)} }
                        td { {format::format_rate(row.place_rate)} }
                    }
                }
            }
        }
    }
}
