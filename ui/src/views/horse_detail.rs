use dioxus::prelude::*;

use gateway::SharedGateway;

use crate::components::TrendChart;
use crate::core::fetch::{QueryState, RequestSeq};
use crate::core::{format, trend};
use crate::queries::{self, HorseBundle};

#[component]
pub fn HorseDetail(horse_id: ReadOnlySignal<String>) -> Element {
    let gateway = use_context::<SharedGateway>();
    let mut state = use_signal(|| QueryState::<Option<HorseBundle>>::Idle);
    let mut seq = use_signal(RequestSeq::default);

    // Reruns whenever the route param changes; the ticket retires any
    // fetch still in flight for the previous horse.
    use_effect(move || {
        let id = horse_id();
        let ticket = seq.with_mut(|seq| seq.issue());
        state.set(QueryState::Loading);

        let gateway = gateway.clone();
        let mut state = state;
        let seq = seq;
        spawn(async move {
            let outcome = queries::load_horse(gateway.as_ref(), &id).await;
            if !seq.with(|seq| seq.is_current(ticket)) {
                return;
            }
            state.set(match outcome {
                Ok(bundle) => QueryState::Ready(bundle),
                Err(message) => QueryState::Failed(message),
            });
        });
    });

    let snapshot = state();

    rsx! {
        main { class: "page page-horse-detail",
            match snapshot {
                QueryState::Idle | QueryState::Loading => rsx! {
                    p { class: "page__status", "Loading horse details..." }
                },
                QueryState::Failed(message) => rsx! {
                    p { class: "page__error", "⚠️ {message}" }
                },
                QueryState::Ready(None) => rsx! {
                    p { class: "page__status", "Horse not found." }
                },
                QueryState::Ready(Some(bundle)) => render_bundle(&bundle),
            }
        }
    }
}

fn render_bundle(bundle: &HorseBundle) -> Element {
    let profile = &bundle.profile;
    let summary = &bundle.summary;

    let times: Vec<f64> = bundle.races.iter().map(|race| race.finish_time).collect();
    let fit = trend::linear_fit(&times);
    let fitted = fit.map(|fit| trend::fitted(&fit, times.len()));
    let trend_note = fit
        .map(|fit| format!("Trend: {:+.2} s per race", fit.slope))
        .unwrap_or_else(|| "Trend needs at least two races".to_string());

    rsx! {
        h1 { "🐎 {profile.horse_name}" }

        section { class: "detail-card",
            h2 { "Profile Summary" }
            div { class: "detail-grid detail-grid--two",
                div { strong { "Bloodline: " } "{profile.bloodline}" }
                div { strong { "Generation: " } "{profile.generation}" }
                div { strong { "Gender: " } "{profile.gender}" }
                div { strong { "Overall Rating: " } "{profile.rating}" }
                div { strong { "Speed Rating: " } "{profile.speed_rating}" }
                div { strong { "Sprint Rating: " } "{profile.sprint_rating}" }
                div { strong { "Endurance Rating: " } "{profile.endurance_rating}" }
            }
        }

        section { class: "detail-card",
            h2 { "Current Stats" }
            div { class: "detail-grid detail-grid--three",
                div {
                    strong { "Average Finish Position: " }
                    {format::format_optional(summary.average_finish, 2)}
                }
                div {
                    strong { "Win Percentage: " }
                    {format::format_rate(summary.win_rate)}
                }
                div {
                    strong { "Total Earnings: " }
                    {format::format_money(summary.total_earnings)}
                }
            }
        }

        section { class: "detail-card",
            h2 { "Finish Time Trend" }
            TrendChart { values: times, fitted: fitted }
            p { class: "page__hint", "{trend_note}" }
        }

        section { class: "detail-card",
            h2 { "Race History" }
            if bundle.races.is_empty() {
                p { class: "page__status", "No races recorded for this horse." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Race" }
                            th { "Date" }
                            th { "Finish" }
                            th { "Time" }
                            th { "Earnings" }
                            th { "CPU" }
                            th { "RAM" }
                            th { "Hydraulic" }
                        }
                    }
                    tbody {
                        for race in bundle.races.iter() {
                            tr { key: "{race.race_id}",
                                td { "{race.race_id}" }
                                td { {race.race_date.clone().unwrap_or_else(|| "—".to_string())} }
                                td { "{race.finish_position}" }
                                td { {format::format_seconds(race.finish_time)} }
                                td { {format::format_money(race.earnings)} }
                                td { "{race.cpu_augment}" }
                                td { "{race.ram_augment}" }
                                td { "{race.hydraulic_augment}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
