use dioxus::prelude::*;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 220.0;
const MARGIN: f64 = 18.0;

/// Finish-time series with an optional fitted overlay, drawn as an SVG
/// polyline. `values` are chronological; `fitted` is the same length when
/// present. A single race renders as a lone marker with no lines.
#[component]
pub fn TrendChart(values: Vec<f64>, fitted: Option<Vec<f64>>) -> Element {
    if values.is_empty() {
        return rsx! {
            p { class: "trend-chart__placeholder", "No races recorded yet." }
        };
    }

    let mut low = f64::INFINITY;
    let mut high = f64::NEG_INFINITY;
    for value in values.iter().chain(fitted.iter().flatten()) {
        low = low.min(*value);
        high = high.max(*value);
    }
    // A flat series still needs a non-zero span to land mid-chart.
    if (high - low).abs() < f64::EPSILON {
        low -= 1.0;
        high += 1.0;
    }

    let count = values.len();
    let x_at = move |index: usize| {
        if count == 1 {
            WIDTH / 2.0
        } else {
            MARGIN + index as f64 / (count - 1) as f64 * (WIDTH - 2.0 * MARGIN)
        }
    };
    let y_at = move |value: f64| {
        HEIGHT - MARGIN - (value - low) / (high - low) * (HEIGHT - 2.0 * MARGIN)
    };

    let series_points = polyline_points(&values, x_at, y_at);
    let trend_points = fitted
        .as_ref()
        .filter(|fitted| fitted.len() >= 2)
        .map(|fitted| polyline_points(fitted, x_at, y_at));
    let markers: Vec<(String, String)> = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            (
                format!("{:.1}", x_at(index)),
                format!("{:.1}", y_at(*value)),
            )
        })
        .collect();

    rsx! {
        figure { class: "trend-chart",
            svg {
                class: "trend-chart__plot",
                view_box: "0 0 {WIDTH} {HEIGHT}",
                role: "img",
                "aria-label": "Finish time trend",
                if count >= 2 {
                    polyline { class: "trend-chart__series", fill: "none", points: "{series_points}" }
                }
                if let Some(points) = trend_points {
                    polyline { class: "trend-chart__trendline", fill: "none", points: "{points}" }
                }
                for (cx, cy) in markers {
                    circle { class: "trend-chart__marker", cx: "{cx}", cy: "{cy}", r: "4" }
                }
            }
            figcaption { class: "trend-chart__caption",
                "Finish times, oldest to newest. Lower is faster."
            }
        }
    }
}

fn polyline_points(
    values: &[f64],
    x_at: impl Fn(usize) -> f64,
    y_at: impl Fn(f64) -> f64,
) -> String {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| format!("{:.1},{:.1}", x_at(index), y_at(*value)))
        .collect::<Vec<_>>()
        .join(" ")
}
