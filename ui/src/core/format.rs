//! Formatting helpers for presenting aggregates.

/// Rates derived from zero races carry no value and render as a dash.
pub fn format_rate(value: Option<f64>) -> String {
    match value {
        Some(rate) => format!("{rate:.2}%"),
        None => "—".to_string(),
    }
}

pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

pub fn format_seconds(value: f64) -> String {
    format!("{value:.2} s")
}

pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(value) => format!("{value:.decimals$}"),
        None => "—".to_string(),
    }
}
