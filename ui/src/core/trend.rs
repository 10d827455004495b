//! Least-squares trend over a horse's finish times.
//!
//! The fit runs over `(i, time)` pairs where `i` is the 0-based race
//! index in chronological order. Chronology is enforced here rather than
//! trusted from the store's order-by, so the fitted overlay is
//! deterministic regardless of response ordering.

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

use gateway::RaceRow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Simple linear regression over `(i, ys[i])`. Returns the sentinel for
/// fewer than two points or a degenerate denominator; a single race
/// renders as a lone point with no trend line.
pub fn linear_fit(ys: &[f64]) -> Option<LinearFit> {
    let n = ys.len();
    if n < 2 {
        return None;
    }

    let n_f = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for (i, y) in ys.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_xx += x * x;
    }

    let denominator = n_f * sum_xx - sum_x * sum_x;
    if denominator.abs() < f64::EPSILON {
        return None;
    }

    let slope = (n_f * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n_f;
    Some(LinearFit { slope, intercept })
}

/// Fitted y-values for indices `0..len`, same length as the input series.
pub fn fitted(fit: &LinearFit, len: usize) -> Vec<f64> {
    (0..len).map(|i| fit.at(i as f64)).collect()
}

/// Stable sort by parsed race date. Rows without a parseable date keep
/// their relative order ahead of dated rows.
pub fn sort_chronological(rows: &mut [RaceRow]) {
    rows.sort_by_key(|row| row.race_date.as_deref().and_then(parse_date));
}

/// The store emits either full RFC 3339 stamps or bare dates.
fn parse_date(raw: &str) -> Option<OffsetDateTime> {
    if let Ok(stamp) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(stamp);
    }
    let date = Date::parse(raw, &format_description!("[year]-[month]-[day]")).ok()?;
    Some(date.with_hms(0, 0, 0).ok()?.assume_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(race_id: &str, race_date: Option<&str>) -> RaceRow {
        RaceRow {
            race_id: race_id.to_string(),
            race_date: race_date.map(str::to_string),
            finish_position: 1,
            earnings: 0.0,
            finish_time: 60.0,
            cpu_augment: "cpu".to_string(),
            ram_augment: "ram".to_string(),
            hydraulic_augment: "hyd".to_string(),
        }
    }

    #[test]
    fn perfectly_linear_input_recovers_its_line() {
        // y = 2x + 1 over x = 0..4.
        let ys: Vec<f64> = (0..5).map(|x| 2.0 * x as f64 + 1.0).collect();
        let fit = linear_fit(&ys).expect("fit");

        assert!((fit.slope - 2.0).abs() < 1e-9);
        assert!((fit.intercept - 1.0).abs() < 1e-9);

        for (fitted_y, y) in fitted(&fit, ys.len()).iter().zip(&ys) {
            assert!((fitted_y - y).abs() < 1e-9);
        }
    }

    #[test]
    fn single_point_has_no_fit() {
        assert_eq!(linear_fit(&[42.0]), None);
        assert_eq!(linear_fit(&[]), None);
    }

    #[test]
    fn constant_series_fits_a_flat_line() {
        let fit = linear_fit(&[3.0, 3.0, 3.0]).expect("fit");
        assert!(fit.slope.abs() < 1e-9);
        assert!((fit.intercept - 3.0).abs() < 1e-9);
    }

    #[test]
    fn chronological_sort_is_stable_and_tolerates_missing_dates() {
        let mut rows = vec![
            row("late", Some("2026-03-09")),
            row("undated-a", None),
            row("early", Some("2026-01-02")),
            row("undated-b", Some("not a date")),
        ];
        sort_chronological(&mut rows);

        let order: Vec<&str> = rows.iter().map(|row| row.race_id.as_str()).collect();
        assert_eq!(order, vec!["undated-a", "undated-b", "early", "late"]);
    }

    #[test]
    fn rfc3339_stamps_order_within_a_day() {
        let mut rows = vec![
            row("evening", Some("2026-03-09T19:30:00Z")),
            row("morning", Some("2026-03-09T08:00:00Z")),
        ];
        sort_chronological(&mut rows);
        assert_eq!(rows[0].race_id, "morning");
    }
}
