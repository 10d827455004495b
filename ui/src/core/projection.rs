//! Display-ready aggregation over raw result rows.
//!
//! Everything here is pure: rows in, projections out. The hosted store
//! does the heavy grouping when its stored procedures are reachable;
//! these helpers reproduce the same numbers client-side for the fallback
//! path and derive the percentages either way, so both variants display
//! identically.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use gateway::{AugmentRunRow, AugmentStatRow, RaceRow};

/// `count / races * 100`, or the sentinel for an empty aggregate.
pub fn rate(count: u64, races: u64) -> Option<f64> {
    if races == 0 {
        None
    } else {
        Some(count as f64 / races as f64 * 100.0)
    }
}

/// Collapse rows sharing a key to the first-seen row per key.
/// Order-preserving and idempotent.
pub fn dedup_by_key<T, K, F>(rows: Vec<T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    rows.into_iter().filter(|row| seen.insert(key(row))).collect()
}

/// Which rate the augment leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateMetric {
    #[default]
    Win,
    Place,
}

/// One leaderboard line with both rates derived from its counts.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentBoardRow {
    pub cpu_augment: String,
    pub ram_augment: String,
    pub hydraulic_augment: String,
    pub races: u64,
    pub wins: u64,
    pub places: u64,
    pub win_rate: Option<f64>,
    pub place_rate: Option<f64>,
}

impl AugmentBoardRow {
    pub fn from_stat(stat: AugmentStatRow) -> Self {
        let win_rate = rate(stat.wins, stat.races);
        let place_rate = rate(stat.places, stat.races);
        Self {
            cpu_augment: stat.cpu_augment,
            ram_augment: stat.ram_augment,
            hydraulic_augment: stat.hydraulic_augment,
            races: stat.races,
            wins: stat.wins,
            places: stat.places,
            win_rate,
            place_rate,
        }
    }

    pub fn metric(&self, metric: RateMetric) -> Option<f64> {
        match metric {
            RateMetric::Win => self.win_rate,
            RateMetric::Place => self.place_rate,
        }
    }
}

pub fn board_from_stats(stats: Vec<AugmentStatRow>) -> Vec<AugmentBoardRow> {
    stats.into_iter().map(AugmentBoardRow::from_stat).collect()
}

/// Descending by the selected rate; ties keep input order (the sort is
/// stable), and sentinel rates sort below every numeric rate.
pub fn sort_by_metric_desc(rows: &mut [AugmentBoardRow], metric: RateMetric) {
    rows.sort_by(|a, b| cmp_rate_desc(a.metric(metric), b.metric(metric)));
}

fn cmp_rate_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Client-side equivalent of the augment stats procedure: group raw runs
/// by augment triple in first-seen order, counting races, wins, and
/// top-3 places.
pub fn aggregate_augment_runs(runs: &[AugmentRunRow]) -> Vec<AugmentStatRow> {
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();
    let mut stats: Vec<AugmentStatRow> = Vec::new();

    for run in runs {
        let key = (
            run.cpu_augment.clone(),
            run.ram_augment.clone(),
            run.hydraulic_augment.clone(),
        );
        let slot = *index.entry(key).or_insert_with(|| {
            stats.push(AugmentStatRow {
                cpu_augment: run.cpu_augment.clone(),
                ram_augment: run.ram_augment.clone(),
                hydraulic_augment: run.hydraulic_augment.clone(),
                races: 0,
                wins: 0,
                places: 0,
            });
            stats.len() - 1
        });

        let stat = &mut stats[slot];
        stat.races += 1;
        if run.finish_position == 1 {
            stat.wins += 1;
        }
        if run.finish_position <= 3 {
            stat.places += 1;
        }
    }

    stats
}

/// Aggregates for a horse's profile card.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceSummary {
    pub races: u64,
    pub wins: u64,
    pub win_rate: Option<f64>,
    pub average_finish: Option<f64>,
    pub total_earnings: f64,
}

impl RaceSummary {
    pub fn from_rows(rows: &[RaceRow]) -> Self {
        let races = rows.len() as u64;
        let wins = rows.iter().filter(|row| row.finish_position == 1).count() as u64;
        let average_finish = if rows.is_empty() {
            None
        } else {
            let total: u64 = rows.iter().map(|row| u64::from(row.finish_position)).sum();
            Some(total as f64 / rows.len() as f64)
        };
        let total_earnings = rows.iter().map(|row| row.earnings).sum();

        Self {
            races,
            wins,
            win_rate: rate(wins, races),
            average_finish,
            total_earnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(triple: (&str, &str, &str), races: u64, wins: u64, places: u64) -> AugmentStatRow {
        AugmentStatRow {
            cpu_augment: triple.0.to_string(),
            ram_augment: triple.1.to_string(),
            hydraulic_augment: triple.2.to_string(),
            races,
            wins,
            places,
        }
    }

    #[test]
    fn rate_is_exact_for_positive_race_counts() {
        assert_eq!(rate(4, 10), Some(40.0));
        assert_eq!(rate(5, 5), Some(100.0));
        assert_eq!(rate(0, 3), Some(0.0));
    }

    #[test]
    fn rate_over_zero_races_is_the_sentinel() {
        assert_eq!(rate(0, 0), None);
    }

    #[test]
    fn dedup_keeps_first_seen_and_is_idempotent() {
        let rows = vec![(7, "first"), (3, "other"), (7, "second"), (7, "third")];
        let once = dedup_by_key(rows, |row| row.0);
        assert_eq!(once, vec![(7, "first"), (3, "other")]);

        let twice = dedup_by_key(once.clone(), |row| row.0);
        assert_eq!(twice, once);
    }

    #[test]
    fn dedup_never_grows_the_input() {
        let rows = vec![1, 1, 2, 3, 3, 3];
        assert!(dedup_by_key(rows.clone(), |row| *row).len() <= rows.len());
    }

    #[test]
    fn board_sorted_by_win_rate_descending() {
        // (A,B,C) 4/10 = 40% against (D,E,F) 5/5 = 100%.
        let mut rows = board_from_stats(vec![
            stat(("A", "B", "C"), 10, 4, 6),
            stat(("D", "E", "F"), 5, 5, 5),
        ]);
        sort_by_metric_desc(&mut rows, RateMetric::Win);

        assert_eq!(rows[0].cpu_augment, "D");
        assert_eq!(rows[0].win_rate, Some(100.0));
        assert_eq!(rows[1].cpu_augment, "A");
        assert_eq!(rows[1].win_rate, Some(40.0));
    }

    #[test]
    fn sort_is_stable_on_ties_and_puts_sentinels_last() {
        let mut rows = board_from_stats(vec![
            stat(("tie-first", "x", "x"), 10, 5, 5),
            stat(("empty", "x", "x"), 0, 0, 0),
            stat(("tie-second", "x", "x"), 2, 1, 1),
        ]);
        sort_by_metric_desc(&mut rows, RateMetric::Win);

        assert_eq!(rows[0].cpu_augment, "tie-first");
        assert_eq!(rows[1].cpu_augment, "tie-second");
        assert_eq!(rows[2].cpu_augment, "empty");
        assert_eq!(rows[2].win_rate, None);
    }

    #[test]
    fn sort_orders_adjacent_pairs_non_increasing() {
        let mut rows = board_from_stats(vec![
            stat(("a", "x", "x"), 10, 3, 4),
            stat(("b", "x", "x"), 10, 9, 9),
            stat(("c", "x", "x"), 10, 5, 6),
            stat(("d", "x", "x"), 10, 7, 8),
        ]);
        sort_by_metric_desc(&mut rows, RateMetric::Place);

        for pair in rows.windows(2) {
            assert!(pair[0].place_rate >= pair[1].place_rate);
        }
    }

    #[test]
    fn aggregation_groups_by_triple_in_first_seen_order() {
        let run = |triple: (&str, &str, &str), finish: u32| AugmentRunRow {
            cpu_augment: triple.0.to_string(),
            ram_augment: triple.1.to_string(),
            hydraulic_augment: triple.2.to_string(),
            finish_position: finish,
        };
        let runs = vec![
            run(("A", "B", "C"), 1),
            run(("D", "E", "F"), 4),
            run(("A", "B", "C"), 2),
            run(("A", "B", "C"), 9),
        ];

        let stats = aggregate_augment_runs(&runs);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].cpu_augment, "A");
        assert_eq!(stats[0].races, 3);
        assert_eq!(stats[0].wins, 1);
        assert_eq!(stats[0].places, 2);
        assert_eq!(stats[1].races, 1);
        assert_eq!(stats[1].wins, 0);
        assert_eq!(stats[1].places, 0);
    }

    #[test]
    fn summary_of_no_races_uses_sentinels() {
        let summary = RaceSummary::from_rows(&[]);
        assert_eq!(summary.races, 0);
        assert_eq!(summary.win_rate, None);
        assert_eq!(summary.average_finish, None);
        assert_eq!(summary.total_earnings, 0.0);
    }
}
