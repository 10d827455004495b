//! In-memory gateway for tests.
//!
//! `FixtureGateway` holds fully materialized `race_results` rows and
//! answers every trait operation by scanning them, so loaders exercise
//! the same dup-bearing result shapes the hosted store produces. RPC
//! operations simulate their stored procedures (distinct horses, grouped
//! augment counts); any operation can be made to fail by name to drive
//! the fallback paths.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::rows::{
    AugmentRunRow, AugmentStatRow, HorseProfile, HorseSummary, RaceRow, StableHorseRow,
};
use crate::{GatewayError, GatewayResult, StatsGateway};

/// One fully materialized row of the external `race_results` collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureRow {
    pub horse_id: String,
    pub horse_name: String,
    pub bloodline: String,
    pub generation: u32,
    pub gender: String,
    pub rating: f64,
    pub speed_rating: f64,
    pub sprint_rating: f64,
    pub endurance_rating: f64,
    pub stable_name: String,
    pub race_id: String,
    pub race_date: Option<String>,
    pub finish_position: u32,
    pub earnings: f64,
    pub finish_time: f64,
    pub cpu_augment: String,
    pub ram_augment: String,
    pub hydraulic_augment: String,
}

impl FixtureRow {
    /// A plausible winning run; tests override the fields they care about.
    pub fn sample(horse_id: &str, horse_name: &str) -> Self {
        Self {
            horse_id: horse_id.to_string(),
            horse_name: horse_name.to_string(),
            bloodline: "Szabo".to_string(),
            generation: 3,
            gender: "mare".to_string(),
            rating: 3.4,
            speed_rating: 3.1,
            sprint_rating: 2.8,
            endurance_rating: 3.6,
            stable_name: "Iron Paddock".to_string(),
            race_id: "race-1".to_string(),
            race_date: None,
            finish_position: 1,
            earnings: 120.0,
            finish_time: 62.5,
            cpu_augment: "Overclock".to_string(),
            ram_augment: "Cache Burst".to_string(),
            hydraulic_augment: "Twin Piston".to_string(),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct FixtureGateway {
    rows: Vec<FixtureRow>,
    failing: HashSet<&'static str>,
}

impl FixtureGateway {
    pub fn with_rows(rows: Vec<FixtureRow>) -> Self {
        Self {
            rows,
            failing: HashSet::new(),
        }
    }

    /// Make the named operation fail with a simulated server error.
    /// Operation names match the `StatsGateway` method names.
    pub fn fail(mut self, op: &'static str) -> Self {
        self.failing.insert(op);
        self
    }

    fn check(&self, op: &'static str) -> GatewayResult<()> {
        if self.failing.contains(op) {
            Err(GatewayError::status(500, format!("fixture failure: {op}")))
        } else {
            Ok(())
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[async_trait(?Send)]
impl StatsGateway for FixtureGateway {
    async fn bloodlines(&self) -> GatewayResult<Vec<String>> {
        self.check("bloodlines")?;
        let mut names: Vec<String> = Vec::new();
        for row in &self.rows {
            if !names.contains(&row.bloodline) {
                names.push(row.bloodline.clone());
            }
        }
        Ok(names)
    }

    async fn distinct_bloodlines(&self) -> GatewayResult<Vec<String>> {
        self.check("distinct_bloodlines")?;
        let mut names: Vec<String> = Vec::new();
        for row in &self.rows {
            if !names.contains(&row.bloodline) {
                names.push(row.bloodline.clone());
            }
        }
        Ok(names)
    }

    async fn augment_stats(&self, bloodline: Option<&str>) -> GatewayResult<Vec<AugmentStatRow>> {
        self.check("augment_stats")?;
        // Simulates the stored procedure: group by triple, count outcomes.
        let mut stats: Vec<AugmentStatRow> = Vec::new();
        for row in &self.rows {
            if let Some(scope) = bloodline {
                if row.bloodline != scope {
                    continue;
                }
            }
            let entry = stats.iter_mut().find(|stat| {
                stat.cpu_augment == row.cpu_augment
                    && stat.ram_augment == row.ram_augment
                    && stat.hydraulic_augment == row.hydraulic_augment
            });
            let stat = match entry {
                Some(stat) => stat,
                None => {
                    stats.push(AugmentStatRow {
                        cpu_augment: row.cpu_augment.clone(),
                        ram_augment: row.ram_augment.clone(),
                        hydraulic_augment: row.hydraulic_augment.clone(),
                        races: 0,
                        wins: 0,
                        places: 0,
                    });
                    stats.last_mut().expect("just pushed")
                }
            };
            stat.races += 1;
            if row.finish_position == 1 {
                stat.wins += 1;
            }
            if row.finish_position <= 3 {
                stat.places += 1;
            }
        }
        Ok(stats)
    }

    async fn search_horses(&self, text: &str) -> GatewayResult<Vec<HorseSummary>> {
        self.check("search_horses")?;
        // The stored procedure returns distinct horses.
        let mut horses: Vec<HorseSummary> = Vec::new();
        for row in &self.rows {
            if contains_ci(&row.horse_name, text)
                && !horses.iter().any(|h| h.horse_id == row.horse_id)
            {
                horses.push(HorseSummary {
                    horse_id: row.horse_id.clone(),
                    horse_name: row.horse_name.clone(),
                });
            }
        }
        Ok(horses)
    }

    async fn horses_matching(&self, text: &str, limit: usize) -> GatewayResult<Vec<HorseSummary>> {
        self.check("horses_matching")?;
        Ok(self
            .rows
            .iter()
            .filter(|row| contains_ci(&row.horse_name, text))
            .take(limit)
            .map(|row| HorseSummary {
                horse_id: row.horse_id.clone(),
                horse_name: row.horse_name.clone(),
            })
            .collect())
    }

    async fn horse_profile(&self, horse_id: &str) -> GatewayResult<Option<HorseProfile>> {
        self.check("horse_profile")?;
        Ok(self
            .rows
            .iter()
            .find(|row| row.horse_id == horse_id)
            .map(|row| HorseProfile {
                horse_id: row.horse_id.clone(),
                horse_name: row.horse_name.clone(),
                bloodline: row.bloodline.clone(),
                generation: row.generation,
                gender: row.gender.clone(),
                rating: row.rating,
                speed_rating: row.speed_rating,
                sprint_rating: row.sprint_rating,
                endurance_rating: row.endurance_rating,
            }))
    }

    async fn race_history(&self, horse_id: &str) -> GatewayResult<Vec<RaceRow>> {
        self.check("race_history")?;
        Ok(self
            .rows
            .iter()
            .filter(|row| row.horse_id == horse_id)
            .map(|row| RaceRow {
                race_id: row.race_id.clone(),
                race_date: row.race_date.clone(),
                finish_position: row.finish_position,
                earnings: row.earnings,
                finish_time: row.finish_time,
                cpu_augment: row.cpu_augment.clone(),
                ram_augment: row.ram_augment.clone(),
                hydraulic_augment: row.hydraulic_augment.clone(),
            })
            .collect())
    }

    async fn augment_runs(&self, bloodline: Option<&str>) -> GatewayResult<Vec<AugmentRunRow>> {
        self.check("augment_runs")?;
        Ok(self
            .rows
            .iter()
            .filter(|row| bloodline.is_none_or(|scope| row.bloodline == scope))
            .map(|row| AugmentRunRow {
                cpu_augment: row.cpu_augment.clone(),
                ram_augment: row.ram_augment.clone(),
                hydraulic_augment: row.hydraulic_augment.clone(),
                finish_position: row.finish_position,
            })
            .collect())
    }

    async fn stables_matching(&self, text: &str, limit: usize) -> GatewayResult<Vec<String>> {
        self.check("stables_matching")?;
        Ok(self
            .rows
            .iter()
            .filter(|row| contains_ci(&row.stable_name, text))
            .take(limit)
            .map(|row| row.stable_name.clone())
            .collect())
    }

    async fn stable_roster(&self, stable_name: &str) -> GatewayResult<Vec<StableHorseRow>> {
        self.check("stable_roster")?;
        Ok(self
            .rows
            .iter()
            .filter(|row| row.stable_name == stable_name)
            .map(|row| StableHorseRow {
                horse_id: row.horse_id.clone(),
                horse_name: row.horse_name.clone(),
                bloodline: row.bloodline.clone(),
                generation: row.generation,
                rating: row.rating,
                earnings: row.earnings,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_op_surfaces_simulated_error() {
        let gateway = FixtureGateway::default().fail("search_horses");
        let outcome = futures::executor::block_on(gateway.search_horses("any"));
        assert!(matches!(
            outcome,
            Err(GatewayError::Status { status: 500, .. })
        ));
    }

    #[test]
    fn search_is_case_insensitive_and_distinct() {
        let mut second = FixtureRow::sample("h1", "Spark Plug");
        second.race_id = "race-2".to_string();
        let gateway = FixtureGateway::with_rows(vec![
            FixtureRow::sample("h1", "Spark Plug"),
            second,
            FixtureRow::sample("h2", "Dark Sparkle"),
        ]);

        let horses = futures::executor::block_on(gateway.search_horses("spark")).unwrap();
        assert_eq!(horses.len(), 2);
        assert_eq!(horses[0].horse_id, "h1");
    }

    #[test]
    fn augment_stats_count_wins_and_places() {
        let mut loser = FixtureRow::sample("h1", "Spark Plug");
        loser.race_id = "race-2".to_string();
        loser.finish_position = 5;
        let mut placed = FixtureRow::sample("h1", "Spark Plug");
        placed.race_id = "race-3".to_string();
        placed.finish_position = 3;

        let gateway = FixtureGateway::with_rows(vec![
            FixtureRow::sample("h1", "Spark Plug"),
            loser,
            placed,
        ]);

        let stats = futures::executor::block_on(gateway.augment_stats(None)).unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].races, 3);
        assert_eq!(stats[0].wins, 1);
        assert_eq!(stats[0].places, 2);
    }
}
