//! Wire shapes returned by the remote store.
//!
//! These mirror the columns the views actually select; unknown columns in
//! a response are ignored by serde.

use serde::{Deserialize, Serialize};

/// One entry from the distinct-horses search (RPC or direct fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseSummary {
    pub horse_id: String,
    pub horse_name: String,
}

/// Identity, lineage, and rating columns for one horse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorseProfile {
    pub horse_id: String,
    pub horse_name: String,
    pub bloodline: String,
    pub generation: u32,
    pub gender: String,
    pub rating: f64,
    pub speed_rating: f64,
    pub sprint_rating: f64,
    pub endurance_rating: f64,
}

/// One race participation for a horse, with the augment loadout active
/// for that run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceRow {
    pub race_id: String,
    #[serde(default)]
    pub race_date: Option<String>,
    pub finish_position: u32,
    pub earnings: f64,
    pub finish_time: f64,
    pub cpu_augment: String,
    pub ram_augment: String,
    pub hydraulic_augment: String,
}

/// Raw run projection used by the client-side augment aggregation fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentRunRow {
    pub cpu_augment: String,
    pub ram_augment: String,
    pub hydraulic_augment: String,
    pub finish_position: u32,
}

/// Server-aggregated statistics for one augment triple. Rates are derived
/// client-side from the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentStatRow {
    pub cpu_augment: String,
    pub ram_augment: String,
    pub hydraulic_augment: String,
    pub races: u64,
    pub wins: u64,
    pub places: u64,
}

/// Roster columns for one horse inside a stable. The store returns one
/// row per race, so the same horse appears many times; deduplication is
/// the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StableHorseRow {
    pub horse_id: String,
    pub horse_name: String,
    pub bloodline: String,
    pub generation: u32,
    pub rating: f64,
    pub earnings: f64,
}

/// Single-column projections used by distinct reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BloodlineRow {
    pub bloodline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StableNameRow {
    pub stable_name: String,
}
