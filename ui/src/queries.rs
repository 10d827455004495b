//! Per-page data loaders: gateway calls plus projection.
//!
//! Each loader owns its page's fallback policy (RPC first, one
//! lower-fidelity direct read on failure) and returns either projected
//! rows or a user-facing message. Views commit the outcome through their
//! request guard; tests drive the loaders directly against
//! `gateway::fixtures`.

use tracing::warn;

use gateway::{HorseProfile, HorseSummary, RaceRow, StableHorseRow, StatsGateway};

use crate::core::projection::{
    aggregate_augment_runs, board_from_stats, dedup_by_key, AugmentBoardRow, RaceSummary,
};
use crate::core::trend;

/// Cap for the direct-read horse search fallback, matching the RPC's own
/// result bound.
pub const HORSE_SEARCH_LIMIT: usize = 100;
pub const STABLE_SEARCH_LIMIT: usize = 20;

/// Free-text horse search: distinct-horses RPC, falling back to a direct
/// substring read deduplicated by horse id.
pub async fn search_horses(
    gateway: &dyn StatsGateway,
    term: &str,
) -> Result<Vec<HorseSummary>, String> {
    match gateway.search_horses(term).await {
        Ok(horses) => Ok(horses),
        Err(err) => {
            warn!("horse search rpc failed, using direct read: {err}");
            match gateway.horses_matching(term, HORSE_SEARCH_LIMIT).await {
                Ok(rows) => Ok(dedup_by_key(rows, |horse| horse.horse_id.clone())),
                Err(fallback_err) => Err(format!("Couldn't search horses: {fallback_err}")),
            }
        }
    }
}

/// Everything the horse detail page renders for one horse.
#[derive(Debug, Clone, PartialEq)]
pub struct HorseBundle {
    pub profile: HorseProfile,
    /// Race rows in enforced chronological order.
    pub races: Vec<RaceRow>,
    pub summary: RaceSummary,
}

/// `Ok(None)` is an unknown horse id, not a failure.
pub async fn load_horse(
    gateway: &dyn StatsGateway,
    horse_id: &str,
) -> Result<Option<HorseBundle>, String> {
    let profile = gateway
        .horse_profile(horse_id)
        .await
        .map_err(|err| format!("Couldn't load horse info: {err}"))?;
    let Some(profile) = profile else {
        return Ok(None);
    };

    let mut races = gateway
        .race_history(horse_id)
        .await
        .map_err(|err| format!("Couldn't load race history: {err}"))?;
    trend::sort_chronological(&mut races);
    let summary = RaceSummary::from_rows(&races);

    Ok(Some(HorseBundle {
        profile,
        races,
        summary,
    }))
}

/// Bloodline filter options: RPC, falling back to a distinct projection.
pub async fn load_bloodlines(gateway: &dyn StatsGateway) -> Result<Vec<String>, String> {
    match gateway.bloodlines().await {
        Ok(names) => Ok(names),
        Err(err) => {
            warn!("bloodline rpc failed, using distinct read: {err}");
            gateway
                .distinct_bloodlines()
                .await
                .map_err(|fallback_err| format!("Couldn't load bloodlines: {fallback_err}"))
        }
    }
}

/// Leaderboard rows with both rates derived; unsorted, the view ranks by
/// its selected metric. `None` scope means the whole field. Falls back to
/// raw runs aggregated client-side when the stats procedure is
/// unavailable.
pub async fn load_augment_board(
    gateway: &dyn StatsGateway,
    bloodline: Option<&str>,
) -> Result<Vec<AugmentBoardRow>, String> {
    match gateway.augment_stats(bloodline).await {
        Ok(stats) => Ok(board_from_stats(stats)),
        Err(err) => {
            warn!("augment stats rpc failed, aggregating raw runs: {err}");
            let runs = gateway
                .augment_runs(bloodline)
                .await
                .map_err(|fallback_err| {
                    format!("Couldn't load augment statistics: {fallback_err}")
                })?;
            Ok(board_from_stats(aggregate_augment_runs(&runs)))
        }
    }
}

/// Stable-name search; the raw read returns one row per race, so names
/// are collapsed client-side.
pub async fn search_stables(gateway: &dyn StatsGateway, term: &str) -> Result<Vec<String>, String> {
    let names = gateway
        .stables_matching(term, STABLE_SEARCH_LIMIT)
        .await
        .map_err(|err| format!("Couldn't search stables: {err}"))?;
    Ok(dedup_by_key(names, |name| name.clone()))
}

/// Roster for one stable, one entry per horse (first-seen row wins).
pub async fn load_stable_roster(
    gateway: &dyn StatsGateway,
    stable_name: &str,
) -> Result<Vec<StableHorseRow>, String> {
    let rows = gateway
        .stable_roster(stable_name)
        .await
        .map_err(|err| format!("Couldn't load stable horses: {err}"))?;
    Ok(dedup_by_key(rows, |horse| horse.horse_id.clone()))
}
