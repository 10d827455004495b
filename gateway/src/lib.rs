//! Client handle to the hosted racing-statistics store.
//!
//! The store itself (schema, stored procedures) is an external
//! collaborator; this crate implements only the client side: a filtered
//! table-read builder, a named-RPC surface, the row shapes the views
//! consume, and the `StatsGateway` trait the UI is written against.
//! Views receive the gateway as an injected `SharedGateway`, so tests
//! swap in `fixtures::FixtureGateway` with literal rows.

use std::rc::Rc;

use async_trait::async_trait;

mod error;
mod filter;
mod rest;
mod rows;

pub mod fixtures;

pub use error::GatewayError;
pub use filter::TableQuery;
pub use rest::{GatewayConfig, RestGateway};
pub use rows::{
    AugmentRunRow, AugmentStatRow, BloodlineRow, HorseProfile, HorseSummary, RaceRow,
    StableHorseRow, StableNameRow,
};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// The typed read surface the page views consume. One method per backing
/// call; RPC-to-direct-read fallback composition happens in the page
/// loaders, not here.
#[async_trait(?Send)]
pub trait StatsGateway {
    /// RPC `get_distinct_bloodlines`.
    async fn bloodlines(&self) -> GatewayResult<Vec<String>>;

    /// Direct distinct projection of `race_results.bloodline`; the
    /// lower-fidelity equivalent of [`StatsGateway::bloodlines`].
    async fn distinct_bloodlines(&self) -> GatewayResult<Vec<String>>;

    /// RPC `get_augment_stats` scoped to a bloodline, or
    /// `get_augment_stats_overall` when unscoped.
    async fn augment_stats(&self, bloodline: Option<&str>) -> GatewayResult<Vec<AugmentStatRow>>;

    /// RPC `get_distinct_horses` free-text search.
    async fn search_horses(&self, text: &str) -> GatewayResult<Vec<HorseSummary>>;

    /// Direct substring read over `horse_name`; dup-bearing, the caller
    /// deduplicates. Fallback for [`StatsGateway::search_horses`].
    async fn horses_matching(&self, text: &str, limit: usize) -> GatewayResult<Vec<HorseSummary>>;

    /// First profile row for a horse, if any.
    async fn horse_profile(&self, horse_id: &str) -> GatewayResult<Option<HorseProfile>>;

    /// Every race participation recorded for a horse, store order.
    async fn race_history(&self, horse_id: &str) -> GatewayResult<Vec<RaceRow>>;

    /// Raw augment-run projection, optionally scoped to a bloodline.
    /// Fallback input for client-side aggregation when
    /// [`StatsGateway::augment_stats`] is unavailable.
    async fn augment_runs(&self, bloodline: Option<&str>) -> GatewayResult<Vec<AugmentRunRow>>;

    /// Stable names whose name contains `text`; dup-bearing.
    async fn stables_matching(&self, text: &str, limit: usize) -> GatewayResult<Vec<String>>;

    /// Every roster row for a stable; one row per race, dup-bearing.
    async fn stable_roster(&self, stable_name: &str) -> GatewayResult<Vec<StableHorseRow>>;
}

/// How views hold the gateway: cheap to clone into spawned futures, and
/// trait-objected so fixtures slot in.
pub type SharedGateway = Rc<dyn StatsGateway>;
