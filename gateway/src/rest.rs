//! PostgREST-style HTTP client for the hosted store.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::filter::TableQuery;
use crate::rows::{
    AugmentRunRow, AugmentStatRow, BloodlineRow, HorseProfile, HorseSummary, RaceRow,
    StableHorseRow, StableNameRow,
};
use crate::{GatewayError, GatewayResult, StatsGateway};

/// Endpoint and anon key for the hosted store. Resolved at compile time so
/// the wasm bundle carries its configuration; the localhost default keeps
/// the workspace building with no environment set.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("PADDOCK_GATEWAY_URL")
                .unwrap_or("http://localhost:54321")
                .to_string(),
            api_key: option_env!("PADDOCK_GATEWAY_KEY").unwrap_or("").to_string(),
        }
    }
}

pub struct RestGateway {
    config: GatewayConfig,
    http: reqwest::Client,
}

impl RestGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    fn rest_url(&self, path: &str) -> String {
        format!("{}/rest/v1/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Filtered read: select rows matching the query's predicates. A
    /// distinct query is deduplicated after decode, first occurrence wins.
    pub async fn select<T>(&self, query: &TableQuery) -> GatewayResult<Vec<T>>
    where
        T: DeserializeOwned + PartialEq,
    {
        debug!(table = query.table(), "gateway select");
        let response = self
            .http
            .get(self.rest_url(query.table()))
            .query(&query.to_params())
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        let rows = Self::decode(response).await?;
        Ok(if query.is_distinct() {
            distinct(rows)
        } else {
            rows
        })
    }

    /// Invoke a named server-side aggregation with keyword parameters.
    pub async fn rpc<T, P>(&self, name: &str, params: &P) -> GatewayResult<Vec<T>>
    where
        T: DeserializeOwned,
        P: Serialize,
    {
        debug!(name, "gateway rpc");
        let response = self
            .http
            .post(self.rest_url(&format!("rpc/{name}")))
            .header("apikey", &self.config.api_key)
            .bearer_auth(&self.config.api_key)
            .json(params)
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> GatewayResult<Vec<T>> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: body.chars().take(256).collect(),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn distinct<T: PartialEq>(rows: Vec<T>) -> Vec<T> {
    let mut seen: Vec<T> = Vec::with_capacity(rows.len());
    for row in rows {
        if !seen.contains(&row) {
            seen.push(row);
        }
    }
    seen
}

const RACE_RESULTS: &str = "race_results";
const PROFILE_COLUMNS: &str =
    "horse_id,horse_name,bloodline,generation,gender,rating,speed_rating,sprint_rating,endurance_rating";
const HISTORY_COLUMNS: &str =
    "race_id,race_date,finish_position,earnings,finish_time,cpu_augment,ram_augment,hydraulic_augment";
const ROSTER_COLUMNS: &str = "horse_id,horse_name,bloodline,generation,rating,earnings";

#[async_trait(?Send)]
impl StatsGateway for RestGateway {
    async fn bloodlines(&self) -> GatewayResult<Vec<String>> {
        let rows: Vec<BloodlineRow> = self.rpc("get_distinct_bloodlines", &json!({})).await?;
        Ok(rows.into_iter().map(|row| row.bloodline).collect())
    }

    async fn distinct_bloodlines(&self) -> GatewayResult<Vec<String>> {
        let query = TableQuery::from(RACE_RESULTS, "bloodline").distinct();
        let rows: Vec<BloodlineRow> = self.select(&query).await?;
        Ok(rows.into_iter().map(|row| row.bloodline).collect())
    }

    async fn augment_stats(&self, bloodline: Option<&str>) -> GatewayResult<Vec<AugmentStatRow>> {
        match bloodline {
            Some(bloodline) => {
                self.rpc("get_augment_stats", &json!({ "in_bloodline": bloodline }))
                    .await
            }
            None => self.rpc("get_augment_stats_overall", &json!({})).await,
        }
    }

    async fn search_horses(&self, text: &str) -> GatewayResult<Vec<HorseSummary>> {
        self.rpc("get_distinct_horses", &json!({ "search_text": text }))
            .await
    }

    async fn horses_matching(&self, text: &str, limit: usize) -> GatewayResult<Vec<HorseSummary>> {
        let query = TableQuery::from(RACE_RESULTS, "horse_id,horse_name")
            .contains("horse_name", text)
            .limit(limit);
        self.select(&query).await
    }

    async fn horse_profile(&self, horse_id: &str) -> GatewayResult<Option<HorseProfile>> {
        let query = TableQuery::from(RACE_RESULTS, PROFILE_COLUMNS)
            .eq("horse_id", horse_id)
            .limit(1);
        let rows: Vec<HorseProfile> = self.select(&query).await?;
        Ok(rows.into_iter().next())
    }

    async fn race_history(&self, horse_id: &str) -> GatewayResult<Vec<RaceRow>> {
        let query = TableQuery::from(RACE_RESULTS, HISTORY_COLUMNS).eq("horse_id", horse_id);
        self.select(&query).await
    }

    async fn augment_runs(&self, bloodline: Option<&str>) -> GatewayResult<Vec<AugmentRunRow>> {
        let mut query = TableQuery::from(
            RACE_RESULTS,
            "cpu_augment,ram_augment,hydraulic_augment,finish_position",
        );
        if let Some(bloodline) = bloodline {
            query = query.eq("bloodline", bloodline);
        }
        self.select(&query).await
    }

    async fn stables_matching(&self, text: &str, limit: usize) -> GatewayResult<Vec<String>> {
        let query = TableQuery::from(RACE_RESULTS, "stable_name")
            .contains("stable_name", text)
            .limit(limit);
        let rows: Vec<StableNameRow> = self.select(&query).await?;
        Ok(rows.into_iter().map(|row| row.stable_name).collect())
    }

    async fn stable_roster(&self, stable_name: &str) -> GatewayResult<Vec<StableHorseRow>> {
        let query = TableQuery::from(RACE_RESULTS, ROSTER_COLUMNS).eq("stable_name", stable_name);
        self.select(&query).await
    }
}
