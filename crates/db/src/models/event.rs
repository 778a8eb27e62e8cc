//! Engagement ledger rows.
//!
//! Both ledgers are keyed by (client, campaign): at most one impression
//! and one click per pair, ever. The day and cost are snapshotted at
//! event time and never recomputed, so later campaign price changes do
//! not rewrite history.

use adserve_core::types::{Day, Money};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A deduplicated impression from the `unique_impressions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UniqueImpression {
    pub client_id: Uuid,
    pub campaign_id: Uuid,
    pub day: Day,
    pub cost: Money,
}

/// A deduplicated click from the `unique_clicks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UniqueClick {
    pub client_id: Uuid,
    pub campaign_id: Uuid,
    pub day: Day,
    pub cost: Money,
}
