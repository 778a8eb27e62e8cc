//! Repository for the unique impression and click ledgers.
//!
//! Inserts are idempotent: the (client, campaign) primary keys absorb
//! duplicate attempts via `ON CONFLICT DO NOTHING`, so two concurrent
//! selections for the same pair cannot double-charge. "Row already
//! exists" is success here, never an error.

use adserve_core::types::{Day, Money};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::event::{UniqueClick, UniqueImpression};

/// Append-only access to the engagement ledgers.
pub struct LedgerRepo;

impl LedgerRepo {
    /// Record a unique impression unless one already exists for the
    /// pair. Returns `true` when a row was actually inserted.
    pub async fn log_impression(
        pool: &PgPool,
        client_id: Uuid,
        campaign_id: Uuid,
        day: Day,
        cost: Money,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO unique_impressions (client_id, campaign_id, day, cost)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (client_id, campaign_id) DO NOTHING",
        )
        .bind(client_id)
        .bind(campaign_id)
        .bind(day)
        .bind(cost)
        .execute(pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        if !inserted {
            tracing::debug!(%client_id, %campaign_id, "duplicate impression ignored");
        }
        Ok(inserted)
    }

    /// Record a unique click unless one already exists for the pair.
    /// Returns `true` when a row was actually inserted.
    pub async fn log_click(
        pool: &PgPool,
        client_id: Uuid,
        campaign_id: Uuid,
        day: Day,
        cost: Money,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO unique_clicks (client_id, campaign_id, day, cost)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (client_id, campaign_id) DO NOTHING",
        )
        .bind(client_id)
        .bind(campaign_id)
        .bind(day)
        .bind(cost)
        .execute(pool)
        .await?;

        let inserted = result.rows_affected() > 0;
        if !inserted {
            tracing::debug!(%client_id, %campaign_id, "duplicate click ignored");
        }
        Ok(inserted)
    }

    /// Whether the client already has an impression on the campaign.
    pub async fn has_impression(
        pool: &PgPool,
        client_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM unique_impressions
              WHERE client_id = $1 AND campaign_id = $2)",
        )
        .bind(client_id)
        .bind(campaign_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Whether the client already has a click on the campaign.
    pub async fn has_click(
        pool: &PgPool,
        client_id: Uuid,
        campaign_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM unique_clicks
              WHERE client_id = $1 AND campaign_id = $2)",
        )
        .bind(client_id)
        .bind(campaign_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// All impressions for a campaign (test and debugging aid).
    pub async fn impressions_for_campaign(
        pool: &PgPool,
        campaign_id: Uuid,
    ) -> Result<Vec<UniqueImpression>, sqlx::Error> {
        sqlx::query_as::<_, UniqueImpression>(
            "SELECT client_id, campaign_id, day, cost FROM unique_impressions
             WHERE campaign_id = $1 ORDER BY day",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }

    /// All clicks for a campaign (test and debugging aid).
    pub async fn clicks_for_campaign(
        pool: &PgPool,
        campaign_id: Uuid,
    ) -> Result<Vec<UniqueClick>, sqlx::Error> {
        sqlx::query_as::<_, UniqueClick>(
            "SELECT client_id, campaign_id, day, cost FROM unique_clicks
             WHERE campaign_id = $1 ORDER BY day",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await
    }
}
