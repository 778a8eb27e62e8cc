//! Aggregation queries over the engagement ledgers.
//!
//! The repository returns raw counts and cost sums; derived fields
//! (conversion, spend total) and the per-day union are computed by
//! `adserve_core::stats`.

use adserve_core::stats::{self, DailyTotals, DayBucket, StatTotals};
use adserve_core::types::Day;
use sqlx::PgPool;
use uuid::Uuid;

/// Read-side statistics for campaigns and advertisers.
pub struct StatsRepo;

impl StatsRepo {
    /// Lifetime totals for one campaign.
    pub async fn campaign_totals(
        pool: &PgPool,
        campaign_id: Uuid,
    ) -> Result<StatTotals, sqlx::Error> {
        let (impressions, spent_impressions): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(cost), 0)
             FROM unique_impressions WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_one(pool)
        .await?;

        let (clicks, spent_clicks): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(cost), 0)
             FROM unique_clicks WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_one(pool)
        .await?;

        Ok(StatTotals::from_counts(
            impressions,
            spent_impressions,
            clicks,
            spent_clicks,
        ))
    }

    /// Lifetime totals across all of an advertiser's campaigns.
    pub async fn advertiser_totals(
        pool: &PgPool,
        advertiser_id: Uuid,
    ) -> Result<StatTotals, sqlx::Error> {
        let (impressions, spent_impressions): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(ui.cost), 0)
             FROM unique_impressions ui
             JOIN campaigns c ON c.id = ui.campaign_id
             WHERE c.advertiser_id = $1",
        )
        .bind(advertiser_id)
        .fetch_one(pool)
        .await?;

        let (clicks, spent_clicks): (i64, f64) = sqlx::query_as(
            "SELECT COUNT(*), COALESCE(SUM(uc.cost), 0)
             FROM unique_clicks uc
             JOIN campaigns c ON c.id = uc.campaign_id
             WHERE c.advertiser_id = $1",
        )
        .bind(advertiser_id)
        .fetch_one(pool)
        .await?;

        Ok(StatTotals::from_counts(
            impressions,
            spent_impressions,
            clicks,
            spent_clicks,
        ))
    }

    /// Per-day totals for one campaign: one row per day with either an
    /// impression or a click, ordered by day.
    pub async fn campaign_daily(
        pool: &PgPool,
        campaign_id: Uuid,
    ) -> Result<Vec<DailyTotals>, sqlx::Error> {
        let impressions: Vec<(Day, i64, f64)> = sqlx::query_as(
            "SELECT day, COUNT(*), COALESCE(SUM(cost), 0)
             FROM unique_impressions WHERE campaign_id = $1 GROUP BY day",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await?;

        let clicks: Vec<(Day, i64, f64)> = sqlx::query_as(
            "SELECT day, COUNT(*), COALESCE(SUM(cost), 0)
             FROM unique_clicks WHERE campaign_id = $1 GROUP BY day",
        )
        .bind(campaign_id)
        .fetch_all(pool)
        .await?;

        Ok(stats::merge_daily(
            &to_buckets(impressions),
            &to_buckets(clicks),
        ))
    }

    /// Per-day totals across all of an advertiser's campaigns.
    pub async fn advertiser_daily(
        pool: &PgPool,
        advertiser_id: Uuid,
    ) -> Result<Vec<DailyTotals>, sqlx::Error> {
        let impressions: Vec<(Day, i64, f64)> = sqlx::query_as(
            "SELECT ui.day, COUNT(*), COALESCE(SUM(ui.cost), 0)
             FROM unique_impressions ui
             JOIN campaigns c ON c.id = ui.campaign_id
             WHERE c.advertiser_id = $1 GROUP BY ui.day",
        )
        .bind(advertiser_id)
        .fetch_all(pool)
        .await?;

        let clicks: Vec<(Day, i64, f64)> = sqlx::query_as(
            "SELECT uc.day, COUNT(*), COALESCE(SUM(uc.cost), 0)
             FROM unique_clicks uc
             JOIN campaigns c ON c.id = uc.campaign_id
             WHERE c.advertiser_id = $1 GROUP BY uc.day",
        )
        .bind(advertiser_id)
        .fetch_all(pool)
        .await?;

        Ok(stats::merge_daily(
            &to_buckets(impressions),
            &to_buckets(clicks),
        ))
    }
}

fn to_buckets(rows: Vec<(Day, i64, f64)>) -> Vec<DayBucket> {
    rows.into_iter()
        .map(|(day, count, spent)| DayBucket { day, count, spent })
        .collect()
}
