//! Repository for the `campaigns` table and its targeting sub-record.

use adserve_core::types::Day;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::campaign::{
    Campaign, CampaignCandidate, CreateCampaign, TargetingSpec, UpdateCampaign,
};

/// Joined column list shared across campaign queries.
const COLUMNS: &str = "c.id, c.advertiser_id, c.impressions_limit, c.clicks_limit, \
     c.cost_per_impression, c.cost_per_click, c.ad_title, c.ad_text, \
     c.start_date, c.end_date, c.is_deleted, c.files, \
     t.gender, t.age_from, t.age_to, t.location";

/// Provides CRUD, listing, soft delete, and the ad-selection candidate
/// read for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a campaign and its targeting row in one transaction.
    ///
    /// A missing targeting spec is stored as the all-wildcard rule.
    pub async fn create(
        pool: &PgPool,
        advertiser_id: Uuid,
        input: &CreateCampaign,
    ) -> Result<Campaign, sqlx::Error> {
        let targeting = input.targeting.clone().unwrap_or_default();

        let mut tx = pool.begin().await?;

        let (campaign_id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO campaigns
                (advertiser_id, impressions_limit, clicks_limit,
                 cost_per_impression, cost_per_click, ad_title, ad_text,
                 start_date, end_date, files)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(advertiser_id)
        .bind(input.impressions_limit)
        .bind(input.clicks_limit)
        .bind(input.cost_per_impression)
        .bind(input.cost_per_click)
        .bind(&input.ad_title)
        .bind(&input.ad_text)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.files.clone().map(Json))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO targetings (campaign_id, gender, age_from, age_to, location)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(campaign_id)
        .bind(targeting.gender)
        .bind(targeting.age_from)
        .bind(targeting.age_to)
        .bind(&targeting.location)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM campaigns c
             JOIN targetings t ON t.campaign_id = c.id
             WHERE c.id = $1"
        );
        let campaign = sqlx::query_as::<_, Campaign>(&query)
            .bind(campaign_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(campaign)
    }

    /// Find a live (non-deleted) campaign. When `advertiser_id` is
    /// given, a campaign owned by anyone else is treated as absent.
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
        advertiser_id: Option<Uuid>,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns c
             JOIN targetings t ON t.campaign_id = c.id
             WHERE c.id = $1 AND c.is_deleted = FALSE
               AND ($2::uuid IS NULL OR c.advertiser_id = $2)"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(advertiser_id)
            .fetch_optional(pool)
            .await
    }

    /// Find a campaign regardless of its soft-delete state. Used by
    /// update/delete to tell "unknown" apart from "already deleted".
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: Uuid,
        advertiser_id: Option<Uuid>,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns c
             JOIN targetings t ON t.campaign_id = c.id
             WHERE c.id = $1 AND ($2::uuid IS NULL OR c.advertiser_id = $2)"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(advertiser_id)
            .fetch_optional(pool)
            .await
    }

    /// Page through an advertiser's campaigns, newest window first.
    /// Soft-deleted campaigns stay listed (historical view).
    pub async fn list_by_advertiser(
        pool: &PgPool,
        advertiser_id: Uuid,
        size: i64,
        page: i64,
    ) -> Result<Vec<Campaign>, sqlx::Error> {
        let offset = (page - 1) * size;
        let query = format!(
            "SELECT {COLUMNS} FROM campaigns c
             JOIN targetings t ON t.campaign_id = c.id
             WHERE c.advertiser_id = $1
             ORDER BY c.start_date DESC, c.id
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(advertiser_id)
            .bind(offset)
            .bind(size)
            .fetch_all(pool)
            .await
    }

    /// Apply a partial patch to a campaign and merge the targeting
    /// fields, as a single transaction. Only non-`None` fields change.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateCampaign,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE campaigns SET
                cost_per_impression = COALESCE($2, cost_per_impression),
                cost_per_click = COALESCE($3, cost_per_click),
                ad_title = COALESCE($4, ad_title),
                ad_text = COALESCE($5, ad_text),
                files = COALESCE($6, files)
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.cost_per_impression)
        .bind(input.cost_per_click)
        .bind(&input.ad_title)
        .bind(&input.ad_text)
        .bind(input.files.clone().map(Json))
        .execute(&mut *tx)
        .await?;

        if let Some(targeting) = &input.targeting {
            sqlx::query(
                "UPDATE targetings SET
                    gender = COALESCE($2, gender),
                    age_from = COALESCE($3, age_from),
                    age_to = COALESCE($4, age_to),
                    location = COALESCE($5, location)
                 WHERE campaign_id = $1",
            )
            .bind(id)
            .bind(targeting.gender)
            .bind(targeting.age_from)
            .bind(targeting.age_to)
            .bind(&targeting.location)
            .execute(&mut *tx)
            .await?;
        }

        let query = format!(
            "SELECT {COLUMNS} FROM campaigns c
             JOIN targetings t ON t.campaign_id = c.id
             WHERE c.id = $1"
        );
        let campaign = sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(campaign)
    }

    /// Soft-delete a campaign. Returns `true` if a live row was marked.
    pub async fn soft_delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE campaigns SET is_deleted = TRUE WHERE id = $1 AND is_deleted = FALSE")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// The batched ad-selection read: every live campaign whose active
    /// window covers `day`, joined with its targeting and decorated
    /// with per-campaign unique counts, the client's seen/clicked
    /// flags, and the stored (client, advertiser) relevance score.
    ///
    /// Targeting predicates and limit checks are deliberately *not*
    /// applied here; eligibility and ranking happen in
    /// `adserve_core::selection` so the comparator is well-defined
    /// rather than left to the query planner.
    pub async fn fetch_candidates(
        pool: &PgPool,
        client_id: Uuid,
        day: Day,
    ) -> Result<Vec<CampaignCandidate>, sqlx::Error> {
        sqlx::query_as::<_, CampaignCandidate>(
            "SELECT c.id, c.advertiser_id, c.impressions_limit, c.clicks_limit,
                    c.cost_per_impression, c.cost_per_click, c.ad_title, c.ad_text,
                    (SELECT COUNT(*) FROM unique_impressions ui
                      WHERE ui.campaign_id = c.id) AS impressions_count,
                    (SELECT COUNT(*) FROM unique_clicks uc
                      WHERE uc.campaign_id = c.id) AS clicks_count,
                    EXISTS (SELECT 1 FROM unique_impressions ui
                             WHERE ui.campaign_id = c.id AND ui.client_id = $1) AS seen,
                    EXISTS (SELECT 1 FROM unique_clicks uc
                             WHERE uc.campaign_id = c.id AND uc.client_id = $1) AS clicked,
                    (SELECT m.score FROM ml_scores m
                      WHERE m.client_id = $1 AND m.advertiser_id = c.advertiser_id) AS relevance,
                    t.gender, t.age_from, t.age_to, t.location
             FROM campaigns c
             JOIN targetings t ON t.campaign_id = c.id
             WHERE c.is_deleted = FALSE
               AND c.start_date <= $2 AND c.end_date >= $2",
        )
        .bind(client_id)
        .bind(day)
        .fetch_all(pool)
        .await
    }

    /// Stored targeting row for a campaign (test and debugging aid).
    pub async fn targeting(
        pool: &PgPool,
        campaign_id: Uuid,
    ) -> Result<Option<TargetingSpec>, sqlx::Error> {
        sqlx::query_as::<_, TargetingSpec>(
            "SELECT gender, age_from, age_to, location FROM targetings WHERE campaign_id = $1",
        )
        .bind(campaign_id)
        .fetch_optional(pool)
        .await
    }
}
