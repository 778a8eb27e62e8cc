//! Handlers for campaign and advertiser statistics.
//!
//! Totals and per-day series are derived entirely from the engagement
//! ledgers. A soft-deleted campaign's history stays in the advertiser
//! aggregates, but its own stats endpoints report it as not found.

use adserve_core::error::CoreError;
use adserve_core::stats::{DailyTotals, StatTotals};
use adserve_db::repositories::{AdvertiserRepo, CampaignRepo, StatsRepo};
use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /stats/campaigns/{id}
pub async fn campaign_totals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatTotals>> {
    require_campaign(&state, id).await?;
    let totals = StatsRepo::campaign_totals(&state.pool, id).await?;
    Ok(Json(totals))
}

/// GET /stats/campaigns/{id}/daily
pub async fn campaign_daily(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<DailyTotals>>> {
    require_campaign(&state, id).await?;
    let daily = StatsRepo::campaign_daily(&state.pool, id).await?;
    Ok(Json(daily))
}

/// GET /stats/advertisers/{id}/campaigns
pub async fn advertiser_totals(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<StatTotals>> {
    require_advertiser(&state, id).await?;
    let totals = StatsRepo::advertiser_totals(&state.pool, id).await?;
    Ok(Json(totals))
}

/// GET /stats/advertisers/{id}/campaigns/daily
pub async fn advertiser_daily(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<DailyTotals>>> {
    require_advertiser(&state, id).await?;
    let daily = StatsRepo::advertiser_daily(&state.pool, id).await?;
    Ok(Json(daily))
}

async fn require_campaign(state: &AppState, id: Uuid) -> AppResult<()> {
    CampaignRepo::find_by_id(&state.pool, id, None)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id,
        })?;
    Ok(())
}

async fn require_advertiser(state: &AppState, id: Uuid) -> AppResult<()> {
    AdvertiserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "advertiser",
            id,
        })?;
    Ok(())
}
