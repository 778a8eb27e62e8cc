//! Handlers for ad delivery: selection and click recording.

use adserve_core::error::CoreError;
use adserve_core::selection::{self, ClientProfile};
use adserve_db::models::campaign::Ad;
use adserve_db::repositories::{CampaignRepo, ClientRepo, ClockRepo, LedgerRepo, MlScoreRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::query::AdQuery;
use crate::state::AppState;

/// GET /ads?client_id=
///
/// Serves the single best eligible ad for the client and records the
/// unique impression in the same request. Repeat requests may return
/// the same ad; the ledger insert is idempotent so the impression is
/// only ever charged once.
pub async fn select_ad(
    State(state): State<AppState>,
    Query(params): Query<AdQuery>,
) -> AppResult<Json<Ad>> {
    let client = ClientRepo::find_by_id(&state.pool, params.client_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "client",
            id: params.client_id,
        })?;
    let today = ClockRepo::current_day(&state.pool)
        .await?
        .ok_or(CoreError::ClockUnset)?;

    let rows = CampaignRepo::fetch_candidates(&state.pool, client.client_id, today).await?;
    let max_relevance = MlScoreRepo::max_score(&state.pool).await?;

    let profile = ClientProfile {
        age: client.age,
        gender: client.gender,
        location: &client.location,
    };
    let candidates: Vec<_> = rows.iter().map(|r| r.ranking_candidate()).collect();
    let winner =
        selection::select_best(profile, &candidates, max_relevance).ok_or(CoreError::NoEligibleAds)?;

    let row = rows
        .iter()
        .find(|r| r.campaign_id == winner.campaign_id)
        .ok_or_else(|| AppError::Internal("winning candidate lost its source row".into()))?;

    let charged = LedgerRepo::log_impression(
        &state.pool,
        client.client_id,
        row.campaign_id,
        today,
        row.cost_per_impression,
    )
    .await?;
    tracing::info!(
        client_id = %client.client_id,
        campaign_id = %row.campaign_id,
        day = today,
        charged,
        "ad served"
    );

    Ok(Json(row.ad()))
}

/// Body for the click endpoint.
#[derive(Debug, Deserialize)]
pub struct ClickRequest {
    pub client_id: Uuid,
}

/// POST /ads/{ad_id}/click
///
/// Records a unique click. The endpoint is deliberately forgiving:
/// everything past "the client exists" is a silent no-op, so retries
/// and clicks on since-deleted campaigns all land on 204. A click is
/// only recorded after the client has an impression on the campaign,
/// and only once per (client, campaign) pair.
pub async fn click_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<Uuid>,
    Json(body): Json<ClickRequest>,
) -> AppResult<StatusCode> {
    let client_id = body.client_id;
    ClientRepo::find_by_id(&state.pool, client_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "client",
            id: client_id,
        })?;

    let Some(campaign) = CampaignRepo::find_by_id(&state.pool, ad_id, None).await? else {
        return Ok(StatusCode::NO_CONTENT);
    };
    if !LedgerRepo::has_impression(&state.pool, client_id, ad_id).await? {
        tracing::debug!(%client_id, campaign_id = %ad_id, "click without impression ignored");
        return Ok(StatusCode::NO_CONTENT);
    }

    let today = ClockRepo::current_day(&state.pool)
        .await?
        .ok_or(CoreError::ClockUnset)?;
    let charged = LedgerRepo::log_click(
        &state.pool,
        client_id,
        ad_id,
        today,
        campaign.cost_per_click,
    )
    .await?;
    if charged {
        tracing::info!(%client_id, campaign_id = %ad_id, day = today, "click recorded");
    }

    Ok(StatusCode::NO_CONTENT)
}
