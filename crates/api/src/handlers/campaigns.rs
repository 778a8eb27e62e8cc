//! Handlers for advertiser-scoped campaign CRUD.
//!
//! Every route is nested under `/advertisers/{advertiser_id}/campaigns`,
//! and a campaign owned by a different advertiser is reported as not
//! found rather than forbidden.

use adserve_core::error::CoreError;
use adserve_db::models::campaign::{Campaign, CreateCampaign, UpdateCampaign};
use adserve_db::repositories::{AdvertiserRepo, CampaignRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::query::PageParams;
use crate::state::AppState;

/// POST /advertisers/{advertiser_id}/campaigns
pub async fn create(
    State(state): State<AppState>,
    Path(advertiser_id): Path<Uuid>,
    Json(input): Json<CreateCampaign>,
) -> AppResult<(StatusCode, Json<Campaign>)> {
    require_advertiser(&state, advertiser_id).await?;
    input.validate()?;

    let campaign = CampaignRepo::create(&state.pool, advertiser_id, &input).await?;
    tracing::info!(campaign_id = %campaign.campaign_id, %advertiser_id, "campaign created");
    Ok((StatusCode::CREATED, Json(campaign)))
}

/// GET /advertisers/{advertiser_id}/campaigns
///
/// Paginated; soft-deleted campaigns stay visible in the listing.
pub async fn list(
    State(state): State<AppState>,
    Path(advertiser_id): Path<Uuid>,
    Query(page): Query<PageParams>,
) -> AppResult<Json<Vec<Campaign>>> {
    require_advertiser(&state, advertiser_id).await?;

    let campaigns =
        CampaignRepo::list_by_advertiser(&state.pool, advertiser_id, page.size(), page.page())
            .await?;
    Ok(Json(campaigns))
}

/// GET /advertisers/{advertiser_id}/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((advertiser_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<Campaign>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id, Some(advertiser_id))
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id,
        })?;
    Ok(Json(campaign))
}

/// PUT /advertisers/{advertiser_id}/campaigns/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((advertiser_id, id)): Path<(Uuid, Uuid)>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<Json<Campaign>> {
    let existing = CampaignRepo::find_by_id_include_deleted(&state.pool, id, Some(advertiser_id))
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id,
        })?;
    if existing.is_deleted {
        return Err(CoreError::InvalidState("Cannot update a deleted campaign".into()).into());
    }
    input.validate()?;

    let campaign = CampaignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Internal(format!("campaign {id} vanished during update")))?;
    Ok(Json(campaign))
}

/// DELETE /advertisers/{advertiser_id}/campaigns/{id}
///
/// Soft delete: the campaign drops out of selection and direct lookup
/// but keeps its ledger history. Deleting twice is a state error.
pub async fn delete(
    State(state): State<AppState>,
    Path((advertiser_id, id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    let existing = CampaignRepo::find_by_id_include_deleted(&state.pool, id, Some(advertiser_id))
        .await?
        .ok_or(CoreError::NotFound {
            entity: "campaign",
            id,
        })?;
    if existing.is_deleted {
        return Err(CoreError::InvalidState("Campaign is already deleted".into()).into());
    }

    CampaignRepo::soft_delete(&state.pool, id).await?;
    tracing::info!(campaign_id = %id, %advertiser_id, "campaign soft-deleted");
    Ok(StatusCode::NO_CONTENT)
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
