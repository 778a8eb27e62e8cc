//! Handlers for advertiser lookup and bulk upsert.

use adserve_core::error::CoreError;
use adserve_db::models::advertiser::{Advertiser, UpsertAdvertiser};
use adserve_db::repositories::AdvertiserRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /advertisers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Advertiser>>> {
    let advertisers = AdvertiserRepo::list(&state.pool).await?;
    Ok(Json(advertisers))
}

/// GET /advertisers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Advertiser>> {
    let advertiser = AdvertiserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "advertiser",
            id,
        })?;
    Ok(Json(advertiser))
}

/// POST /advertisers/bulk
pub async fn bulk_upsert(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<UpsertAdvertiser>>,
) -> AppResult<(StatusCode, Json<Vec<Advertiser>>)> {
    for input in &inputs {
        input.validate()?;
    }
    let stored = AdvertiserRepo::upsert_many(&state.pool, &inputs).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
