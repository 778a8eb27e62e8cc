//! Handler for relevance score ingestion.

use adserve_core::error::CoreError;
use adserve_db::models::ml_score::{MlScore, UpsertMlScore};
use adserve_db::repositories::{AdvertiserRepo, ClientRepo, MlScoreRepo};
use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /ml-scores
///
/// Upserts the (client, advertiser) relevance score. Both endpoints of
/// the pair must already exist.
pub async fn upsert(
    State(state): State<AppState>,
    Json(input): Json<UpsertMlScore>,
) -> AppResult<Json<MlScore>> {
    input.validate()?;

    ClientRepo::find_by_id(&state.pool, input.client_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "client",
            id: input.client_id,
        })?;
    AdvertiserRepo::find_by_id(&state.pool, input.advertiser_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "advertiser",
            id: input.advertiser_id,
        })?;

    let stored = MlScoreRepo::upsert(&state.pool, &input).await?;
    Ok(Json(stored))
}
