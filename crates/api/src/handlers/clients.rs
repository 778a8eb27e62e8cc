//! Handlers for client lookup and bulk upsert.

use adserve_core::error::CoreError;
use adserve_db::models::client::{Client, UpsertClient};
use adserve_db::repositories::ClientRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "client",
            id,
        })?;
    Ok(Json(client))
}

/// POST /clients/bulk
///
/// Validates every record before touching the store; one bad record
/// rejects the whole batch.
pub async fn bulk_upsert(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<UpsertClient>>,
) -> AppResult<(StatusCode, Json<Vec<Client>>)> {
    for input in &inputs {
        input.validate()?;
    }
    let stored = ClientRepo::upsert_many(&state.pool, &inputs).await?;
    Ok((StatusCode::CREATED, Json(stored)))
}
