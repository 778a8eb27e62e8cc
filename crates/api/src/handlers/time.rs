//! Handlers for the simulated day clock.

use adserve_core::error::CoreError;
use adserve_db::models::clock::CurrentDate;
use adserve_db::repositories::ClockRepo;
use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /time/advance
///
/// Sets the platform-wide current day. The value is not required to
/// move forward; rewinding is allowed and simply re-dates subsequent
/// ledger entries.
pub async fn advance(
    State(state): State<AppState>,
    Json(input): Json<CurrentDate>,
) -> AppResult<Json<CurrentDate>> {
    input.validate()?;

    let stored = ClockRepo::set_day(&state.pool, input.current_date).await?;
    tracing::info!(day = stored, "current day set");
    Ok(Json(CurrentDate {
        current_date: stored,
    }))
}

/// GET /time/current
pub async fn current(State(state): State<AppState>) -> AppResult<Json<CurrentDate>> {
    let day = ClockRepo::current_day(&state.pool)
        .await?
        .ok_or(CoreError::ClockUnset)?;
    Ok(Json(CurrentDate { current_date: day }))
}
