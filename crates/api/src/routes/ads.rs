//! Route definitions for the `/ads` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::ads;
use crate::state::AppState;

/// Routes mounted at `/ads`.
///
/// ```text
/// GET    /?client_id=        -> select_ad
/// POST   /{ad_id}/click      -> click_ad
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(ads::select_ad))
        .route("/{ad_id}/click", post(ads::click_ad))
}
