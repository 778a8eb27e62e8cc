//! Route definitions for the `/ml-scores` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::ml_scores;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(ml_scores::upsert))
}
