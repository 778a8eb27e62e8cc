//! Route definitions for the `/clients` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::clients;
use crate::state::AppState;

/// Routes mounted at `/clients`.
///
/// ```text
/// GET    /          -> list
/// GET    /{id}      -> get_by_id
/// POST   /bulk      -> bulk_upsert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list))
        .route("/bulk", post(clients::bulk_upsert))
        .route("/{id}", get(clients::get_by_id))
}
