//! Route definitions for the `/advertisers` resource.
//!
//! Also nests the advertiser-scoped campaign routes under
//! `/advertisers/{advertiser_id}/campaigns`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{advertisers, campaigns};
use crate::state::AppState;

/// Routes mounted at `/advertisers`.
///
/// ```text
/// GET    /                                  -> list
/// GET    /{id}                              -> get_by_id
/// POST   /bulk                              -> bulk_upsert
///
/// GET    /{advertiser_id}/campaigns         -> list (paginated)
/// POST   /{advertiser_id}/campaigns         -> create
/// GET    /{advertiser_id}/campaigns/{id}    -> get_by_id
/// PUT    /{advertiser_id}/campaigns/{id}    -> update
/// DELETE /{advertiser_id}/campaigns/{id}    -> delete (soft)
/// ```
pub fn router() -> Router<AppState> {
    let campaign_routes = Router::new()
        .route("/", get(campaigns::list).post(campaigns::create))
        .route(
            "/{id}",
            get(campaigns::get_by_id)
                .put(campaigns::update)
                .delete(campaigns::delete),
        );

    Router::new()
        .route("/", get(advertisers::list))
        .route("/bulk", post(advertisers::bulk_upsert))
        .route("/{id}", get(advertisers::get_by_id))
        .nest("/{advertiser_id}/campaigns", campaign_routes)
}
