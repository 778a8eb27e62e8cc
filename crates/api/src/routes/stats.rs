//! Route definitions for the `/stats` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET /campaigns/{id}                       -> campaign_totals
/// GET /campaigns/{id}/daily                 -> campaign_daily
/// GET /advertisers/{id}/campaigns           -> advertiser_totals
/// GET /advertisers/{id}/campaigns/daily     -> advertiser_daily
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campaigns/{id}", get(stats::campaign_totals))
        .route("/campaigns/{id}/daily", get(stats::campaign_daily))
        .route(
            "/advertisers/{id}/campaigns",
            get(stats::advertiser_totals),
        )
        .route(
            "/advertisers/{id}/campaigns/daily",
            get(stats::advertiser_daily),
        )
}
