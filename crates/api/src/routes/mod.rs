pub mod ads;
pub mod advertisers;
pub mod clients;
pub mod health;
pub mod ml_scores;
pub mod stats;
pub mod time;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /clients                                         list
/// /clients/{id}                                    get
/// /clients/bulk                                    bulk upsert (POST)
///
/// /advertisers                                     list
/// /advertisers/{id}                                get
/// /advertisers/bulk                                bulk upsert (POST)
///
/// /advertisers/{advertiser_id}/campaigns           list, create
/// /advertisers/{advertiser_id}/campaigns/{id}      get, update, delete
///
/// /ads?client_id=                                  select best ad (GET)
/// /ads/{ad_id}/click                               record click (POST)
///
/// /ml-scores                                       upsert relevance score (POST)
///
/// /time/advance                                    set current day (POST)
/// /time/current                                    read current day (GET)
///
/// /stats/campaigns/{id}                            campaign totals
/// /stats/campaigns/{id}/daily                      campaign per-day stats
/// /stats/advertisers/{id}/campaigns                advertiser totals
/// /stats/advertisers/{id}/campaigns/daily          advertiser per-day stats
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", clients::router())
        .nest("/advertisers", advertisers::router())
        .nest("/ads", ads::router())
        .nest("/ml-scores", ml_scores::router())
        .nest("/time", time::router())
        .nest("/stats", stats::router())
}
