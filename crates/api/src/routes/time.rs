//! Route definitions for the simulated clock.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::time;
use crate::state::AppState;

/// Routes mounted at `/time`.
///
/// ```text
/// POST   /advance    -> advance
/// GET    /current    -> current
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/advance", post(time::advance))
        .route("/current", get(time::current))
}
