//! Relevance score model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A (client, advertiser) relevance score row. Absence of a row means
/// score 0.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MlScore {
    pub client_id: Uuid,
    pub advertiser_id: Uuid,
    pub score: f64,
}

/// DTO for the score upsert endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertMlScore {
    pub client_id: Uuid,
    pub advertiser_id: Uuid,
    #[validate(range(min = 0.0))]
    pub score: f64,
}
