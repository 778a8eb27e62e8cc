//! Advertiser entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// An advertiser row from the `advertisers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Advertiser {
    #[sqlx(rename = "id")]
    pub advertiser_id: Uuid,
    pub name: String,
}

/// DTO for the bulk upsert endpoint.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertAdvertiser {
    pub advertiser_id: Uuid,
    #[validate(length(min = 1))]
    pub name: String,
}
