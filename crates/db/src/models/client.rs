//! Client entity model and DTOs.

use adserve_core::types::Gender;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    #[sqlx(rename = "id")]
    pub client_id: Uuid,
    pub login: String,
    pub age: i32,
    pub location: String,
    pub gender: Gender,
}

/// DTO for the bulk upsert endpoint. Carries the full record; an
/// existing id is overwritten, an unknown id is inserted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertClient {
    pub client_id: Uuid,
    #[validate(length(min = 1))]
    pub login: String,
    #[validate(range(min = 0))]
    pub age: i32,
    #[validate(length(min = 1))]
    pub location: String,
    pub gender: Gender,
}
