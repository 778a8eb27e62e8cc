//! Shared query parameter types for API handlers.

use serde::Deserialize;
use uuid::Uuid;

/// Pagination parameters for campaign listing (`?size=&page=`).
///
/// `size` defaults to 10 (clamped to 1..=100), `page` defaults to 1.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub size: Option<i64>,
    pub page: Option<i64>,
}

impl PageParams {
    pub fn size(&self) -> i64 {
        self.size.unwrap_or(10).clamp(1, 100)
    }

    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// Query parameters for ad selection (`?client_id=`).
#[derive(Debug, Deserialize)]
pub struct AdQuery {
    pub client_id: Uuid,
}
