//! Simulated-day clock DTO.

use adserve_core::types::Day;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The platform-wide current day, both as advance request body and as
/// response payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct CurrentDate {
    #[validate(range(min = 0))]
    pub current_date: Day,
}
