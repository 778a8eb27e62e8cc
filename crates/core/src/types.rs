use serde::{Deserialize, Serialize};

/// Simulated day counter. The platform has no wall clock; campaign
/// activity windows and event dates are all relative to this value.
pub type Day = i32;

/// Monetary amounts (per-event costs and aggregated spend). Stored as
/// `float8` in Postgres.
pub type Money = f64;

/// Client gender as stored on the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "gender", rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

/// Gender filter on a targeting rule. `All` matches every client;
/// an unset filter (SQL NULL) does too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "targeting_gender", rename_all = "UPPERCASE")]
pub enum TargetingGender {
    Male,
    Female,
    All,
}

impl TargetingGender {
    /// Whether this filter accepts a client of the given gender.
    pub fn accepts(self, gender: Gender) -> bool {
        match self {
            TargetingGender::All => true,
            TargetingGender::Male => gender == Gender::Male,
            TargetingGender::Female => gender == Gender::Female,
        }
    }
}
