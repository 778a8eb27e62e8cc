//! Campaign entity model, targeting sub-record, and DTOs.

use adserve_core::selection::{Candidate, TargetingRule};
use adserve_core::types::TargetingGender;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Targeting filter as it appears in campaign payloads and in the
/// `targetings` table. Unset fields mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize, Validate)]
#[validate(schema(function = validate_age_range))]
pub struct TargetingSpec {
    pub gender: Option<TargetingGender>,
    #[validate(range(min = 0))]
    pub age_from: Option<i32>,
    #[validate(range(min = 0))]
    pub age_to: Option<i32>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
}

impl TargetingSpec {
    /// The pure matching rule for the selection engine.
    pub fn rule(&self) -> TargetingRule {
        TargetingRule {
            gender: self.gender,
            age_from: self.age_from,
            age_to: self.age_to,
            location: self.location.clone(),
        }
    }
}

fn validate_age_range(spec: &TargetingSpec) -> Result<(), ValidationError> {
    if let (Some(from), Some(to)) = (spec.age_from, spec.age_to) {
        if from > to {
            return Err(ValidationError::new("age_range")
                .with_message("age_from must not exceed age_to".into()));
        }
    }
    Ok(())
}

/// A campaign row joined with its targeting record.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    #[sqlx(rename = "id")]
    pub campaign_id: Uuid,
    pub advertiser_id: Uuid,
    pub impressions_limit: i32,
    pub clicks_limit: i32,
    pub cost_per_impression: f64,
    pub cost_per_click: f64,
    pub ad_title: String,
    pub ad_text: String,
    pub start_date: i32,
    pub end_date: i32,
    #[serde(skip_serializing)]
    pub is_deleted: bool,
    pub files: Option<Json<Vec<String>>>,
    #[sqlx(flatten)]
    pub targeting: TargetingSpec,
}

/// DTO for creating a campaign under an advertiser.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = validate_campaign_bounds))]
pub struct CreateCampaign {
    #[validate(range(min = 0))]
    pub impressions_limit: i32,
    #[validate(range(min = 0))]
    pub clicks_limit: i32,
    #[validate(range(min = 0.0))]
    pub cost_per_impression: f64,
    #[validate(range(min = 0.0))]
    pub cost_per_click: f64,
    #[validate(length(min = 1))]
    pub ad_title: String,
    #[validate(length(min = 1))]
    pub ad_text: String,
    #[validate(range(min = 0))]
    pub start_date: i32,
    #[validate(range(min = 0))]
    pub end_date: i32,
    /// Omitted targeting becomes an all-wildcard rule.
    #[validate(nested)]
    pub targeting: Option<TargetingSpec>,
    pub files: Option<Vec<String>>,
}

fn validate_campaign_bounds(input: &CreateCampaign) -> Result<(), ValidationError> {
    if input.start_date > input.end_date {
        return Err(ValidationError::new("date_window")
            .with_message("start_date must not exceed end_date".into()));
    }
    if input.clicks_limit > input.impressions_limit {
        return Err(ValidationError::new("limits")
            .with_message("clicks_limit must not exceed impressions_limit".into()));
    }
    Ok(())
}

/// DTO for the partial campaign patch. Absent fields keep their stored
/// values; the targeting sub-record is merged field by field, not
/// replaced. Budget limits and the date window are immutable after
/// creation.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCampaign {
    #[validate(range(min = 0.0))]
    pub cost_per_impression: Option<f64>,
    #[validate(range(min = 0.0))]
    pub cost_per_click: Option<f64>,
    #[validate(length(min = 1))]
    pub ad_title: Option<String>,
    #[validate(length(min = 1))]
    pub ad_text: Option<String>,
    #[validate(nested)]
    pub targeting: Option<TargetingSpec>,
    pub files: Option<Vec<String>>,
}

/// The ad-facing projection returned by selection.
#[derive(Debug, Clone, Serialize)]
pub struct Ad {
    pub ad_id: Uuid,
    pub ad_title: String,
    pub ad_text: String,
    pub advertiser_id: Uuid,
}

/// One row of the batched candidate query: campaign + targeting plus
/// the per-campaign unique counts, the requesting client's seen/clicked
/// flags, and the stored (client, advertiser) relevance score.
#[derive(Debug, Clone, FromRow)]
pub struct CampaignCandidate {
    #[sqlx(rename = "id")]
    pub campaign_id: Uuid,
    pub advertiser_id: Uuid,
    pub impressions_limit: i32,
    pub clicks_limit: i32,
    pub cost_per_impression: f64,
    pub cost_per_click: f64,
    pub ad_title: String,
    pub ad_text: String,
    pub impressions_count: i64,
    pub clicks_count: i64,
    pub seen: bool,
    pub clicked: bool,
    pub relevance: Option<f64>,
    #[sqlx(flatten)]
    pub targeting: TargetingSpec,
}

impl CampaignCandidate {
    /// Project this row into the selection engine's candidate type.
    pub fn ranking_candidate(&self) -> Candidate {
        Candidate {
            campaign_id: self.campaign_id,
            advertiser_id: self.advertiser_id,
            cost_per_impression: self.cost_per_impression,
            cost_per_click: self.cost_per_click,
            impressions_limit: self.impressions_limit,
            clicks_limit: self.clicks_limit,
            impressions_count: self.impressions_count,
            clicks_count: self.clicks_count,
            seen: self.seen,
            clicked: self.clicked,
            relevance: self.relevance,
            targeting: self.targeting.rule(),
        }
    }

    /// The ad projection served to the client when this campaign wins.
    pub fn ad(&self) -> Ad {
        Ad {
            ad_id: self.campaign_id,
            ad_title: self.ad_title.clone(),
            ad_text: self.ad_text.clone(),
            advertiser_id: self.advertiser_id,
        }
    }
}
