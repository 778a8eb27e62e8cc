//! The ad-selection engine.
//!
//! Given a client and the candidate campaigns fetched by the storage
//! layer (active window and soft-delete already filtered in SQL), this
//! module applies the remaining eligibility predicates and ranks the
//! survivors by expected value. The highest-scoring campaign wins.
//!
//! Scoring blends the monetary bid with a relevance weight:
//!
//! ```text
//! score = impression_term + click_term * relevance_norm
//! ```
//!
//! where the impression term is `cost_per_impression` (0 if the client
//! already has an impression on the campaign), the click term is
//! `cost_per_click` (0 if the client already clicked), and
//! `relevance_norm` is the stored (client, advertiser) relevance score
//! divided by the maximum score in the entire score table. With no
//! stored score, or an empty score table, the click term contributes
//! nothing and ranking reduces to the impression bid.

use uuid::Uuid;

use crate::types::{Gender, Money, TargetingGender};

/// The client attributes targeting rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct ClientProfile<'a> {
    pub age: i32,
    pub gender: Gender,
    pub location: &'a str,
}

/// A campaign's targeting filter. Every unset dimension means "no
/// constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetingRule {
    pub gender: Option<TargetingGender>,
    pub age_from: Option<i32>,
    pub age_to: Option<i32>,
    pub location: Option<String>,
}

impl TargetingRule {
    /// Whether the client satisfies every set dimension of this rule.
    ///
    /// The age range is inclusive on both ends; location is an exact
    /// string match.
    pub fn matches(&self, client: ClientProfile<'_>) -> bool {
        let gender_ok = self.gender.map_or(true, |g| g.accepts(client.gender));
        let age_ok = self.age_from.map_or(true, |from| from <= client.age)
            && self.age_to.map_or(true, |to| client.age <= to);
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |loc| loc == client.location);
        gender_ok && age_ok && location_ok
    }
}

/// One campaign under consideration for a given client, as fetched by
/// the batched candidate query.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub campaign_id: Uuid,
    pub advertiser_id: Uuid,
    pub cost_per_impression: Money,
    pub cost_per_click: Money,
    pub impressions_limit: i32,
    pub clicks_limit: i32,
    /// Unique impressions ever recorded for the campaign, any client.
    pub impressions_count: i64,
    /// Unique clicks ever recorded for the campaign, any client.
    pub clicks_count: i64,
    /// The client already has a unique impression on this campaign.
    pub seen: bool,
    /// The client already has a unique click on this campaign.
    pub clicked: bool,
    /// Stored relevance score for (client, campaign's advertiser).
    pub relevance: Option<f64>,
    pub targeting: TargetingRule,
}

impl Candidate {
    /// Whether this campaign may be served to the client at all:
    /// targeting matches and neither budget limit is exhausted.
    pub fn is_eligible(&self, client: ClientProfile<'_>) -> bool {
        self.impressions_count < i64::from(self.impressions_limit)
            && self.clicks_count < i64::from(self.clicks_limit)
            && self.targeting.matches(client)
    }

    /// Ranking score; see the module docs for the formula.
    ///
    /// `max_relevance` is the maximum score across the whole relevance
    /// table; 0 (empty table) zeroes the click term rather than
    /// dividing by zero.
    pub fn score(&self, max_relevance: f64) -> f64 {
        let impression_term = if self.seen {
            0.0
        } else {
            self.cost_per_impression
        };
        let relevance_norm = match self.relevance {
            Some(score) if max_relevance > 0.0 => score / max_relevance,
            _ => 0.0,
        };
        let click_term = if self.clicked { 0.0 } else { self.cost_per_click };
        impression_term + click_term * relevance_norm
    }
}

/// Pick the best eligible campaign for the client, or `None` when no
/// candidate passes eligibility.
///
/// Ties on score break toward the lowest campaign id, so selection is
/// deterministic regardless of the order candidates were fetched in.
pub fn select_best<'a>(
    client: ClientProfile<'_>,
    candidates: &'a [Candidate],
    max_relevance: f64,
) -> Option<&'a Candidate> {
    candidates
        .iter()
        .filter(|c| c.is_eligible(client))
        .max_by(|a, b| {
            a.score(max_relevance)
                .total_cmp(&b.score(max_relevance))
                // Reversed id comparison: on equal scores the *lower*
                // campaign id must compare as the maximum.
                .then_with(|| b.campaign_id.cmp(&a.campaign_id))
        })
}
