//! Statistics arithmetic over the event ledger.
//!
//! The repositories return raw counts and cost sums; the derived fields
//! (conversion rate, total spend) and the per-day union of impressions
//! and clicks are computed here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Day, Money};

/// Aggregated engagement totals for a campaign or an advertiser.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatTotals {
    pub impressions_count: i64,
    pub clicks_count: i64,
    /// Click-through rate in percent; 0 when there are no impressions.
    pub conversion: f64,
    pub spent_impressions: Money,
    pub spent_clicks: Money,
    pub spent_total: Money,
}

impl StatTotals {
    pub fn from_counts(
        impressions_count: i64,
        spent_impressions: Money,
        clicks_count: i64,
        spent_clicks: Money,
    ) -> Self {
        let conversion = if impressions_count > 0 {
            clicks_count as f64 / impressions_count as f64 * 100.0
        } else {
            0.0
        };
        Self {
            impressions_count,
            clicks_count,
            conversion,
            spent_impressions,
            spent_clicks,
            spent_total: spent_impressions + spent_clicks,
        }
    }
}

/// One event kind's aggregate for a single day, as grouped by the store.
#[derive(Debug, Clone, Copy)]
pub struct DayBucket {
    pub day: Day,
    pub count: i64,
    pub spent: Money,
}

/// [`StatTotals`] for a single simulated day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotals {
    pub date: Day,
    #[serde(flatten)]
    pub totals: StatTotals,
}

/// Union the per-day impression and click aggregates into one row per
/// day, ordered by day ascending.
///
/// A day appears whenever *either* event kind occurred on it; the
/// missing side is zeroed.
pub fn merge_daily(impressions: &[DayBucket], clicks: &[DayBucket]) -> Vec<DailyTotals> {
    let mut days: BTreeMap<Day, (Option<DayBucket>, Option<DayBucket>)> = BTreeMap::new();
    for bucket in impressions {
        days.entry(bucket.day).or_default().0 = Some(*bucket);
    }
    for bucket in clicks {
        days.entry(bucket.day).or_default().1 = Some(*bucket);
    }

    days.into_iter()
        .map(|(day, (imp, clk))| {
            let (imp_count, imp_spent) = imp.map_or((0, 0.0), |b| (b.count, b.spent));
            let (clk_count, clk_spent) = clk.map_or((0, 0.0), |b| (b.count, b.spent));
            DailyTotals {
                date: day,
                totals: StatTotals::from_counts(imp_count, imp_spent, clk_count, clk_spent),
            }
        })
        .collect()
}
