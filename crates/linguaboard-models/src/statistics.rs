//! Statistics aggregates shown on the dashboard.
//!
//! Every field is optional: the backend omits counters it could not compute
//! and the dashboard shows those as zero.

use serde::{Deserialize, Serialize};

/// A total with its month-over-month evolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthCount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    /// Monthly percentage change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_change: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_positive: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_this_month: Option<u64>,
}

impl GrowthCount {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.count.unwrap_or(0)
    }

    /// Signed change such as `+12.5%` or `-3%`, when reported.
    #[must_use]
    pub fn trend(&self) -> Option<String> {
        let pct = self.percentage_change?;
        let sign = if self.is_positive.unwrap_or(pct >= 0.0) {
            '+'
        } else {
            '-'
        };
        Some(format!("{}{}%", sign, format_pct(pct.abs())))
    }
}

fn format_pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatistics {
    #[serde(default)]
    pub total_parents: GrowthCount,
    #[serde(default)]
    pub total_children: GrowthCount,
    #[serde(default)]
    pub total_languages: GrowthCount,
    #[serde(default)]
    pub total_words: GrowthCount,
    #[serde(default)]
    pub total_lessons: GrowthCount,
    #[serde(default)]
    pub total_domains: GrowthCount,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentStatistics {
    #[serde(default)]
    pub total_parents: Option<u64>,
    #[serde(default)]
    pub active_parents: Option<u64>,
    #[serde(default)]
    pub inactive_parents: Option<u64>,
    #[serde(default)]
    pub parents_with_children: Option<u64>,
    #[serde(default)]
    pub parents_without_children: Option<u64>,
}

/// Number of children in one age range (`3-5`, `6-8`, `9-12`, `13-18`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeGroup {
    #[serde(rename = "_id", default)]
    pub range: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildrenStatistics {
    #[serde(default)]
    pub total_children: Option<u64>,
    #[serde(default)]
    pub children_by_age: Vec<AgeGroup>,
    #[serde(default)]
    pub completed_info: Option<u64>,
    #[serde(default)]
    pub incomplete_info: Option<u64>,
    #[serde(default)]
    pub first_time_logins: Option<u64>,
    #[serde(default)]
    pub returning_users: Option<u64>,
}

/// Counters attached to the admin profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStatistics {
    #[serde(default)]
    pub total_users: Option<u64>,
    #[serde(default)]
    pub active_users: Option<u64>,
    #[serde(default)]
    pub inactive_users: Option<u64>,
    #[serde(default)]
    pub total_children: Option<u64>,
}
