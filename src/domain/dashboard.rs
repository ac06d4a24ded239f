// Dashboard domain model
use super::stats::{Activity, StatCard, TrendPoint};

/// Everything a role sees on its dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: &'static str,
    pub chart_title: &'static str,
    pub stats: &'static [StatCard],
    pub performance: &'static [TrendPoint],
    pub activities: &'static [Activity],
}

impl Dashboard {
    pub const fn new(
        title: &'static str,
        chart_title: &'static str,
        stats: &'static [StatCard],
        performance: &'static [TrendPoint],
        activities: &'static [Activity],
    ) -> Self {
        Self {
            title,
            chart_title,
            stats,
            performance,
            activities,
        }
    }
}
