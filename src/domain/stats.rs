// Statistic, trend and activity domain models

/// Direction and magnitude of a statistic's change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub value: u32,
    pub is_positive: bool,
}

impl Trend {
    pub const fn up(value: u32) -> Self {
        Self { value, is_positive: true }
    }

    pub const fn down(value: u32) -> Self {
        Self { value, is_positive: false }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub trend: Trend,
}

impl StatCard {
    pub const fn new(title: &'static str, value: &'static str, icon: &'static str, trend: Trend) -> Self {
        Self {
            title,
            value,
            icon,
            trend,
        }
    }
}

/// One labelled point of the performance trend chart.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct TrendPoint {
    pub date: &'static str,
    pub value: f64,
}

impl TrendPoint {
    pub const fn new(date: &'static str, value: f64) -> Self {
        Self { date, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

impl Activity {
    pub const fn new(id: u32, title: &'static str, description: &'static str, time: &'static str) -> Self {
        Self {
            id,
            title,
            description,
            time,
        }
    }
}
