use serde::Serialize;

/// Roll-up metrics over a filtered roster. Recomputed wholesale on every
/// call; carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryMetrics {
    /// Members active within the last 3 days.
    pub active_members: u32,
    /// Percentage of the subset that is active.
    pub active_percentage: u32,
    pub tasks_completed: u32,
    /// Completed / total tasks, as a rounded percentage.
    pub completion_rate: u32,
    pub hours_logged: f64,
    /// Hours per member, rounded to one decimal.
    pub avg_hours_per_member: f64,
    /// Mean productivity score, rounded.
    pub avg_productivity: u32,
    /// Coarse trend signal in percentage points.
    pub productivity_trend: i32,
}

/// One bucket of the chart series. `date` is an hour label, weekday
/// label, or short date depending on the range granularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyActivity {
    pub date: String,
    pub tasks: f64,
    pub hours: f64,
}

/// One slice of the role histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleDistribution {
    pub role: String,
    pub value: u32,
}
