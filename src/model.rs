use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};

/// The reporting granularity selected in the dashboard. Determines which
/// snapshot is projected and how the activity series is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimeRange {
    Day,
    Week,
    Month,
}

impl TimeRange {
    /// Parse a range string ("Day", "Week", "Month", case-insensitive).
    /// Unrecognized values fail rather than defaulting.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "day" => Ok(TimeRange::Day),
            "week" => Ok(TimeRange::Week),
            "month" => Ok(TimeRange::Month),
            _ => Err(Error::InvalidTimeRange(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::Day => "Day",
            TimeRange::Week => "Week",
            TimeRange::Month => "Month",
        }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Team member role. The set is closed; task templates are keyed off it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Developer,
    Designer,
    #[serde(rename = "Product Manager")]
    ProductManager,
    #[serde(rename = "QA Engineer")]
    QaEngineer,
    Marketing,
}

impl Role {
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "developer" => Ok(Role::Developer),
            "designer" => Ok(Role::Designer),
            "product manager" => Ok(Role::ProductManager),
            "qa engineer" => Ok(Role::QaEngineer),
            "marketing" => Ok(Role::Marketing),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "Developer",
            Role::Designer => "Designer",
            Role::ProductManager => "Product Manager",
            Role::QaEngineer => "QA Engineer",
            Role::Marketing => "Marketing",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Role constraint for filtering: every role, or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    /// Parse "All" or any role display string.
    pub fn parse(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(RoleFilter::All)
        } else {
            Role::parse(s).map(RoleFilter::Only)
        }
    }

    pub fn matches(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Only(r) => *r == role,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    Pending,
    Blocked,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Pending => "Pending",
            TaskStatus::Blocked => "Blocked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        }
    }
}

/// One immutable set of metric values for a single time range.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Snapshot {
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub hours_logged: f64,
    pub productivity_score: u32,
}

/// Contact details shown in the member dialog. Optional on the member.
#[derive(Debug, Clone, Serialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub department: String,
    pub location: String,
    pub manager: String,
    pub start_date: String,
    pub slack_handle: String,
    pub github_username: Option<String>,
    pub linkedin: Option<String>,
}

/// A roster member. The four canonical metric fields are projections of
/// the snapshot selected by the last `project` call; the day/week/month
/// snapshots are the immutable source of truth.
#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub role: Role,
    pub productivity_score: u32,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub hours_logged: f64,
    pub last_active: DateTime<Utc>,
    pub day: Snapshot,
    pub week: Snapshot,
    pub month: Snapshot,
    pub is_visible_in_range: bool,
    pub contact: Option<ContactInfo>,
}

impl TeamMember {
    /// The snapshot backing the given range.
    pub fn snapshot_for(&self, range: TimeRange) -> Snapshot {
        match range {
            TimeRange::Day => self.day,
            TimeRange::Week => self.week,
            TimeRange::Month => self.month,
        }
    }
}

/// A synthesized task. Ephemeral: regenerated on every request, never
/// stored or mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: DateTime<Utc>,
    pub assigned_to: String,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub time_estimate: f64,
    pub time_spent: f64,
}
