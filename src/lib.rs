pub mod activity;
pub mod date_util;
pub mod distribution;
pub mod error;
pub mod export;
pub mod filter;
pub mod metrics;
pub mod model;
pub mod projection;
pub mod roster;
pub mod tasks;

pub use error::{Error, Result};
pub use filter::FilterOptions;
pub use metrics::{DailyActivity, RoleDistribution, SummaryMetrics};
pub use model::{
    ContactInfo, Role, RoleFilter, Snapshot, Task, TaskPriority, TaskStatus, TeamMember, TimeRange,
};

use chrono::{DateTime, Utc};
use rand::Rng;

/// Dashboard facade: a roster plus a reference clock, with one method per
/// derivation. Every method projects for the requested range, applies the
/// filter, and derives from the resulting subset; nothing is cached and
/// the stored roster is never mutated.
pub struct Dashboard {
    roster: Vec<TeamMember>,
    now: DateTime<Utc>,
}

impl Dashboard {
    /// Wrap an injected roster with an explicit reference time. All
    /// date-dependent derivations (visibility, activity windows, task
    /// timestamps) are relative to `now`, which keeps the facade
    /// deterministic under test.
    pub fn new(roster: Vec<TeamMember>, now: DateTime<Utc>) -> Self {
        Self { roster, now }
    }

    /// The seeded demo roster, clocked at the current wall time.
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self::new(roster::seed_roster(now), now)
    }

    /// The seeded demo roster with an explicit clock.
    pub fn seeded_at(now: DateTime<Utc>) -> Self {
        Self::new(roster::seed_roster(now), now)
    }

    pub fn roster(&self) -> &[TeamMember] {
        &self.roster
    }

    /// Projected, filtered member list for the table view.
    pub fn members(&self, range: TimeRange, options: &FilterOptions) -> Vec<TeamMember> {
        self.subset(range, options)
    }

    /// Roll-up summary cards for the filtered roster.
    pub fn summary(&self, range: TimeRange, options: &FilterOptions) -> SummaryMetrics {
        metrics::summarize(&self.subset(range, options), self.now)
    }

    /// Chart series for the filtered roster. Month bucketing draws its
    /// base shape from `rng`; seed it for reproducible output.
    pub fn activity<R: Rng>(
        &self,
        range: TimeRange,
        options: &FilterOptions,
        rng: &mut R,
    ) -> Vec<DailyActivity> {
        activity::generate_activity(&self.subset(range, options), range, self.now, rng)
    }

    /// Role histogram for the filtered roster.
    pub fn distribution(&self, range: TimeRange, options: &FilterOptions) -> Vec<RoleDistribution> {
        distribution::distribute(&self.subset(range, options))
    }

    /// Synthesized task list for one member in the given range.
    pub fn tasks(&self, member_id: &str, range: TimeRange) -> Result<Vec<Task>> {
        let member = self
            .roster
            .iter()
            .find(|m| m.id == member_id)
            .ok_or_else(|| Error::MemberNotFound(member_id.to_string()))?;
        Ok(tasks::synthesize_tasks(member, range, self.now))
    }

    /// CSV rendition of the filtered member table.
    pub fn export_csv(&self, range: TimeRange, options: &FilterOptions) -> String {
        export::to_csv(&self.subset(range, options), range)
    }

    /// Markdown rendition of the filtered member table.
    pub fn export_markdown(&self, range: TimeRange, options: &FilterOptions) -> String {
        export::to_markdown(&self.subset(range, options), range, self.now)
    }

    fn subset(&self, range: TimeRange, options: &FilterOptions) -> Vec<TeamMember> {
        let projected = projection::project(&self.roster, range, self.now);
        filter::filter(&projected, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dashboard() -> Dashboard {
        Dashboard::seeded_at(Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_week_view_end_to_end() {
        let dash = dashboard();
        let opts = FilterOptions::default();

        let members = dash.members(TimeRange::Week, &opts);
        assert_eq!(members.len(), 10);

        // Summary sums must equal the week snapshots summed by hand.
        let expected_tasks: u32 = dash.roster().iter().map(|m| m.week.tasks_completed).sum();
        let expected_hours: f64 = dash.roster().iter().map(|m| m.week.hours_logged).sum();
        let summary = dash.summary(TimeRange::Week, &opts);
        assert_eq!(summary.tasks_completed, expected_tasks);
        assert_eq!(summary.hours_logged, expected_hours);

        let series = dash.activity(TimeRange::Week, &opts, &mut StdRng::seed_from_u64(1));
        assert_eq!(series.len(), 7);

        let dist = dash.distribution(TimeRange::Week, &opts);
        let counted: u32 = dist.iter().map(|d| d.value).sum();
        assert_eq!(counted as usize, members.len());
    }

    #[test]
    fn test_filtered_summary_only_counts_subset() {
        let dash = dashboard();
        let opts = FilterOptions::new("", RoleFilter::Only(Role::Designer));
        let summary = dash.summary(TimeRange::Week, &opts);
        let expected: u32 = dash
            .roster()
            .iter()
            .filter(|m| m.role == Role::Designer)
            .map(|m| m.week.tasks_completed)
            .sum();
        assert_eq!(summary.tasks_completed, expected);
    }

    #[test]
    fn test_tasks_for_unknown_member() {
        let dash = dashboard();
        match dash.tasks("user-99", TimeRange::Week) {
            Err(Error::MemberNotFound(id)) => assert_eq!(id, "user-99"),
            other => panic!("expected MemberNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_tasks_reconcile_with_member_metrics() {
        let dash = dashboard();
        let tasks = dash.tasks("user-5", TimeRange::Day).unwrap();
        let member = dash.roster().iter().find(|m| m.id == "user-5").unwrap();
        assert_eq!(tasks.len(), member.day.total_tasks as usize);
        let done = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        assert_eq!(done, member.day.tasks_completed as usize);
    }

    #[test]
    fn test_export_reflects_filter() {
        let dash = dashboard();
        let opts = FilterOptions::new("sarah", RoleFilter::All);
        let csv = dash.export_csv(TimeRange::Week, &opts);
        assert_eq!(csv.lines().count(), 2);
        assert!(csv.contains("Sarah Williams"));
    }
}
