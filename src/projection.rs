//! Metric projection: copying the snapshot for the selected range onto
//! each member's canonical fields and computing range visibility.

use chrono::{DateTime, Duration, Utc};

use crate::model::{TeamMember, TimeRange};

/// Project each member's snapshot for `range` onto its canonical metric
/// fields and recompute `is_visible_in_range`. Returns a new roster; the
/// input is never mutated (later Week/Day comparisons depend on unmodified
/// history).
///
/// Visibility policy:
/// - Day: active today, i.e. the day snapshot has hours logged.
/// - Week: last active within the past 7 days of `now`.
/// - Month: always visible.
pub fn project(roster: &[TeamMember], range: TimeRange, now: DateTime<Utc>) -> Vec<TeamMember> {
    roster
        .iter()
        .map(|member| {
            let mut m = member.clone();
            let snapshot = m.snapshot_for(range);
            // All four fields replaced together from one snapshot; mixing
            // fields across snapshots would contaminate the projection.
            m.tasks_completed = snapshot.tasks_completed;
            m.total_tasks = snapshot.total_tasks;
            m.hours_logged = snapshot.hours_logged;
            m.productivity_score = snapshot.productivity_score;

            m.is_visible_in_range = match range {
                TimeRange::Day => m.day.hours_logged > 0.0,
                TimeRange::Week => now - m.last_active < Duration::days(7),
                TimeRange::Month => true,
            };
            m
        })
        .collect()
}
