//! Per-member task synthesis. Task lists are ephemeral: regenerated on
//! every request from the member's snapshot for the selected range, so the
//! completed/total/time-spent figures always reconcile with the metrics
//! shown elsewhere in the dashboard.

pub mod templates;

pub use templates::{templates_for, TaskTemplate};

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

use crate::model::{Task, TaskStatus, TeamMember, TimeRange};

/// Synthesize the task list for one member. Produces exactly
/// `total_tasks` tasks for the range's snapshot, the first
/// `tasks_completed` of them completed and the rest in progress. An empty
/// snapshot yields an empty list. Counts, statuses, and ids depend only on
/// the member and range; `now` affects the date fields alone.
pub fn synthesize_tasks(member: &TeamMember, range: TimeRange, now: DateTime<Utc>) -> Vec<Task> {
    let snapshot = member.snapshot_for(range);
    let total = snapshot.total_tasks as usize;
    let completed = snapshot.tasks_completed as usize;

    if total == 0 {
        return Vec::new();
    }

    let pool = templates_for(member.role);
    let mut tasks = Vec::with_capacity(total);

    for i in 0..total {
        let template = &pool[i % pool.len()];
        let is_completed = i < completed;

        let (created_at, due_date, completed_at) = task_dates(range, now, is_completed);

        let time_spent = if is_completed {
            template.time_estimate
        } else {
            (template.time_estimate * 0.6).floor()
        };

        tasks.push(Task {
            id: format!("task-{}-{}", member.id, i),
            title: template.title.to_string(),
            description: template.description.to_string(),
            status: if is_completed {
                TaskStatus::Completed
            } else {
                TaskStatus::InProgress
            },
            priority: template.priority,
            due_date,
            assigned_to: member.id.clone(),
            created_at,
            completed_at,
            tags: template.tags.iter().map(|t| t.to_string()).collect(),
            time_estimate: template.time_estimate,
            time_spent,
        });
    }

    tasks
}

/// Range-specific timestamp offsets from `now`:
/// - Day: same-day 09:00 to 17:00 window, completion at 14:00.
/// - Week: created 3 days back, 2-day span, completed a day after creation.
/// - Month: created 15 days back, 7-day span, completed 4 days after.
fn task_dates(
    range: TimeRange,
    now: DateTime<Utc>,
    is_completed: bool,
) -> (DateTime<Utc>, DateTime<Utc>, Option<DateTime<Utc>>) {
    let (created, due, completed) = match range {
        TimeRange::Day => {
            let created = at_hour(now, 9);
            (created, at_hour(now, 17), at_hour(now, 14))
        }
        TimeRange::Week => {
            let created = at_hour(now - Duration::days(3), 9);
            (
                created,
                created + Duration::days(2),
                at_hour(created + Duration::days(1), 14),
            )
        }
        TimeRange::Month => {
            let created = at_hour(now - Duration::days(15), 9);
            (
                created,
                created + Duration::days(7),
                at_hour(created + Duration::days(4), 14),
            )
        }
    };
    (created, due, is_completed.then_some(completed))
}

fn at_hour(dt: DateTime<Utc>, hour: u32) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap();
    Utc.from_utc_datetime(&dt.date_naive().and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::seed_roster;
    use chrono::{Datelike, Timelike};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    fn member(id: &str) -> TeamMember {
        seed_roster(now())
            .into_iter()
            .find(|m| m.id == id)
            .unwrap()
    }

    #[test]
    fn test_month_counts_and_statuses() {
        // user-1's month snapshot is 32 completed of 35.
        let m = member("user-1");
        assert_eq!(m.month.total_tasks, 35);
        assert_eq!(m.month.tasks_completed, 32);

        let tasks = synthesize_tasks(&m, TimeRange::Month, now());
        assert_eq!(tasks.len(), 35);

        let completed: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .collect();
        let in_progress: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::InProgress)
            .collect();
        assert_eq!(completed.len(), 32);
        assert_eq!(in_progress.len(), 3);
        assert!(completed.iter().all(|t| t.completed_at.is_some()));
        assert!(in_progress.iter().all(|t| t.completed_at.is_none()));
    }

    #[test]
    fn test_empty_snapshot_yields_no_tasks() {
        // user-6 has no day activity.
        let m = member("user-6");
        assert!(synthesize_tasks(&m, TimeRange::Day, now()).is_empty());
    }

    #[test]
    fn test_ids_unique_per_member_call() {
        let tasks = synthesize_tasks(&member("user-2"), TimeRange::Week, now());
        let mut ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
        assert_eq!(tasks[0].id, "task-user-2-0");
    }

    #[test]
    fn test_templates_cycle_by_role_pool() {
        let m = member("user-3"); // Product Manager
        let pool = templates_for(m.role);
        let tasks = synthesize_tasks(&m, TimeRange::Week, now());
        for (i, task) in tasks.iter().enumerate() {
            assert_eq!(task.title, pool[i % pool.len()].title);
        }
    }

    #[test]
    fn test_day_window() {
        let m = member("user-1");
        let tasks = synthesize_tasks(&m, TimeRange::Day, now());
        let t = &tasks[0];
        assert_eq!(t.created_at.hour(), 9);
        assert_eq!(t.due_date.hour(), 17);
        assert_eq!(t.created_at.date_naive(), now().date_naive());
        assert_eq!(t.completed_at.unwrap().hour(), 14);
    }

    #[test]
    fn test_week_offsets() {
        let m = member("user-1");
        let tasks = synthesize_tasks(&m, TimeRange::Week, now());
        let t = &tasks[0];
        assert_eq!(t.created_at.day(), 30); // May 30, 3 days before Jun 2
        assert_eq!((t.due_date - t.created_at).num_days(), 2);
        let done = t.completed_at.unwrap();
        assert_eq!((done.date_naive() - t.created_at.date_naive()).num_days(), 1);
        assert_eq!(done.hour(), 14);
    }

    #[test]
    fn test_month_offsets() {
        let m = member("user-1");
        let tasks = synthesize_tasks(&m, TimeRange::Month, now());
        let t = &tasks[0];
        assert_eq!((now().date_naive() - t.created_at.date_naive()).num_days(), 15);
        assert_eq!((t.due_date - t.created_at).num_days(), 7);
    }

    #[test]
    fn test_time_spent_rule() {
        let m = member("user-1");
        let tasks = synthesize_tasks(&m, TimeRange::Month, now());
        for t in &tasks {
            match t.status {
                TaskStatus::Completed => assert_eq!(t.time_spent, t.time_estimate),
                _ => assert_eq!(t.time_spent, (t.time_estimate * 0.6).floor()),
            }
        }
    }

    #[test]
    fn test_regeneration_is_content_identical() {
        let m = member("user-5");
        let a = synthesize_tasks(&m, TimeRange::Month, now());
        let b = synthesize_tasks(&m, TimeRange::Month, now());
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.status, y.status);
            assert_eq!(x.created_at, y.created_at);
        }
    }
}
