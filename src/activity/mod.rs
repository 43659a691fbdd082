//! Time-bucketed activity series for the dashboard chart. Each range has a
//! fixed-length output (24 hourly buckets for Day, Mon..Sun for Week, 30
//! days for Month) built from a normalized shape template and rescaled so
//! the series totals match the filtered roster's actual metrics.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::Rng;

use crate::date_util::{hour_label, short_date};
use crate::metrics::DailyActivity;
use crate::model::{TeamMember, TimeRange};

/// Workday shape for the hourly view: (tasks, hours) per hour 00..23.
const DAY_TEMPLATE: [(f64, f64); 24] = [
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
    (0.5, 0.5),
    (1.0, 1.0),
    (3.0, 3.0),
    (5.0, 6.0),
    (6.0, 7.0),
    (5.0, 6.0),
    (2.0, 3.0),
    (4.0, 5.0),
    (6.0, 7.0),
    (7.0, 7.5),
    (5.0, 6.0),
    (3.0, 4.0),
    (1.0, 2.0),
    (0.5, 1.0),
    (0.0, 0.5),
    (0.0, 0.0),
    (0.0, 0.0),
    (0.0, 0.0),
];

/// Weekly shape, lower on the weekend: (label, tasks, hours).
const WEEK_TEMPLATE: [(&str, f64, f64); 7] = [
    ("Mon", 24.0, 32.0),
    ("Tue", 28.0, 36.0),
    ("Wed", 26.0, 34.0),
    ("Thu", 30.0, 38.0),
    ("Fri", 22.0, 30.0),
    ("Sat", 6.0, 8.0),
    ("Sun", 4.0, 6.0),
];

const MONTH_DAYS: usize = 30;

/// Generate the chart series for a filtered roster. Output is ordered by
/// time ascending with a fixed length per range and is rebuilt in full on
/// every call. The Month shape draws randomized per-day base values from
/// `rng`; pass a seeded generator for reproducible output.
pub fn generate_activity<R: Rng>(
    subset: &[TeamMember],
    range: TimeRange,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<DailyActivity> {
    let total_tasks: f64 = subset.iter().map(|m| m.tasks_completed as f64).sum();
    let total_hours: f64 = subset.iter().map(|m| m.hours_logged).sum();

    match range {
        TimeRange::Day => day_series(total_tasks, total_hours),
        TimeRange::Week => week_series(total_tasks, total_hours),
        TimeRange::Month => month_series(total_tasks, total_hours, now, rng),
    }
}

/// Hourly buckets. Both series are weighted by the hour template's total
/// hours (the task template is not normalized independently) and rounded
/// to one decimal.
fn day_series(total_tasks: f64, total_hours: f64) -> Vec<DailyActivity> {
    let base_hours_sum: f64 = DAY_TEMPLATE.iter().map(|(_, h)| h).sum();
    let task_scale = ratio(total_tasks, base_hours_sum);
    let hour_scale = ratio(total_hours, base_hours_sum);

    DAY_TEMPLATE
        .iter()
        .enumerate()
        .map(|(hour, (tasks, hours))| DailyActivity {
            date: hour_label(hour as u32),
            tasks: round1(tasks * task_scale),
            hours: round1(hours * hour_scale),
        })
        .collect()
}

/// Mon..Sun buckets, each series scaled by its own template sum and
/// rounded to whole numbers.
fn week_series(total_tasks: f64, total_hours: f64) -> Vec<DailyActivity> {
    let base_tasks_sum: f64 = WEEK_TEMPLATE.iter().map(|(_, t, _)| t).sum();
    let base_hours_sum: f64 = WEEK_TEMPLATE.iter().map(|(_, _, h)| h).sum();
    let task_scale = ratio(total_tasks, base_tasks_sum);
    let hour_scale = ratio(total_hours, base_hours_sum);

    WEEK_TEMPLATE
        .iter()
        .map(|(label, tasks, hours)| DailyActivity {
            date: label.to_string(),
            tasks: (tasks * task_scale).round(),
            hours: (hours * hour_scale).round(),
        })
        .collect()
}

/// Thirty trailing days, oldest first. Base values are randomized per day
/// (quieter weekends) with older days dampened slightly so the month reads
/// as a mild upward trend, then both series are rescaled to the actual
/// totals.
fn month_series<R: Rng>(
    total_tasks: f64,
    total_hours: f64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<DailyActivity> {
    struct BaseDay {
        label: String,
        tasks: f64,
        hours: f64,
    }

    let mut base: Vec<BaseDay> = Vec::with_capacity(MONTH_DAYS);
    for age in (0..MONTH_DAYS as i64).rev() {
        let date = now - Duration::days(age);
        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);

        let (mut tasks, mut hours) = if weekend {
            (
                (5 + rng.gen_range(0..3)) as f64,
                (6 + rng.gen_range(0..4)) as f64,
            )
        } else {
            (
                (20 + rng.gen_range(0..10)) as f64,
                (30 + rng.gen_range(0..8)) as f64,
            )
        };

        // Dampen older days for a slight upward trend across the month.
        let trend_factor = 1.0 + age as f64 / 100.0;
        tasks = (tasks / trend_factor).floor();
        hours = (hours / trend_factor).floor();

        base.push(BaseDay {
            label: short_date(date),
            tasks,
            hours,
        });
    }

    let base_tasks_sum: f64 = base.iter().map(|d| d.tasks).sum();
    let base_hours_sum: f64 = base.iter().map(|d| d.hours).sum();
    let task_scale = ratio(total_tasks, base_tasks_sum);
    let hour_scale = ratio(total_hours, base_hours_sum);

    base.into_iter()
        .map(|d| DailyActivity {
            date: d.label,
            tasks: (d.tasks * task_scale).round(),
            hours: (d.hours * hour_scale).round(),
        })
        .collect()
}

/// Scale factor, guarded so an all-zero template yields zero output
/// instead of dividing by zero.
fn ratio(actual: f64, base_sum: f64) -> f64 {
    if base_sum > 0.0 {
        actual / base_sum
    } else {
        0.0
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
