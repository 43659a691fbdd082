//! Export serialization for the member table. Pure string building over
//! the core's projected output; columns match the dashboard table.

use chrono::{DateTime, Utc};

use crate::date_util::format_datetime;
use crate::model::{TeamMember, TimeRange};

const COLUMNS: [&str; 7] = [
    "Name",
    "Role",
    "Productivity (%)",
    "Tasks Completed",
    "Total Tasks",
    "Hours Logged",
    "Last Active",
];

/// Render a projected member list as CSV, one row per member.
pub fn to_csv(members: &[TeamMember], _range: TimeRange) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for m in members {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            csv_escape(&m.name),
            csv_escape(m.role.as_str()),
            m.productivity_score,
            m.tasks_completed,
            m.total_tasks,
            m.hours_logged,
            csv_escape(&format_datetime(m.last_active)),
        ));
    }
    out
}

/// Render a projected member list as a Markdown table, with a heading
/// naming the exported range.
pub fn to_markdown(members: &[TeamMember], range: TimeRange, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "# Team Report - {range}\n\nGenerated {}\n\n",
        format_datetime(now)
    ));
    out.push_str(&format!("| {} |\n", COLUMNS.join(" | ")));
    out.push_str(&format!("|{}\n", " --- |".repeat(COLUMNS.len())));
    for m in members {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            m.name,
            m.role,
            m.productivity_score,
            m.tasks_completed,
            m.total_tasks,
            m.hours_logged,
            format_datetime(m.last_active),
        ));
    }
    out
}

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeRange;
    use crate::projection::project;
    use crate::roster::seed_roster;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_csv_header_and_rows() {
        let members = project(&seed_roster(now()), TimeRange::Week, now());
        let csv = to_csv(&members, TimeRange::Week);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("Name,Role,Productivity (%)"));
        assert!(lines[1].starts_with("Alex Johnson,Developer,92,32,35,38,"));
    }

    #[test]
    fn test_csv_escape() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_last_active_is_localized_datetime() {
        let members = project(&seed_roster(now()), TimeRange::Week, now());
        let csv = to_csv(&members, TimeRange::Week);
        // user-1 was last active 30 minutes before now.
        assert!(csv.contains("Jun 2, 2025 11:30"));
    }

    #[test]
    fn test_markdown_table() {
        let members = project(&seed_roster(now()), TimeRange::Month, now());
        let md = to_markdown(&members, TimeRange::Month, now());
        assert!(md.starts_with("# Team Report - Month"));
        assert!(md.contains("| Name | Role |"));
        // Header, separator, and ten member rows.
        assert_eq!(md.lines().filter(|l| l.starts_with('|')).count(), 12);
    }
}
