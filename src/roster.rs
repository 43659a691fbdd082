//! Seeded roster fixture. The derivation core treats the roster as an
//! injected dataset; this module supplies a deterministic ten-member team
//! whose last-active timestamps are offsets from the supplied `now`.

use chrono::{DateTime, Duration, Utc};

use crate::model::{ContactInfo, Role, Snapshot, TeamMember};

fn snap(tasks_completed: u32, total_tasks: u32, hours_logged: f64, productivity_score: u32) -> Snapshot {
    Snapshot {
        tasks_completed,
        total_tasks,
        hours_logged,
        productivity_score,
    }
}

fn avatar(seed: &str, background: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/png?seed={seed}&backgroundColor={background}&radius=50"
    )
}

struct MemberSeed {
    id: &'static str,
    name: &'static str,
    avatar_seed: &'static str,
    avatar_bg: &'static str,
    role: Role,
    last_active_mins_ago: i64,
    day: Snapshot,
    week: Snapshot,
    month: Snapshot,
    contact: ContactInfo,
}

impl MemberSeed {
    fn build(self, now: DateTime<Utc>) -> TeamMember {
        TeamMember {
            id: self.id.to_string(),
            name: self.name.to_string(),
            avatar: avatar(self.avatar_seed, self.avatar_bg),
            role: self.role,
            // Canonical fields start on the week snapshot; every read path
            // goes through projection, which overwrites all four together.
            productivity_score: self.week.productivity_score,
            tasks_completed: self.week.tasks_completed,
            total_tasks: self.week.total_tasks,
            hours_logged: self.week.hours_logged,
            last_active: now - Duration::minutes(self.last_active_mins_ago),
            day: self.day,
            week: self.week,
            month: self.month,
            is_visible_in_range: true,
            contact: Some(self.contact),
        }
    }
}

fn contact(
    email: &str,
    phone: &str,
    department: &str,
    location: &str,
    manager: &str,
    start_date: &str,
    slack_handle: &str,
    github_username: Option<&str>,
    linkedin: Option<&str>,
) -> ContactInfo {
    ContactInfo {
        email: email.to_string(),
        phone: phone.to_string(),
        department: department.to_string(),
        location: location.to_string(),
        manager: manager.to_string(),
        start_date: start_date.to_string(),
        slack_handle: slack_handle.to_string(),
        github_username: github_username.map(str::to_string),
        linkedin: linkedin.map(str::to_string),
    }
}

/// The full ten-member seed roster. Deterministic given `now`.
pub fn seed_roster(now: DateTime<Utc>) -> Vec<TeamMember> {
    let seeds = vec![
        MemberSeed {
            id: "user-1",
            name: "Alex Johnson",
            avatar_seed: "Alex",
            avatar_bg: "b6e3f4",
            role: Role::Developer,
            last_active_mins_ago: 30,
            day: snap(8, 10, 7.5, 90),
            week: snap(32, 35, 38.0, 92),
            month: snap(32, 35, 152.0, 92),
            contact: contact(
                "alex.johnson@company.com",
                "+1 (555) 123-4567",
                "Engineering",
                "San Francisco, CA",
                "Michael Chen",
                "2021-03-15",
                "@alexj",
                Some("alexjdev"),
                Some("linkedin.com/in/alexjohnson"),
            ),
        },
        MemberSeed {
            id: "user-2",
            name: "Sarah Williams",
            avatar_seed: "Sarah",
            avatar_bg: "ffdfbf",
            role: Role::Designer,
            last_active_mins_ago: 120,
            day: snap(6, 7, 6.5, 85),
            week: snap(24, 28, 35.0, 88),
            month: snap(24, 28, 140.0, 88),
            contact: contact(
                "sarah.williams@company.com",
                "+1 (555) 234-5678",
                "Design",
                "New York, NY",
                "Emily Wilson",
                "2020-07-22",
                "@sarahw",
                None,
                Some("linkedin.com/in/sarahwilliams"),
            ),
        },
        MemberSeed {
            id: "user-3",
            name: "Michael Chen",
            avatar_seed: "Michael",
            avatar_bg: "c0aede",
            role: Role::ProductManager,
            last_active_mins_ago: 45,
            day: snap(5, 6, 8.0, 83),
            week: snap(20, 24, 42.0, 85),
            month: snap(20, 24, 168.0, 85),
            contact: contact(
                "michael.chen@company.com",
                "+1 (555) 345-6789",
                "Product",
                "Seattle, WA",
                "Robert Smith",
                "2019-11-05",
                "@michaelc",
                None,
                Some("linkedin.com/in/michaelchen"),
            ),
        },
        MemberSeed {
            id: "user-4",
            name: "Jessica Lee",
            avatar_seed: "Jessica",
            avatar_bg: "ffd5dc",
            role: Role::Developer,
            last_active_mins_ago: 180,
            day: snap(4, 6, 5.5, 70),
            week: snap(26, 32, 32.0, 78),
            month: snap(26, 32, 128.0, 78),
            contact: contact(
                "jessica.lee@company.com",
                "+1 (555) 456-7890",
                "Engineering",
                "Austin, TX",
                "Alex Johnson",
                "2022-01-10",
                "@jessical",
                Some("jesslee"),
                Some("linkedin.com/in/jessicaleecoder"),
            ),
        },
        MemberSeed {
            id: "user-5",
            name: "David Rodriguez",
            avatar_seed: "David",
            avatar_bg: "d1d4f9",
            role: Role::QaEngineer,
            last_active_mins_ago: 15,
            day: snap(10, 10, 7.5, 95),
            week: snap(38, 40, 40.0, 94),
            month: snap(38, 40, 160.0, 94),
            contact: contact(
                "david.rodriguez@company.com",
                "+1 (555) 567-8901",
                "Quality Assurance",
                "Chicago, IL",
                "Michael Chen",
                "2020-09-18",
                "@davidr",
                Some("davidrqa"),
                Some("linkedin.com/in/davidrodriguez"),
            ),
        },
        MemberSeed {
            id: "user-6",
            name: "Emily Wilson",
            avatar_seed: "Emily",
            avatar_bg: "c0e5c8",
            role: Role::Designer,
            last_active_mins_ago: 60 * 24 * 2,
            // Not active today
            day: snap(0, 0, 0.0, 0),
            week: snap(18, 25, 32.0, 72),
            month: snap(18, 25, 128.0, 72),
            contact: contact(
                "emily.wilson@company.com",
                "+1 (555) 678-9012",
                "Design",
                "Portland, OR",
                "Robert Smith",
                "2021-05-03",
                "@emilyw",
                None,
                Some("linkedin.com/in/emilywilson"),
            ),
        },
        MemberSeed {
            id: "user-7",
            name: "James Taylor",
            avatar_seed: "James",
            avatar_bg: "f9c9b6",
            role: Role::Developer,
            last_active_mins_ago: 60 * 24,
            // Not active today
            day: snap(0, 0, 0.0, 0),
            week: snap(22, 34, 30.0, 65),
            month: snap(22, 34, 120.0, 65),
            contact: contact(
                "james.taylor@company.com",
                "+1 (555) 789-0123",
                "Engineering",
                "Denver, CO",
                "Alex Johnson",
                "2022-03-28",
                "@jamest",
                Some("jtaylor"),
                Some("linkedin.com/in/jamestaylor"),
            ),
        },
        MemberSeed {
            id: "user-8",
            name: "Olivia Martinez",
            avatar_seed: "Olivia",
            avatar_bg: "f8e3a3",
            role: Role::Marketing,
            last_active_mins_ago: 180,
            day: snap(5, 6, 6.0, 80),
            week: snap(22, 26, 34.0, 82),
            month: snap(22, 26, 136.0, 82),
            contact: contact(
                "olivia.martinez@company.com",
                "+1 (555) 890-1234",
                "Marketing",
                "Miami, FL",
                "Robert Smith",
                "2021-08-16",
                "@oliviam",
                None,
                Some("linkedin.com/in/oliviamartinez"),
            ),
        },
        MemberSeed {
            id: "user-9",
            name: "Daniel Kim",
            avatar_seed: "Daniel",
            avatar_bg: "b6ccf9",
            role: Role::Developer,
            last_active_mins_ago: 60,
            day: snap(7, 8, 7.0, 88),
            week: snap(32, 36, 39.0, 90),
            month: snap(32, 36, 156.0, 90),
            contact: contact(
                "daniel.kim@company.com",
                "+1 (555) 901-2345",
                "Engineering",
                "Boston, MA",
                "Alex Johnson",
                "2020-11-30",
                "@danielk",
                Some("dkim"),
                Some("linkedin.com/in/danielkim"),
            ),
        },
        MemberSeed {
            id: "user-10",
            name: "Sophia Patel",
            avatar_seed: "Sophia",
            avatar_bg: "d1bcf9",
            role: Role::QaEngineer,
            last_active_mins_ago: 60 * 24 * 3,
            // Not active today
            day: snap(0, 0, 0.0, 0),
            week: snap(24, 32, 33.0, 76),
            month: snap(24, 32, 132.0, 76),
            contact: contact(
                "sophia.patel@company.com",
                "+1 (555) 012-3456",
                "Quality Assurance",
                "Atlanta, GA",
                "David Rodriguez",
                "2021-10-11",
                "@sophiap",
                Some("spatel"),
                Some("linkedin.com/in/sophiapatel"),
            ),
        },
    ];

    seeds.into_iter().map(|s| s.build(now)).collect()
}

/// First `count` members of the seed roster.
pub fn seed_roster_n(now: DateTime<Utc>, count: usize) -> Vec<TeamMember> {
    let mut roster = seed_roster(now);
    roster.truncate(count);
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_seed_roster_shape() {
        let roster = seed_roster(now());
        assert_eq!(roster.len(), 10);
        assert_eq!(roster[0].id, "user-1");
        assert_eq!(roster[9].id, "user-10");
        // Unique ids
        let mut ids: Vec<&str> = roster.iter().map(|m| m.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_snapshot_invariants() {
        for m in seed_roster(now()) {
            for s in [m.day, m.week, m.month] {
                assert!(s.tasks_completed <= s.total_tasks, "{}", m.id);
                assert!(s.hours_logged >= 0.0);
                assert!(s.productivity_score <= 100);
            }
        }
    }

    #[test]
    fn test_last_active_offsets() {
        let roster = seed_roster(now());
        assert_eq!((now() - roster[0].last_active).num_minutes(), 30);
        assert_eq!((now() - roster[5].last_active).num_days(), 2);
        assert_eq!((now() - roster[9].last_active).num_days(), 3);
    }

    #[test]
    fn test_inactive_members_have_empty_day() {
        let roster = seed_roster(now());
        for idx in [5, 6, 9] {
            assert_eq!(roster[idx].day.total_tasks, 0);
            assert_eq!(roster[idx].day.hours_logged, 0.0);
        }
    }

    #[test]
    fn test_truncated_roster() {
        assert_eq!(seed_roster_n(now(), 3).len(), 3);
        assert_eq!(seed_roster_n(now(), 99).len(), 10);
    }
}
