use crate::model::{Role, TaskPriority};

/// A fixed task prototype, cycled through when synthesizing a member's
/// task list.
pub struct TaskTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub priority: TaskPriority,
    pub tags: &'static [&'static str],
    pub time_estimate: f64,
}

const DEVELOPER: [TaskTemplate; 3] = [
    TaskTemplate {
        title: "Implement user authentication flow",
        description: "Add secure login and registration functionality",
        priority: TaskPriority::High,
        tags: &["Frontend", "Backend", "Security"],
        time_estimate: 8.0,
    },
    TaskTemplate {
        title: "Fix dashboard loading performance",
        description: "Optimize data fetching and rendering",
        priority: TaskPriority::Medium,
        tags: &["Performance", "Frontend"],
        time_estimate: 4.0,
    },
    TaskTemplate {
        title: "Add unit tests for API endpoints",
        description: "Improve test coverage for critical endpoints",
        priority: TaskPriority::Medium,
        tags: &["Testing", "Backend"],
        time_estimate: 6.0,
    },
];

const DESIGNER: [TaskTemplate; 3] = [
    TaskTemplate {
        title: "Create new dashboard layout",
        description: "Design responsive dashboard interface",
        priority: TaskPriority::High,
        tags: &["UI", "UX", "Design"],
        time_estimate: 6.0,
    },
    TaskTemplate {
        title: "Update component library",
        description: "Refresh design system components",
        priority: TaskPriority::Medium,
        tags: &["Design", "UI"],
        time_estimate: 4.0,
    },
    TaskTemplate {
        title: "Design mobile navigation",
        description: "Create mobile-friendly navigation patterns",
        priority: TaskPriority::Medium,
        tags: &["UX", "Mobile"],
        time_estimate: 5.0,
    },
];

const PRODUCT_MANAGER: [TaskTemplate; 3] = [
    TaskTemplate {
        title: "Define Q2 roadmap",
        description: "Plan upcoming features and priorities",
        priority: TaskPriority::High,
        tags: &["Product", "Planning"],
        time_estimate: 8.0,
    },
    TaskTemplate {
        title: "Analyze user feedback",
        description: "Review and categorize user suggestions",
        priority: TaskPriority::Medium,
        tags: &["Product", "Research"],
        time_estimate: 4.0,
    },
    TaskTemplate {
        title: "Update product documentation",
        description: "Maintain product specifications",
        priority: TaskPriority::Low,
        tags: &["Documentation"],
        time_estimate: 3.0,
    },
];

const QA_ENGINEER: [TaskTemplate; 3] = [
    TaskTemplate {
        title: "Test new authentication flow",
        description: "Verify security and functionality",
        priority: TaskPriority::High,
        tags: &["Testing", "Security", "QA"],
        time_estimate: 6.0,
    },
    TaskTemplate {
        title: "Regression testing for dashboard",
        description: "Ensure no new bugs introduced",
        priority: TaskPriority::Medium,
        tags: &["Testing", "QA"],
        time_estimate: 4.0,
    },
    TaskTemplate {
        title: "Create test automation scripts",
        description: "Set up automated testing pipeline",
        priority: TaskPriority::Medium,
        tags: &["Automation", "QA"],
        time_estimate: 5.0,
    },
];

const MARKETING: [TaskTemplate; 3] = [
    TaskTemplate {
        title: "Create product launch campaign",
        description: "Plan and execute launch strategy",
        priority: TaskPriority::High,
        tags: &["Marketing", "Campaign"],
        time_estimate: 8.0,
    },
    TaskTemplate {
        title: "Update website content",
        description: "Refresh product pages and blog",
        priority: TaskPriority::Medium,
        tags: &["Content", "Marketing"],
        time_estimate: 4.0,
    },
    TaskTemplate {
        title: "Social media campaign",
        description: "Plan and schedule social posts",
        priority: TaskPriority::Medium,
        tags: &["Social Media", "Marketing"],
        time_estimate: 5.0,
    },
];

/// The template pool for a role. The role set is closed, so every role has
/// a pool; `Developer` doubles as the generic pool for embedding callers
/// that need one.
pub fn templates_for(role: Role) -> &'static [TaskTemplate] {
    match role {
        Role::Developer => &DEVELOPER,
        Role::Designer => &DESIGNER,
        Role::ProductManager => &PRODUCT_MANAGER,
        Role::QaEngineer => &QA_ENGINEER,
        Role::Marketing => &MARKETING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_role_has_three_templates() {
        for role in [
            Role::Developer,
            Role::Designer,
            Role::ProductManager,
            Role::QaEngineer,
            Role::Marketing,
        ] {
            let pool = templates_for(role);
            assert_eq!(pool.len(), 3, "{role}");
            for t in pool {
                assert!(!t.title.is_empty());
                assert!(t.time_estimate > 0.0);
                assert!(!t.tags.is_empty());
            }
        }
    }
}
