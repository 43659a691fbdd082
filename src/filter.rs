//! Search/role filtering of a projected roster.

use crate::model::{RoleFilter, TeamMember};

/// Options controlling a roster filter pass.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Free-text query matched against member name and role.
    pub query: String,
    /// Role constraint; `All` passes every role.
    pub role: RoleFilter,
}

impl FilterOptions {
    pub fn new(query: impl Into<String>, role: RoleFilter) -> Self {
        Self {
            query: query.into(),
            role,
        }
    }
}

/// Filter a projected roster. A member passes iff the role filter matches,
/// the query is empty or a case-insensitive substring of the name or role,
/// and the member is visible in the projected range. Input order is
/// preserved; this never re-sorts.
pub fn filter(roster: &[TeamMember], options: &FilterOptions) -> Vec<TeamMember> {
    let query = options.query.trim().to_lowercase();

    roster
        .iter()
        .filter(|m| {
            let matches_query = query.is_empty()
                || m.name.to_lowercase().contains(&query)
                || m.role.as_str().to_lowercase().contains(&query);
            matches_query && options.role.matches(m.role) && m.is_visible_in_range
        })
        .cloned()
        .collect()
}
