//! Role histogram for the distribution chart.

use crate::metrics::RoleDistribution;
use crate::model::TeamMember;

/// Count members per role, in first-seen order. An empty subset yields an
/// empty sequence; the consumer renders its own empty state.
pub fn distribute(subset: &[TeamMember]) -> Vec<RoleDistribution> {
    let mut counts: Vec<RoleDistribution> = Vec::new();
    for member in subset {
        let role = member.role.as_str();
        match counts.iter_mut().find(|d| d.role == role) {
            Some(entry) => entry.value += 1,
            None => counts.push(RoleDistribution {
                role: role.to_string(),
                value: 1,
            }),
        }
    }
    counts
}
