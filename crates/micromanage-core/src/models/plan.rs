//! Workplan model definition: the root of the hierarchy.

use serde::{Deserialize, Serialize};

use super::{Group, Status};

/// The single active work plan: a goal decomposed into ordered groups.
///
/// Group order is meaningful; groups are addressed by their zero-based
/// position and are never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workplan {
    /// What the whole plan delivers
    pub goal: String,

    /// Ordered groups of units
    #[serde(alias = "pullRequests")]
    pub groups: Vec<Group>,

    /// Whether the plan is expected to need further refinement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<bool>,
}

impl Workplan {
    /// Total number of units across all groups.
    pub fn unit_count(&self) -> usize {
        self.groups.iter().map(|group| group.units.len()).sum()
    }

    /// Number of units across all groups with the given status.
    pub fn count_units(&self, status: Status) -> usize {
        self.groups.iter().map(|group| group.count_units(status)).sum()
    }

    /// Number of groups whose derived status is `completed`.
    pub fn completed_groups(&self) -> usize {
        self.groups
            .iter()
            .filter(|group| group.status == Status::Completed)
            .count()
    }
}
