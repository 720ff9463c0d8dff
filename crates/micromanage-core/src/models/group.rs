//! Group model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::{Status, Unit};

/// An ordered collection of units forming one deliverable slice of the plan.
///
/// `status` is never set directly; it is recomputed from the units whenever
/// one of them changes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// What this group delivers
    pub goal: String,

    /// Status derived from the units
    #[serde(default)]
    pub status: Status,

    /// Ordered units; at least one
    #[serde(alias = "commits")]
    pub units: Vec<Unit>,

    /// Free-form implementation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_note: Option<String>,

    /// Whether this group is expected to need further refinement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<bool>,
}

impl Group {
    /// Statuses of the units in order.
    pub fn unit_statuses(&self) -> Vec<Status> {
        self.units.iter().map(|unit| unit.status).collect()
    }

    /// Number of units with the given status.
    pub fn count_units(&self, status: Status) -> usize {
        self.units.iter().filter(|unit| unit.status == status).count()
    }
}
