//! Unit model definition.

use serde::{Deserialize, Serialize};

use super::Status;

/// An atomic piece of work with its own workflow status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// What this unit changes
    pub goal: String,

    /// Current workflow status
    #[serde(default)]
    pub status: Status,

    /// Free-form implementation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer_note: Option<String>,

    /// Identifier of the revision that implements this unit, once known
    #[serde(default, alias = "commitId", skip_serializing_if = "Option::is_none")]
    pub revision_id: Option<String>,

    /// Whether the implemented revision has to be reworked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_revision: Option<bool>,

    /// Revision this unit amends
    #[serde(
        default,
        alias = "revisesTargetCommit",
        skip_serializing_if = "Option::is_none"
    )]
    pub revises_target: Option<String>,

    /// Whether this unit is expected to need further refinement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<bool>,
}

impl Unit {
    /// Creates a unit in the initial `not_started` state.
    pub fn new(goal: impl Into<String>, developer_note: Option<String>) -> Self {
        Self {
            goal: goal.into(),
            status: Status::NotStarted,
            developer_note,
            ..Default::default()
        }
    }
}
