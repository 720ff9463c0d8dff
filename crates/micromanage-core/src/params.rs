//! Parameter structures for work plan commands
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde and the optional JSON schema. Field
//! names are camelCase on the wire to match the command surface:
//!
//! ```text
//! plan   { goal, groups: [{ goal, units: [{ goal, developerNote? }], developerNote? }], needsMoreThoughts? }
//! track  {}
//! update { groupIndex, unitIndex (-1 addresses the group), status?, goal?, developerNote? }
//! ```
//!
//! Interface layers wrap these types (see the MCP `McpParams` wrapper and the
//! clap argument structs) and convert into them with `From`.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WorkplanError},
    models::Status,
};

/// Maximum length of any goal, in characters.
pub const MAX_GOAL_LEN: usize = 60;

/// Maximum length of a developer note supplied when defining a plan.
pub const MAX_NOTE_LEN: usize = 300;

/// Unit index that addresses the group itself instead of one of its units.
pub const GROUP_SENTINEL: i64 = -1;

/// Planned unit within a group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UnitPlan {
    /// What this unit changes, phrased like a commit message (max 60 characters)
    pub goal: String,
    /// Implementation notes for this unit (max 300 characters)
    #[serde(default)]
    pub developer_note: Option<String>,
}

/// Planned group with its units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct GroupPlan {
    /// What this group delivers, phrased like a pull request title (max 60 characters)
    pub goal: String,
    /// Units of this group in order; at least one
    pub units: Vec<UnitPlan>,
    /// Implementation notes for this group (max 300 characters)
    #[serde(default)]
    pub developer_note: Option<String>,
}

/// Parameters for defining (or replacing) the plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct DefinePlan {
    /// What the whole plan delivers (max 60 characters)
    pub goal: String,
    /// Groups in order; at least one
    pub groups: Vec<GroupPlan>,
    /// Whether the plan may need further refinement
    #[serde(default)]
    pub needs_more_thoughts: Option<bool>,
}

impl DefinePlan {
    /// Checks shape and length bounds of the whole request.
    ///
    /// # Errors
    ///
    /// * `WorkplanError::InvalidInput` - When a goal is empty or too long, a
    ///   note is too long, or a group or the plan has nothing in it
    pub fn validate(&self) -> Result<()> {
        validate_goal("goal", &self.goal)?;
        if self.groups.is_empty() {
            return Err(WorkplanError::invalid_input("groups")
                .with_reason("At least one group is required"));
        }

        for (group_index, group) in self.groups.iter().enumerate() {
            let prefix = format!("groups[{group_index}]");
            validate_goal(&format!("{prefix}.goal"), &group.goal)?;
            validate_note(&format!("{prefix}.developerNote"), group.developer_note.as_deref())?;
            if group.units.is_empty() {
                return Err(WorkplanError::invalid_input(format!("{prefix}.units"))
                    .with_reason("At least one unit is required"));
            }

            for (unit_index, unit) in group.units.iter().enumerate() {
                let prefix = format!("{prefix}.units[{unit_index}]");
                validate_goal(&format!("{prefix}.goal"), &unit.goal)?;
                validate_note(&format!("{prefix}.developerNote"), unit.developer_note.as_deref())?;
            }
        }
        Ok(())
    }
}

/// Positional update of a unit, or of a group when `unit_index` is -1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatus {
    /// Zero-based index of the group
    pub group_index: i64,
    /// Zero-based index of the unit within the group, or -1 to annotate the group itself
    pub unit_index: i64,
    /// New status for the unit. Required for units; must be omitted when unitIndex is -1
    #[serde(default)]
    pub status: Option<Status>,
    /// New goal for the unit
    #[serde(default)]
    pub goal: Option<String>,
    /// Developer note for the unit, or for the group when unitIndex is -1
    #[serde(default)]
    pub developer_note: Option<String>,
}

/// Status change of one addressed unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitUpdate {
    pub group_index: usize,
    pub unit_index: usize,
    pub status: Status,
    pub goal: Option<String>,
    pub developer_note: Option<String>,
}

impl UnitUpdate {
    /// Status change without goal or note edits.
    pub fn status(group_index: usize, unit_index: usize, status: Status) -> Self {
        Self {
            group_index,
            unit_index,
            status,
            goal: None,
            developer_note: None,
        }
    }
}

/// A goal supplied with a status update only needs to be non-empty.
pub(crate) fn validate_update_goal(goal: &str) -> Result<()> {
    if goal.trim().is_empty() {
        return Err(WorkplanError::invalid_input("goal").with_reason("Goal must be a non-empty string"));
    }
    Ok(())
}

fn validate_goal(field: &str, goal: &str) -> Result<()> {
    if goal.trim().is_empty() {
        return Err(WorkplanError::invalid_input(field).with_reason("Goal must be a non-empty string"));
    }
    if goal.chars().count() > MAX_GOAL_LEN {
        return Err(WorkplanError::invalid_input(field).with_reason(format!(
            "Goal must be at most {MAX_GOAL_LEN} characters. Consider moving detailed information to the developerNote field."
        )));
    }
    Ok(())
}

fn validate_note(field: &str, note: Option<&str>) -> Result<()> {
    match note {
        Some(note) if note.chars().count() > MAX_NOTE_LEN => {
            Err(WorkplanError::invalid_input(field).with_reason(format!(
                "Developer note must be at most {MAX_NOTE_LEN} characters. Consider breaking it into smaller, focused notes."
            )))
        }
        _ => Ok(()),
    }
}
