//! Result types returned by the mutating commands.

use jiff::Timestamp;
use serde::Serialize;

use super::Status;

/// Whether a command's effect reached durable storage.
///
/// `MemoryOnly` is a degraded success: the in-memory plan is correct but the
/// snapshot could not be written.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PersistenceStatus {
    Saved,
    MemoryOnly,
}

impl PersistenceStatus {
    pub fn from_saved(saved: bool) -> Self {
        if saved {
            PersistenceStatus::Saved
        } else {
            PersistenceStatus::MemoryOnly
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PersistenceStatus::Saved => "saved",
            PersistenceStatus::MemoryOnly => "memory_only",
        }
    }
}

/// Outcome of defining a plan.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanCreated {
    pub group_count: usize,
    pub unit_count: usize,
    pub replaced_previous: bool,
    pub message: String,
    pub persistence_status: PersistenceStatus,
    pub last_updated: Timestamp,
}

/// Outcome of a status update on a unit.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitUpdated {
    pub group_index: usize,
    pub unit_index: usize,
    pub status: Status,
    /// Status of the owning group after recomputation
    pub group_status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_note: Option<String>,
    /// How many other in-progress units were put back to `not_started`
    pub reset_count: usize,
    pub changes: Vec<String>,
    pub message: String,
    pub persistence_status: PersistenceStatus,
    pub last_updated: Timestamp,
}

/// Outcome of annotating a group.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupNoteUpdated {
    pub group_index: usize,
    pub developer_note: String,
    pub message: String,
    pub persistence_status: PersistenceStatus,
    pub last_updated: Timestamp,
}

/// Outcome of a positional update: either a unit or the group itself.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum UpdateOutcome {
    Unit(UnitUpdated),
    GroupNote(GroupNoteUpdated),
}

impl UpdateOutcome {
    pub fn persistence_status(&self) -> PersistenceStatus {
        match self {
            UpdateOutcome::Unit(result) => result.persistence_status,
            UpdateOutcome::GroupNote(result) => result.persistence_status,
        }
    }
}
