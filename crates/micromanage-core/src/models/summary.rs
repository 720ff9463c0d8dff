//! Progress report types built from the active plan.

use std::path::PathBuf;

use jiff::Timestamp;
use serde::Serialize;

use super::{Group, Status, Workplan};

/// Rounded completion percentage; 0 when there is nothing to complete.
pub fn percent_complete(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Completed/total counter pair.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub completed: usize,
    pub total: usize,
    pub percent_complete: u32,
}

impl Tally {
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percent_complete: percent_complete(completed, total),
        }
    }
}

/// Plan-wide counters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Completed groups
    pub groups: Tally,
    /// Completed units
    pub units: Tally,
}

/// One line per group: its status and unit counters.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub group_index: usize,
    pub goal: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_note: Option<String>,
    pub units: Tally,
}

impl GroupSummary {
    fn from_group(group_index: usize, group: &Group) -> Self {
        Self {
            group_index,
            goal: group.goal.clone(),
            status: group.status,
            developer_note: group.developer_note.clone(),
            units: Tally::new(group.count_units(Status::Completed), group.units.len()),
        }
    }
}

/// A unit as shown in the detailed view.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnitDetail {
    pub unit_index: usize,
    pub goal: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_note: Option<String>,
}

/// A group with all of its units, including developer notes.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetail {
    pub group_index: usize,
    pub goal: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_note: Option<String>,
    pub units: Vec<UnitDetail>,
}

impl GroupDetail {
    fn from_group(group_index: usize, group: &Group) -> Self {
        Self {
            group_index,
            goal: group.goal.clone(),
            status: group.status,
            developer_note: group.developer_note.clone(),
            units: group
                .units
                .iter()
                .enumerate()
                .map(|(unit_index, unit)| UnitDetail {
                    unit_index,
                    goal: unit.goal.clone(),
                    status: unit.status,
                    developer_note: unit.developer_note.clone(),
                })
                .collect(),
        }
    }
}

/// Where the snapshot lives and whether it has been written.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersistenceInfo {
    pub data_file_path: PathBuf,
    pub file_exists: bool,
    pub last_updated: Timestamp,
}

/// Read-only view of the active plan's progress.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    pub goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_more_thoughts: Option<bool>,
    pub progress: Progress,
    pub groups: Vec<GroupSummary>,
    pub details: Vec<GroupDetail>,
    pub persistence: PersistenceInfo,
}

impl ProgressReport {
    /// Build the report for a plan.
    pub fn new(plan: &Workplan, persistence: PersistenceInfo) -> Self {
        Self {
            goal: plan.goal.clone(),
            needs_more_thoughts: plan.needs_more_thoughts,
            progress: Progress {
                groups: Tally::new(plan.completed_groups(), plan.groups.len()),
                units: Tally::new(plan.count_units(Status::Completed), plan.unit_count()),
            },
            groups: plan
                .groups
                .iter()
                .enumerate()
                .map(|(index, group)| GroupSummary::from_group(index, group))
                .collect(),
            details: plan
                .groups
                .iter()
                .enumerate()
                .map(|(index, group)| GroupDetail::from_group(index, group))
                .collect(),
            persistence,
        }
    }
}
