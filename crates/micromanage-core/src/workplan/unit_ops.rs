//! Status updates on units and notes on groups.

use std::collections::BTreeSet;

use log::{debug, info};

use super::WorkPlan;
use crate::{
    aggregation::refresh_group_status,
    error::{IndexTarget, Result, WorkplanError},
    models::{
        GroupNoteUpdated, PersistenceStatus, Status, UnitUpdated, UpdateOutcome, Workplan,
    },
    params::{validate_update_goal, UnitUpdate, UpdateStatus, GROUP_SENTINEL},
    transition::validate_transition,
};

impl WorkPlan {
    /// Positional update entry point.
    ///
    /// A `unit_index` of -1 addresses the group itself: only the developer
    /// note may be set and `status` must be absent. Any other index addresses
    /// a unit and requires `status`.
    ///
    /// # Errors
    ///
    /// * `WorkplanError::NotInitialized` - When the aggregate is not ready
    /// * `WorkplanError::NoActivePlan` - When no plan is defined
    /// * `WorkplanError::IndexOutOfRange` - When either index is outside the plan
    /// * `WorkplanError::InvalidOperation` - When a status is sent for a group
    /// * `WorkplanError::MissingRequiredField` - When the group note or the
    ///   unit status is absent
    /// * `WorkplanError::InvalidTransition` - When the unit may not move to
    ///   the requested status
    pub fn update_status(&mut self, params: &UpdateStatus) -> Result<UpdateOutcome> {
        debug!("Updating status: {params:?}");
        let plan = self.active_plan()?;
        let group_index = checked_index(IndexTarget::Group, params.group_index, plan.groups.len())?;

        if params.unit_index == GROUP_SENTINEL {
            if params.status.is_some() {
                return Err(WorkplanError::InvalidOperation {
                    message: "Status changes are not allowed when unitIndex is -1. \
                              Only the group's developerNote can be updated."
                        .to_string(),
                });
            }
            let note = params.developer_note.clone().ok_or_else(|| {
                WorkplanError::MissingRequiredField {
                    field: "developerNote".to_string(),
                    reason: "A developer note is required when unitIndex is -1".to_string(),
                }
            })?;
            return self
                .update_group_note(group_index, note)
                .map(UpdateOutcome::GroupNote);
        }

        let unit_index = checked_index(
            IndexTarget::Unit,
            params.unit_index,
            plan.groups[group_index].units.len(),
        )?;
        let status = params.status.ok_or_else(|| WorkplanError::MissingRequiredField {
            field: "status".to_string(),
            reason: "A status is required when updating a unit".to_string(),
        })?;

        self.update_unit_status(&UnitUpdate {
            group_index,
            unit_index,
            status,
            goal: params.goal.clone(),
            developer_note: params.developer_note.clone(),
        })
        .map(UpdateOutcome::Unit)
    }

    /// Moves one unit to a new status, optionally rewriting its goal and note.
    ///
    /// Starting a unit (`in_progress`) puts every other in-progress unit in
    /// the plan back to `not_started`. The owning group, and any group
    /// touched by that reset, has its status recomputed.
    ///
    /// # Errors
    ///
    /// * `WorkplanError::NotInitialized` - When the aggregate is not ready
    /// * `WorkplanError::NoActivePlan` - When no plan is defined
    /// * `WorkplanError::IndexOutOfRange` - When either index is outside the plan
    /// * `WorkplanError::InvalidTransition` - When the unit may not move to
    ///   the requested status
    /// * `WorkplanError::InvalidInput` - When the new goal is empty
    pub fn update_unit_status(&mut self, update: &UnitUpdate) -> Result<UnitUpdated> {
        let UnitUpdate {
            group_index,
            unit_index,
            status,
            ..
        } = *update;

        let plan = self.active_plan_mut()?;
        let group_len = plan.groups.len();
        let group = plan.groups.get(group_index).ok_or_else(|| {
            WorkplanError::index_out_of_range(IndexTarget::Group, group_index as i64, group_len)
        })?;
        let unit = group.units.get(unit_index).ok_or_else(|| {
            WorkplanError::index_out_of_range(
                IndexTarget::Unit,
                unit_index as i64,
                group.units.len(),
            )
        })?;

        let previous = unit.status;
        validate_transition(previous, status)?;
        if let Some(goal) = &update.goal {
            validate_update_goal(goal)?;
        }

        let mut touched = BTreeSet::from([group_index]);
        let reset_count = if status == Status::InProgress {
            reset_in_progress(plan, (group_index, unit_index), &mut touched)
        } else {
            0
        };

        let unit = &mut plan.groups[group_index].units[unit_index];
        unit.status = status;
        let mut changes = Vec::new();
        if previous != status {
            changes.push(format!("Status: {previous} → {status}"));
        }
        if let Some(goal) = &update.goal {
            unit.goal = goal.clone();
            changes.push(format!("Goal: {goal}"));
        }
        if let Some(note) = &update.developer_note {
            unit.developer_note = Some(note.clone());
            changes.push("Developer note updated".to_string());
        }
        if reset_count > 0 {
            changes.push(reset_summary(reset_count));
        }

        for &index in &touched {
            refresh_group_status(&mut plan.groups[index]);
        }
        let group_status = plan.groups[group_index].status;

        let persistence_status = PersistenceStatus::from_saved(self.save_state());
        info!(
            "Unit {unit_index} of group {group_index} set to {status}, group is {group_status} ({})",
            persistence_status.as_str()
        );

        let mut message = format!(
            "Unit {unit_index} of group {group_index} updated to \"{status}\"."
        );
        if reset_count > 0 {
            message.push(' ');
            message.push_str(&reset_summary(reset_count));
            message.push('.');
        }

        Ok(UnitUpdated {
            group_index,
            unit_index,
            status,
            group_status,
            goal: update.goal.clone(),
            developer_note: update.developer_note.clone(),
            reset_count,
            changes,
            message,
            persistence_status,
            last_updated: self.last_updated,
        })
    }

    /// Sets the developer note of a group without touching its units.
    ///
    /// # Errors
    ///
    /// * `WorkplanError::NotInitialized` - When the aggregate is not ready
    /// * `WorkplanError::NoActivePlan` - When no plan is defined
    /// * `WorkplanError::IndexOutOfRange` - When the group does not exist
    pub fn update_group_note(
        &mut self,
        group_index: usize,
        developer_note: impl Into<String>,
    ) -> Result<GroupNoteUpdated> {
        let developer_note = developer_note.into();
        let plan = self.active_plan_mut()?;
        let group_len = plan.groups.len();
        let group = plan.groups.get_mut(group_index).ok_or_else(|| {
            WorkplanError::index_out_of_range(IndexTarget::Group, group_index as i64, group_len)
        })?;
        group.developer_note = Some(developer_note.clone());

        let persistence_status = PersistenceStatus::from_saved(self.save_state());
        info!(
            "Developer note of group {group_index} updated ({})",
            persistence_status.as_str()
        );

        Ok(GroupNoteUpdated {
            group_index,
            developer_note,
            message: format!("Developer note of group {group_index} updated."),
            persistence_status,
            last_updated: self.last_updated,
        })
    }
}

/// Converts a caller-supplied index into a position, rejecting anything
/// outside `0..len`.
fn checked_index(target: IndexTarget, index: i64, len: usize) -> Result<usize> {
    usize::try_from(index)
        .ok()
        .filter(|&position| position < len)
        .ok_or_else(|| WorkplanError::index_out_of_range(target, index, len))
}

/// Puts every in-progress unit other than `keep` back to `not_started` and
/// records the groups it touched.
fn reset_in_progress(
    plan: &mut Workplan,
    keep: (usize, usize),
    touched: &mut BTreeSet<usize>,
) -> usize {
    let mut count = 0;
    for (group_index, group) in plan.groups.iter_mut().enumerate() {
        for (unit_index, unit) in group.units.iter_mut().enumerate() {
            if (group_index, unit_index) != keep && unit.status == Status::InProgress {
                unit.status = Status::NotStarted;
                touched.insert(group_index);
                count += 1;
            }
        }
    }
    if count > 0 {
        debug!("Reset {count} in-progress units to not_started");
    }
    count
}

fn reset_summary(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{count} other in-progress {noun} reset to \"not_started\"")
}
