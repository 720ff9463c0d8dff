//! Plan-level operations for the WorkPlan.

use log::{debug, info};

use super::WorkPlan;
use crate::{
    error::Result,
    models::{
        Group, PersistenceInfo, PersistenceStatus, PlanCreated, PlanState, ProgressReport, Status,
        Unit, Workplan,
    },
    params::DefinePlan,
};

impl WorkPlan {
    /// Defines the active plan, replacing any existing one.
    ///
    /// Every group and unit starts at `not_started`. Replacement is
    /// unconditional, even when work on the previous plan is in progress.
    ///
    /// # Errors
    ///
    /// * `WorkplanError::NotInitialized` - When the aggregate is not ready
    /// * `WorkplanError::InvalidInput` - When `params` fails shape or length
    ///   validation; nothing is replaced in that case
    pub fn define_plan(&mut self, params: &DefinePlan) -> Result<PlanCreated> {
        self.ensure_ready()?;
        params.validate()?;
        debug!("Defining plan: {params:?}");

        let plan = Workplan {
            goal: params.goal.clone(),
            groups: params
                .groups
                .iter()
                .map(|group| Group {
                    goal: group.goal.clone(),
                    status: Status::NotStarted,
                    units: group
                        .units
                        .iter()
                        .map(|unit| Unit::new(unit.goal.clone(), unit.developer_note.clone()))
                        .collect(),
                    developer_note: group.developer_note.clone(),
                    needs_more_thoughts: None,
                })
                .collect(),
            needs_more_thoughts: params.needs_more_thoughts,
        };

        let group_count = plan.groups.len();
        let unit_count = plan.unit_count();
        let replaced_previous = !self.state.is_empty();
        self.state = PlanState::from(plan);

        let persistence_status = PersistenceStatus::from_saved(self.save_state());
        info!(
            "Plan defined with {group_count} groups and {unit_count} units ({})",
            persistence_status.as_str()
        );

        let mut message = String::new();
        if replaced_previous {
            message.push_str("Previous plan has been replaced. ");
        }
        message.push_str(&format!(
            "Implementation plan created with {group_count} groups and {unit_count} units."
        ));

        Ok(PlanCreated {
            group_count,
            unit_count,
            replaced_previous,
            message,
            persistence_status,
            last_updated: self.last_updated,
        })
    }

    /// Reports completion counters, per-group summaries, and unit details.
    ///
    /// # Errors
    ///
    /// * `WorkplanError::NotInitialized` - When the aggregate is not ready
    /// * `WorkplanError::NoActivePlan` - When no plan is defined
    pub fn get_progress(&self) -> Result<ProgressReport> {
        let plan = self.active_plan()?;
        let persistence = PersistenceInfo {
            data_file_path: self.store.path(),
            file_exists: self.store.exists(),
            last_updated: self.last_updated,
        };
        Ok(ProgressReport::new(plan, persistence))
    }
}
