use micromanage_core::{
    params::{DefinePlan, GroupPlan, UnitPlan},
    WorkPlan, WorkPlanBuilder,
};
use tempfile::TempDir;

/// Helper function to create a work plan in a fresh data directory
pub fn create_test_workplan() -> (TempDir, WorkPlan) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let workplan = open_workplan(&temp_dir);
    (temp_dir, workplan)
}

/// Opens the work plan stored in `temp_dir`
pub fn open_workplan(temp_dir: &TempDir) -> WorkPlan {
    WorkPlanBuilder::new()
        .with_data_dir(Some(temp_dir.path()))
        .with_file_name(Some("test-workplan.json"))
        .build()
        .expect("Failed to create work plan")
}

/// Plan with one group per entry, each holding the given unit goals
pub fn plan_params(groups: &[(&str, &[&str])]) -> DefinePlan {
    DefinePlan {
        goal: "Add login".to_string(),
        groups: groups
            .iter()
            .map(|(goal, units)| GroupPlan {
                goal: goal.to_string(),
                units: units
                    .iter()
                    .map(|goal| UnitPlan {
                        goal: goal.to_string(),
                        developer_note: None,
                    })
                    .collect(),
                developer_note: None,
            })
            .collect(),
        needs_more_thoughts: None,
    }
}
