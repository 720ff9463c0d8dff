//! The work plan aggregate.
//!
//! [`WorkPlan`] owns the single active plan and is its only mutator. Every
//! command runs to completion before the next one starts:
//!
//! ```text
//! ┌─────────────┐   ┌──────────────┐   ┌────────────┐   ┌─────────────┐
//! │  validate   │──▶│    mutate    │──▶│ aggregate  │──▶│   persist   │
//! │ (bounds,    │   │ (unit, reset │   │ (group     │   │ (snapshot   │
//! │ transition) │   │  in_progress)│   │  status)   │   │  store)     │
//! └─────────────┘   └──────────────┘   └────────────┘   └─────────────┘
//! ```
//!
//! Validation failures abort before anything changes. A failed save does not
//! fail the command; its result reports
//! [`PersistenceStatus::MemoryOnly`](crate::models::PersistenceStatus) instead.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating ready [`WorkPlan`] instances
//! - [`plan_ops`]: Defining the plan and reporting progress
//! - [`unit_ops`]: Status updates and group notes
//!
//! # Usage
//!
//! ```rust,no_run
//! use micromanage_core::{
//!     WorkPlanBuilder,
//!     params::{DefinePlan, GroupPlan, UnitPlan, UpdateStatus},
//!     models::Status,
//! };
//!
//! # fn example() -> micromanage_core::Result<()> {
//! let mut workplan = WorkPlanBuilder::new()
//!     .with_data_dir(Some("/tmp/micromanage"))
//!     .build()?;
//!
//! let created = workplan.define_plan(&DefinePlan {
//!     goal: "Add login".to_string(),
//!     groups: vec![GroupPlan {
//!         goal: "Backend".to_string(),
//!         units: vec![UnitPlan {
//!             goal: "Add endpoint".to_string(),
//!             developer_note: None,
//!         }],
//!         developer_note: None,
//!     }],
//!     needs_more_thoughts: None,
//! })?;
//! println!("{created}");
//!
//! let outcome = workplan.update_status(&UpdateStatus {
//!     group_index: 0,
//!     unit_index: 0,
//!     status: Some(Status::NeedsRefinement),
//!     ..Default::default()
//! })?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use jiff::Timestamp;
use log::{info, warn};

use crate::{
    error::{Result, WorkplanError},
    models::{PlanState, Snapshot, Workplan},
    storage::SnapshotStore,
};

pub mod builder;
pub mod plan_ops;
pub mod unit_ops;


pub use builder::WorkPlanBuilder;

/// Owner of the single active plan.
#[derive(Debug)]
pub struct WorkPlan {
    store: SnapshotStore,
    state: PlanState,
    last_updated: Timestamp,
    initialized: bool,
}

impl WorkPlan {
    /// Creates an aggregate backed by `store`.
    ///
    /// The aggregate is not ready until [`WorkPlan::initialize`] has run;
    /// [`WorkPlanBuilder::build`] does both.
    pub fn new(store: SnapshotStore) -> Self {
        Self {
            store,
            state: PlanState::Empty,
            last_updated: Timestamp::now(),
            initialized: false,
        }
    }

    /// Loads the stored snapshot and marks the aggregate ready.
    ///
    /// When no snapshot file exists yet an initial one is written. Failing to
    /// write it is logged and does not prevent initialization.
    pub fn initialize(&mut self) {
        self.load_from_store();
        if !self.store.exists() && !self.save_state() {
            warn!(
                "Could not create initial snapshot at {}, continuing in memory",
                self.store.path().display()
            );
        }
        self.initialized = true;
        info!("WorkPlan initialized from {}", self.store.path().display());
    }

    /// Whether storage-backed initialization has completed.
    pub fn is_ready(&self) -> bool {
        self.initialized
    }

    /// Re-reads the snapshot, discarding in-memory state.
    pub fn reload(&mut self) -> Result<()> {
        self.ensure_ready()?;
        self.load_from_store();
        Ok(())
    }

    /// Writes the current state to storage without touching `last_updated`.
    ///
    /// # Errors
    ///
    /// Returns the storage error, unlike command saves which only downgrade
    /// their result.
    pub fn force_save(&self) -> Result<()> {
        self.ensure_ready()?;
        self.store.save(&self.snapshot())
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> PathBuf {
        self.store.path()
    }

    /// The plan, or the empty marker.
    pub fn state(&self) -> &PlanState {
        &self.state
    }

    /// When the aggregate was last modified.
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Current state in its persisted form.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.clone(), self.last_updated)
    }

    fn load_from_store(&mut self) {
        let snapshot = self.store.load(Snapshot::default());
        self.state = snapshot.plan;
        self.last_updated = snapshot.last_updated;
    }

    /// Stamps the modification time and persists. Returns whether the
    /// snapshot reached storage.
    pub(crate) fn save_state(&mut self) -> bool {
        self.last_updated = Timestamp::now();
        match self.store.save(&self.snapshot()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save snapshot, changes kept in memory only: {e}");
                false
            }
        }
    }

    pub(crate) fn ensure_ready(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(WorkplanError::NotInitialized)
        }
    }

    pub(crate) fn active_plan(&self) -> Result<&Workplan> {
        self.ensure_ready()?;
        self.state.plan().ok_or(WorkplanError::NoActivePlan)
    }

    pub(crate) fn active_plan_mut(&mut self) -> Result<&mut Workplan> {
        self.ensure_ready()?;
        self.state.plan_mut().ok_or(WorkplanError::NoActivePlan)
    }
}
