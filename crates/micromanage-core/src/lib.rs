//! Core library for the Micromanage work plan tracker.
//!
//! Micromanage tracks one active plan: a goal broken into ordered groups,
//! each broken into ordered units. Units move through a review-gated
//! workflow, at most one unit is `in_progress` at a time, and group statuses
//! are derived from their units. The whole plan is kept in a single JSON
//! snapshot file.
//!
//! # Layers
//!
//! - [`transition`]: Which unit status changes are legal
//! - [`aggregation`]: How a group's status follows from its units
//! - [`storage`]: Atomic snapshot reads and writes
//! - [`workplan`]: The [`WorkPlan`] aggregate that ties them together
//! - [`display`]: Markdown formatting of models and command results
//!
//! # Quick Start
//!
//! ```rust
//! use micromanage_core::{
//!     WorkPlanBuilder,
//!     models::Status,
//!     params::{DefinePlan, GroupPlan, UnitPlan},
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let mut workplan = WorkPlanBuilder::new()
//!     .with_data_dir(Some(dir.path()))
//!     .build()?;
//!
//! workplan.define_plan(&DefinePlan {
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
//!
//! let report = workplan.get_progress()?;
//! assert_eq!(report.groups[0].status, Status::NotStarted);
//! println!("{report}");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod aggregation;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod storage;
pub mod transition;
pub mod workplan;

// Re-export commonly used types
pub use display::{LocalDateTime, OperationStatus};
pub use error::{ErrorKind, ErrorPayload, IndexTarget, Result, WorkplanError};
pub use models::{
    Group, GroupNoteUpdated, PersistenceStatus, PlanCreated, PlanState, ProgressReport, Snapshot,
    Status, Unit, UnitUpdated, UpdateOutcome, Workplan,
};
pub use params::{DefinePlan, GroupPlan, UnitPlan, UnitUpdate, UpdateStatus};
pub use storage::SnapshotStore;
pub use transition::{validate_transition, TransitionRejection, TransitionRule};
pub use workplan::{WorkPlan, WorkPlanBuilder};
