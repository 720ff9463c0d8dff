//! Data models for the work plan hierarchy.
//!
//! The hierarchy is `Workplan` → `Group` → `Unit`. Groups and units are
//! addressed by position, never by identifier. Display implementations for
//! these models are located in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use micromanage_core::models::{Group, Status, Unit, Workplan};
//!
//! let plan = Workplan {
//!     goal: "Add login".to_string(),
//!     groups: vec![Group {
//!         goal: "Backend".to_string(),
//!         status: Status::NotStarted,
//!         units: vec![Unit::new("Add endpoint", None)],
//!         developer_note: None,
//!         needs_more_thoughts: None,
//!     }],
//!     needs_more_thoughts: None,
//! };
//! assert_eq!(plan.unit_count(), 1);
//! println!("{}", plan);
//! ```

pub mod group;
pub mod outcomes;
pub mod plan;
pub mod snapshot;
pub mod status;
pub mod summary;
pub mod unit;

#[cfg(test)]
mod tests;

pub use group::Group;
pub use outcomes::{GroupNoteUpdated, PersistenceStatus, PlanCreated, UnitUpdated, UpdateOutcome};
pub use plan::Workplan;
pub use snapshot::{PlanState, Snapshot, SCHEMA_VERSION};
pub use status::Status;
pub use summary::{
    GroupDetail, GroupSummary, PersistenceInfo, Progress, ProgressReport, Tally, UnitDetail,
};
pub use unit::Unit;
