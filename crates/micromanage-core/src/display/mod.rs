//! Display formatting for models and command results.
//!
//! Domain models and command results implement [`std::fmt::Display`]
//! directly, producing markdown. The CLI renders that markdown to the
//! terminal; the MCP server sends the serialized results instead.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Command Results │    │    Markdown     │
//! │ (Workplan, ...) │───▶│ (PlanCreated,   │───▶│     Output      │
//! │                 │    │  UnitUpdated)   │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`models`]: Display implementations for domain models
//! - [`results`]: Display implementations for command results and the
//!   progress report
//! - [`status`]: One-line success/failure messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//!
//! ## Usage Examples
//!
//! ```rust
//! use micromanage_core::{display::OperationStatus, WorkplanError};
//!
//! let success = OperationStatus::success("Plan saved");
//! println!("{}", success);
//!
//! let error = OperationStatus::from(&WorkplanError::NoActivePlan);
//! assert!(error.to_string().contains("no_active_plan"));
//! ```

pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use datetime::LocalDateTime;
pub use status::OperationStatus;
