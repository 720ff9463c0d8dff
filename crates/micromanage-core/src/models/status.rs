//! Workflow status shared by units and groups.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Type-safe enumeration of workflow statuses.
///
/// Units move through these states under the rules in
/// [`crate::transition`]; a group's status is always derived from its units
/// by [`crate::aggregation`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Work has not begun
    #[default]
    NotStarted,

    /// Currently being worked on; at most one unit per plan
    InProgress,

    /// Waiting for the user to review the change
    UserReview,

    /// Reviewed and accepted
    Completed,

    /// Abandoned
    Cancelled,

    /// Requirements are being clarified before implementation
    #[serde(alias = "needsRefinment", alias = "needsRefinement")]
    NeedsRefinement,
}

impl Status {
    /// Every status, in declaration order.
    pub const ALL: [Status; 6] = [
        Status::NotStarted,
        Status::InProgress,
        Status::UserReview,
        Status::Completed,
        Status::Cancelled,
        Status::NeedsRefinement,
    ];

    /// Wire representation used in snapshots and command payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::UserReview => "user_review",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
            Status::NeedsRefinement => "needs_refinement",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use micromanage_core::models::Status;
    ///
    /// assert_eq!(Status::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(Status::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(Status::NotStarted.with_icon(), "○ Not Started");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Status::NotStarted => "○ Not Started",
            Status::InProgress => "➤ In Progress",
            Status::UserReview => "◎ User Review",
            Status::Completed => "✓ Completed",
            Status::Cancelled => "✗ Cancelled",
            Status::NeedsRefinement => "? Needs Refinement",
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "not_started" | "notstarted" => Ok(Status::NotStarted),
            "in_progress" | "inprogress" => Ok(Status::InProgress),
            "user_review" | "userreview" => Ok(Status::UserReview),
            "completed" => Ok(Status::Completed),
            "cancelled" => Ok(Status::Cancelled),
            "needs_refinement" | "needsrefinement" | "needsrefinment" => {
                Ok(Status::NeedsRefinement)
            }
            _ => Err(format!("Invalid status: {s}")),
        }
    }
}
