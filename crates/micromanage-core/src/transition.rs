//! Status transition rules for units.
//!
//! A unit's status may only change along the review-gated workflow:
//!
//! ```text
//! not_started ──▶ needs_refinement ──▶ in_progress ──▶ user_review ──▶ completed
//!      │                                                    │
//!      └──▶ cancelled                  (rework) ◀───────────┘
//! ```
//!
//! The rules are checked in a fixed order and the first one that rejects the
//! change wins. Anything not rejected is allowed, and re-applying the current
//! status is always allowed.

use std::fmt;

use serde::Serialize;

use crate::models::Status;

/// Which rule rejected a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionRule {
    /// `completed` is only reachable from `user_review`
    CompletionRequiresReview,
    /// `in_progress` is only reachable from `needs_refinement`
    StartRequiresRefinement,
    /// `not_started` may only move to `needs_refinement` or `cancelled`
    NewWorkRequiresRefinement,
}

/// A rejected transition with the rule that rejected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionRejection {
    pub from: Status,
    pub to: Status,
    pub rule: TransitionRule,
}

impl TransitionRejection {
    /// The sequence of statuses the caller should go through instead.
    pub fn correct_path(&self) -> Vec<Status> {
        match self.rule {
            TransitionRule::CompletionRequiresReview => {
                vec![self.from, Status::UserReview, Status::Completed]
            }
            TransitionRule::StartRequiresRefinement => {
                vec![self.from, Status::NeedsRefinement, Status::InProgress]
            }
            TransitionRule::NewWorkRequiresRefinement => {
                vec![Status::NotStarted, Status::NeedsRefinement, Status::InProgress]
            }
        }
    }
}

impl fmt::Display for TransitionRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            TransitionRule::CompletionRequiresReview => {
                writeln!(
                    f,
                    "Tasks can only be marked as \"completed\" after going through user review."
                )?;
                writeln!(f, "In the user review phase:")?;
                writeln!(f, "- The implementation is reviewed by the user")?;
                writeln!(f, "- Feedback is gathered on the implementation")?;
                writeln!(f, "- User approves the changes before completion")?;
            }
            TransitionRule::StartRequiresRefinement | TransitionRule::NewWorkRequiresRefinement => {
                if self.rule == TransitionRule::StartRequiresRefinement {
                    writeln!(
                        f,
                        "Tasks can only enter \"in_progress\" after going through the refinement phase."
                    )?;
                } else {
                    writeln!(
                        f,
                        "Tasks must go through the refinement phase before implementation."
                    )?;
                }
                writeln!(f, "In the refinement phase, you should:")?;
                writeln!(
                    f,
                    "- Clarify and confirm your understanding of the task requirements"
                )?;
                writeln!(
                    f,
                    "- Review existing code to identify impacts and reference points"
                )?;
                writeln!(f, "- Create a detailed implementation plan for the unit")?;
                writeln!(f, "- Check if changes to other units are needed")?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Direct transition from \"{}\" to \"{}\" is not allowed.",
            self.from, self.to
        )?;
        let path = self
            .correct_path()
            .iter()
            .map(|status| format!("\"{status}\""))
            .collect::<Vec<_>>()
            .join(" → ");
        write!(f, "Correct path: {path}")
    }
}

/// Decides whether a unit may move from `current` to `next`.
///
/// Pure and deterministic; every one of the 36 status pairs has exactly one
/// answer.
///
/// # Examples
///
/// ```rust
/// use micromanage_core::{models::Status, transition::validate_transition};
///
/// assert!(validate_transition(Status::NotStarted, Status::NeedsRefinement).is_ok());
/// assert!(validate_transition(Status::NotStarted, Status::InProgress).is_err());
/// assert!(validate_transition(Status::UserReview, Status::Completed).is_ok());
/// ```
pub fn validate_transition(
    current: Status,
    next: Status,
) -> Result<(), TransitionRejection> {
    let reject = |rule| {
        Err(TransitionRejection {
            from: current,
            to: next,
            rule,
        })
    };

    if current == next {
        return Ok(());
    }
    if next == Status::Completed && current != Status::UserReview {
        return reject(TransitionRule::CompletionRequiresReview);
    }
    if next == Status::InProgress && current != Status::NeedsRefinement {
        return reject(TransitionRule::StartRequiresRefinement);
    }
    if current == Status::NotStarted
        && !matches!(next, Status::NeedsRefinement | Status::Cancelled)
    {
        return reject(TransitionRule::NewWorkRequiresRefinement);
    }
    Ok(())
}

/// Statuses reachable from `from` in one step, excluding `from` itself.
pub fn allowed_transitions(from: Status) -> Vec<Status> {
    Status::ALL
        .into_iter()
        .filter(|&to| to != from && validate_transition(from, to).is_ok())
        .collect()
}

impl Status {
    /// Whether a unit in this status may move to `next`.
    pub fn can_transition_to(self, next: Status) -> bool {
        validate_transition(self, next).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Status::*;

    /// Expected verdict for each (current, next) pair, row by row.
    fn expected(current: Status, next: Status) -> Option<TransitionRule> {
        use TransitionRule::*;
        match (current, next) {
            (a, b) if a == b => None,
            (UserReview, Completed) => None,
            (_, Completed) => Some(CompletionRequiresReview),
            (NeedsRefinement, InProgress) => None,
            (_, InProgress) => Some(StartRequiresRefinement),
            (NotStarted, NeedsRefinement | Cancelled) => None,
            (NotStarted, _) => Some(NewWorkRequiresRefinement),
            _ => None,
        }
    }

    #[test]
    fn test_all_36_pairs_match_rule_table() {
        let mut checked = 0;
        for current in Status::ALL {
            for next in Status::ALL {
                let verdict = validate_transition(current, next).err().map(|r| r.rule);
                assert_eq!(
                    verdict,
                    expected(current, next),
                    "{current} -> {next}"
                );
                checked += 1;
            }
        }
        assert_eq!(checked, 36);
    }

    #[test]
    fn test_same_status_is_always_allowed() {
        for status in Status::ALL {
            assert!(validate_transition(status, status).is_ok());
        }
    }

    #[test]
    fn test_completion_rule_takes_precedence_over_not_started_rule() {
        let rejection = validate_transition(NotStarted, Completed).unwrap_err();
        assert_eq!(rejection.rule, TransitionRule::CompletionRequiresReview);
    }

    #[test]
    fn test_start_rule_takes_precedence_over_not_started_rule() {
        let rejection = validate_transition(NotStarted, InProgress).unwrap_err();
        assert_eq!(rejection.rule, TransitionRule::StartRequiresRefinement);
        assert_eq!(
            rejection.correct_path(),
            vec![NotStarted, NeedsRefinement, InProgress]
        );
    }

    #[test]
    fn test_rejection_message_names_statuses_and_path() {
        let rejection = validate_transition(InProgress, Completed).unwrap_err();
        let message = rejection.to_string();
        assert!(message.contains("after going through user review"));
        assert!(message.contains("from \"in_progress\" to \"completed\""));
        assert!(message.contains("\"in_progress\" → \"user_review\" → \"completed\""));
    }

    #[test]
    fn test_allowed_transitions_from_not_started() {
        assert_eq!(
            allowed_transitions(NotStarted),
            vec![Cancelled, NeedsRefinement]
        );
    }

    #[test]
    fn test_allowed_transitions_from_user_review() {
        assert_eq!(
            allowed_transitions(UserReview),
            vec![NotStarted, Completed, Cancelled, NeedsRefinement]
        );
    }

    #[test]
    fn test_reopening_completed_work_is_allowed() {
        assert!(Completed.can_transition_to(NeedsRefinement));
        assert!(Cancelled.can_transition_to(NotStarted));
        assert!(!Cancelled.can_transition_to(InProgress));
    }
}
