//! Derivation of a group's status from its units.

use crate::models::{Group, Status};

/// Derives a group's status from the statuses of its units.
///
/// Rules are evaluated top-down and the first match wins:
///
/// 1. every unit `completed` → `completed`
/// 2. some unit `user_review` and none `in_progress` → `user_review`
/// 3. some unit `in_progress` → `in_progress`
/// 4. some unit `needs_refinement` and none `in_progress` → `needs_refinement`
///
/// When no rule matches (for example a mix of `cancelled` and `not_started`)
/// the group keeps `previous`.
///
/// Groups always hold at least one unit; an empty slice also keeps
/// `previous`.
///
/// # Examples
///
/// ```rust
/// use micromanage_core::{aggregation::derive_group_status, models::Status};
///
/// let units = [Status::Completed, Status::UserReview];
/// assert_eq!(
///     derive_group_status(&units, Status::NotStarted),
///     Status::UserReview
/// );
/// ```
pub fn derive_group_status(units: &[Status], previous: Status) -> Status {
    debug_assert!(!units.is_empty(), "groups always contain at least one unit");
    if units.is_empty() {
        return previous;
    }

    let any = |status: Status| units.contains(&status);
    let in_progress = any(Status::InProgress);

    if units.iter().all(|&status| status == Status::Completed) {
        Status::Completed
    } else if any(Status::UserReview) && !in_progress {
        Status::UserReview
    } else if in_progress {
        Status::InProgress
    } else if any(Status::NeedsRefinement) {
        Status::NeedsRefinement
    } else {
        previous
    }
}

/// Recomputes `group.status` from its units in place.
///
/// Returns `true` when the status changed.
pub fn refresh_group_status(group: &mut Group) -> bool {
    let derived = derive_group_status(&group.unit_statuses(), group.status);
    let changed = derived != group.status;
    group.status = derived;
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Unit;
    use Status::*;

    #[test]
    fn test_all_completed() {
        assert_eq!(derive_group_status(&[Completed, Completed], NotStarted), Completed);
        assert_eq!(derive_group_status(&[Completed], InProgress), Completed);
    }

    #[test]
    fn test_review_without_work_in_progress() {
        assert_eq!(derive_group_status(&[Completed, UserReview], NotStarted), UserReview);
        assert_eq!(
            derive_group_status(&[UserReview, NeedsRefinement], NotStarted),
            UserReview
        );
    }

    #[test]
    fn test_in_progress_beats_review() {
        assert_eq!(derive_group_status(&[UserReview, InProgress], UserReview), InProgress);
        assert_eq!(
            derive_group_status(&[NeedsRefinement, InProgress, NotStarted], NotStarted),
            InProgress
        );
    }

    #[test]
    fn test_needs_refinement() {
        assert_eq!(
            derive_group_status(&[NotStarted, NeedsRefinement], NotStarted),
            NeedsRefinement
        );
        assert_eq!(
            derive_group_status(&[Cancelled, NeedsRefinement], NotStarted),
            NeedsRefinement
        );
    }

    // No rule matches these mixes, so the previous group status is kept.
    #[test]
    fn test_unmatched_mix_keeps_previous_status() {
        assert_eq!(derive_group_status(&[Cancelled, NotStarted], NotStarted), NotStarted);
        assert_eq!(derive_group_status(&[Completed, Cancelled], InProgress), InProgress);
        assert_eq!(derive_group_status(&[Cancelled, Cancelled], UserReview), UserReview);
        assert_eq!(derive_group_status(&[NotStarted, NotStarted], InProgress), InProgress);
    }

    #[test]
    fn test_refresh_group_status_reports_change() {
        let mut group = Group {
            goal: "Backend".to_string(),
            status: NotStarted,
            units: vec![Unit::new("Add endpoint", None), Unit::new("Add tests", None)],
            developer_note: None,
            needs_more_thoughts: None,
        };
        assert!(!refresh_group_status(&mut group));

        group.units[0].status = NeedsRefinement;
        assert!(refresh_group_status(&mut group));
        assert_eq!(group.status, NeedsRefinement);
    }
}
