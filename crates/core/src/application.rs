//! Internship application lifecycle.
//!
//! An application moves through a small state machine:
//!
//! ```text
//! applied ──► accepted ──► active ──► completed
//!    │            │           │
//!    ├──► rejected◄┘          │
//!    └──► withdrawn ◄─────────┘ (from any open state)
//! ```
//!
//! `applied`, `accepted` and `active` are *open*; the rest are terminal.
//! A user may hold at most one open application at a time. The database
//! enforces this with the partial unique index `uq_applications_user_open`;
//! [`check_can_apply`] reproduces the same rule so handlers can say which
//! application is in the way.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Application status as stored in `applications.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Applied,
    Accepted,
    Active,
    Rejected,
    Withdrawn,
    Completed,
}

/// Every status, in lifecycle order.
pub const ALL_STATUSES: &[ApplicationStatus] = &[
    ApplicationStatus::Applied,
    ApplicationStatus::Accepted,
    ApplicationStatus::Active,
    ApplicationStatus::Rejected,
    ApplicationStatus::Withdrawn,
    ApplicationStatus::Completed,
];

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Accepted => "accepted",
            Self::Active => "active",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
            Self::Completed => "completed",
        }
    }

    /// Open applications block every further application by the same user.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Applied | Self::Accepted | Self::Active)
    }

    pub fn is_terminal(self) -> bool {
        !self.is_open()
    }

    /// Statuses reachable from `self` in one step.
    pub fn next_statuses(self) -> &'static [ApplicationStatus] {
        use ApplicationStatus::*;
        match self {
            Applied => &[Accepted, Rejected, Withdrawn],
            Accepted => &[Active, Rejected, Withdrawn],
            Active => &[Completed, Withdrawn],
            Rejected | Withdrawn | Completed => &[],
        }
    }

    pub fn can_transition_to(self, next: ApplicationStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Participants can see and submit work for the internship's tasks.
    pub fn grants_participation(self) -> bool {
        matches!(self, Self::Accepted | Self::Active)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STATUSES
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = ALL_STATUSES.iter().map(|s| s.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid application status '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

/// Validate a requested status change.
pub fn validate_transition(
    current: ApplicationStatus,
    next: ApplicationStatus,
) -> Result<(), CoreError> {
    if current.can_transition_to(next) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Cannot move application from '{current}' to '{next}'"
        )))
    }
}

/// The parts of an existing application that matter for the apply rule.
#[derive(Debug, Clone, Copy)]
pub struct ExistingApplication {
    pub internship_id: DbId,
    pub status: ApplicationStatus,
}

/// Decide whether a user may apply to `internship_id` given their current
/// applications.
///
/// Any open application refuses the request. The message names the blocker:
/// the same internship, a running internship, or a pending one elsewhere.
pub fn check_can_apply(
    existing: &[ExistingApplication],
    internship_id: DbId,
) -> Result<(), CoreError> {
    let Some(blocking) = existing
        .iter()
        .filter(|a| a.status.is_open())
        .min_by_key(|a| (a.internship_id != internship_id, a.status != ApplicationStatus::Active))
    else {
        return Ok(());
    };

    let message = if blocking.internship_id == internship_id {
        "You already have an open application for this internship"
    } else if blocking.status == ApplicationStatus::Active {
        "You already have an active internship"
    } else {
        "You already have an open application to another internship"
    };
    Err(CoreError::Conflict(message.into()))
}

/// Validate an optional cover letter.
pub fn validate_cover_letter(cover_letter: Option<&str>) -> Result<(), CoreError> {
    if let Some(text) = cover_letter {
        if text.chars().count() > MAX_COVER_LETTER_CHARS {
            return Err(CoreError::Validation(format!(
                "Cover letter must be at most {MAX_COVER_LETTER_CHARS} characters"
            )));
        }
    }
    Ok(())
}

/// Upper bound on cover letter length.
pub const MAX_COVER_LETTER_CHARS: usize = 5000;

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::ApplicationStatus::*;
    use super::*;

    fn app(internship_id: DbId, status: ApplicationStatus) -> ExistingApplication {
        ExistingApplication {
            internship_id,
            status,
        }
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in ALL_STATUSES {
            assert_eq!(status.as_str().parse::<ApplicationStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn unknown_status_is_validation_error() {
        assert_matches!("pending".parse::<ApplicationStatus>(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn open_and_terminal_partition() {
        assert!(Applied.is_open());
        assert!(Accepted.is_open());
        assert!(Active.is_open());
        assert!(Rejected.is_terminal());
        assert!(Withdrawn.is_terminal());
        assert!(Completed.is_terminal());
    }

    #[test]
    fn allowed_transitions() {
        assert!(validate_transition(Applied, Accepted).is_ok());
        assert!(validate_transition(Accepted, Active).is_ok());
        assert!(validate_transition(Active, Completed).is_ok());
        assert!(validate_transition(Active, Withdrawn).is_ok());
    }

    #[test]
    fn terminal_states_are_final() {
        for terminal in [Rejected, Withdrawn, Completed] {
            for next in ALL_STATUSES {
                assert!(!terminal.can_transition_to(*next));
            }
        }
    }

    #[test]
    fn cannot_skip_acceptance() {
        assert_matches!(
            validate_transition(Applied, Active),
            Err(CoreError::Validation(msg)) if msg.contains("'applied' to 'active'")
        );
        assert!(validate_transition(Applied, Completed).is_err());
    }

    #[test]
    fn first_application_is_allowed() {
        assert!(check_can_apply(&[], 1).is_ok());
    }

    #[test]
    fn duplicate_open_application_is_refused() {
        for status in [Applied, Accepted] {
            let result = check_can_apply(&[app(7, status)], 7);
            assert_matches!(result, Err(CoreError::Conflict(msg)) if msg.contains("open application"));
        }
    }

    #[test]
    fn closed_application_does_not_block_reapplying() {
        let existing = [app(7, Rejected), app(7, Withdrawn), app(7, Completed)];
        assert!(check_can_apply(&existing, 7).is_ok());
    }

    #[test]
    fn active_internship_blocks_other_applications() {
        let result = check_can_apply(&[app(3, Active)], 9);
        assert_matches!(result, Err(CoreError::Conflict(msg)) if msg.contains("active internship"));
    }

    #[test]
    fn pending_elsewhere_blocks() {
        for status in [Applied, Accepted] {
            let result = check_can_apply(&[app(3, status)], 9);
            assert_matches!(
                result,
                Err(CoreError::Conflict(msg)) if msg.contains("another internship")
            );
        }
    }

    #[test]
    fn same_internship_is_reported_first() {
        let existing = [app(3, Active), app(9, Applied)];
        assert_matches!(
            check_can_apply(&existing, 9),
            Err(CoreError::Conflict(msg)) if msg.contains("for this internship")
        );
    }

    #[test]
    fn terminal_history_elsewhere_does_not_block() {
        let existing = [app(3, Completed), app(4, Rejected), app(5, Withdrawn)];
        assert!(check_can_apply(&existing, 9).is_ok());
    }

    #[test]
    fn only_accepted_and_active_grant_participation() {
        assert!(Accepted.grants_participation());
        assert!(Active.grants_participation());
        assert!(!Applied.grants_participation());
        assert!(!Completed.grants_participation());
    }

    #[test]
    fn cover_letter_length_is_bounded() {
        assert!(validate_cover_letter(None).is_ok());
        assert!(validate_cover_letter(Some("Hello")).is_ok());
        let long = "x".repeat(MAX_COVER_LETTER_CHARS + 1);
        assert!(validate_cover_letter(Some(&long)).is_err());
    }
}
