//! Task visibility and field validation.

use crate::error::CoreError;
use crate::internship::validate_title;
use crate::types::DbId;

/// Decide whether `user_id` may see a task.
///
/// Assigned tasks are visible only to their assignee. Unassigned tasks are
/// visible to every participant of the internship (an `accepted` or
/// `active` application). Admins bypass this check at the handler level.
pub fn is_visible_to(assigned_to: Option<DbId>, user_id: DbId, is_participant: bool) -> bool {
    match assigned_to {
        Some(assignee) => assignee == user_id,
        None => is_participant,
    }
}

/// Validate task fields. `None` means "not provided".
pub fn validate_fields(title: Option<&str>) -> Result<(), CoreError> {
    if let Some(title) = title {
        validate_title(title)?;
    }
    Ok(())
}
