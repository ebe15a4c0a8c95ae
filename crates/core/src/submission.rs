//! Submission review workflow constants and validation.
//!
//! A submission starts `pending` and is decided exactly once by an admin.

use crate::error::CoreError;

/// Awaiting review.
pub const STATUS_PENDING: &str = "pending";

/// Accepted by a reviewer.
pub const STATUS_APPROVED: &str = "approved";

/// Sent back by a reviewer.
pub const STATUS_REJECTED: &str = "rejected";

/// Decisions a reviewer may record.
pub const VALID_DECISIONS: &[&str] = &[STATUS_APPROVED, STATUS_REJECTED];

pub const MAX_CONTENT_CHARS: usize = 20_000;
pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Validate that a decision string is one of the accepted values.
pub fn validate_decision(decision: &str) -> Result<(), CoreError> {
    if VALID_DECISIONS.contains(&decision) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid decision '{decision}'. Must be one of: {}",
            VALID_DECISIONS.join(", ")
        )))
    }
}

/// Only pending submissions can be reviewed.
pub fn ensure_reviewable(current_status: &str) -> Result<(), CoreError> {
    if current_status == STATUS_PENDING {
        Ok(())
    } else {
        Err(CoreError::Conflict(format!(
            "Submission has already been {current_status}"
        )))
    }
}

/// A submission needs either text content or a link.
pub fn validate_content(content: &str, link_url: Option<&str>) -> Result<(), CoreError> {
    if content.trim().is_empty() && link_url.is_none() {
        return Err(CoreError::validation(
            "A submission needs content or a link",
        ));
    }
    if content.chars().count() > MAX_CONTENT_CHARS {
        return Err(CoreError::Validation(format!(
            "Content must be at most {MAX_CONTENT_CHARS} characters"
        )));
    }
    if let Some(url) = link_url {
        crate::portfolio::validate_url("link_url", url)?;
    }
    Ok(())
}

/// Validate feedback text and optional rating.
pub fn validate_feedback(message: &str, rating: Option<i16>) -> Result<(), CoreError> {
    if message.trim().is_empty() {
        return Err(CoreError::validation("Feedback message must not be empty"));
    }
    if let Some(rating) = rating {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(CoreError::Validation(format!(
                "Rating must be between {MIN_RATING} and {MAX_RATING}"
            )));
        }
    }
    Ok(())
}
