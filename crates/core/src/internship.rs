//! Internship listing constants and field validation.

use crate::error::CoreError;

/// Internship is accepting applications.
pub const STATUS_OPEN: &str = "open";

/// Internship no longer accepts applications.
pub const STATUS_CLOSED: &str = "closed";

/// All valid internship statuses.
pub const VALID_STATUSES: &[&str] = &[STATUS_OPEN, STATUS_CLOSED];

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DURATION_WEEKS: i32 = 104;
pub const MAX_SKILLS: usize = 30;
pub const MAX_SKILL_CHARS: usize = 50;

/// Validate that a status string is one of the accepted values.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid internship status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("Title must not be empty"));
    }
    if trimmed.chars().count() > MAX_TITLE_CHARS {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn validate_duration_weeks(weeks: i32) -> Result<(), CoreError> {
    if !(1..=MAX_DURATION_WEEKS).contains(&weeks) {
        return Err(CoreError::Validation(format!(
            "duration_weeks must be between 1 and {MAX_DURATION_WEEKS}"
        )));
    }
    Ok(())
}

pub fn validate_stipend(stipend: i64) -> Result<(), CoreError> {
    if stipend < 0 {
        return Err(CoreError::validation("stipend must not be negative"));
    }
    Ok(())
}

pub fn validate_skills(skills: &[String]) -> Result<(), CoreError> {
    if skills.len() > MAX_SKILLS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_SKILLS} skills may be listed"
        )));
    }
    for skill in skills {
        let len = skill.trim().chars().count();
        if len == 0 || len > MAX_SKILL_CHARS {
            return Err(CoreError::Validation(format!(
                "Each skill must be 1 to {MAX_SKILL_CHARS} characters"
            )));
        }
    }
    Ok(())
}

/// Fields of an internship create or update payload that carry rules.
///
/// `None` means "not provided" and is skipped, so the same check serves
/// both full creates and partial updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct InternshipFields<'a> {
    pub title: Option<&'a str>,
    pub duration_weeks: Option<i32>,
    pub stipend: Option<i64>,
    pub skills: Option<&'a [String]>,
    pub status: Option<&'a str>,
}

pub fn validate_fields(fields: &InternshipFields<'_>) -> Result<(), CoreError> {
    if let Some(title) = fields.title {
        validate_title(title)?;
    }
    if let Some(weeks) = fields.duration_weeks {
        validate_duration_weeks(weeks)?;
    }
    if let Some(stipend) = fields.stipend {
        validate_stipend(stipend)?;
    }
    if let Some(skills) = fields.skills {
        validate_skills(skills)?;
    }
    if let Some(status) = fields.status {
        validate_status(status)?;
    }
    Ok(())
}
