//! Theme token validation.
//!
//! A theme's `tokens` document is a JSON object with up to three groups:
//!
//! ```json
//! {
//!   "colors":     { "primary": "#1d4ed8", "background": "#ffffff" },
//!   "spacing":    { "section": "4rem" },
//!   "typography": { "heading": "Inter, sans-serif" }
//! }
//! ```
//!
//! Each group maps token names to string values.

use crate::error::CoreError;

pub const TOKEN_GROUPS: &[&str] = &["colors", "spacing", "typography"];

pub const MAX_NAME_CHARS: usize = 80;

pub fn validate_name(name: &str) -> Result<(), CoreError> {
    let len = name.trim().chars().count();
    if len == 0 || len > MAX_NAME_CHARS {
        return Err(CoreError::Validation(format!(
            "Theme name must be 1 to {MAX_NAME_CHARS} characters"
        )));
    }
    Ok(())
}

pub fn validate_tokens(tokens: &serde_json::Value) -> Result<(), CoreError> {
    let groups = tokens
        .as_object()
        .ok_or_else(|| CoreError::validation("Theme tokens must be a JSON object"))?;

    for (group, values) in groups {
        if !TOKEN_GROUPS.contains(&group.as_str()) {
            return Err(CoreError::Validation(format!(
                "Unknown token group '{group}'. Must be one of: {}",
                TOKEN_GROUPS.join(", ")
            )));
        }
        let values = values.as_object().ok_or_else(|| {
            CoreError::Validation(format!("Token group '{group}' must be a JSON object"))
        })?;
        if let Some((name, _)) = values.iter().find(|(_, v)| !v.is_string()) {
            return Err(CoreError::Validation(format!(
                "Token '{group}.{name}' must be a string"
            )));
        }
    }
    Ok(())
}
