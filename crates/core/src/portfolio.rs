//! Portfolio builder rules: slugs, templates, section fields, links.

use std::sync::LazyLock;

use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;

/// Multi-section layout with sidebar; the default template.
pub const TEMPLATE_CLASSIC: &str = "classic";

/// Single-column variant of the portfolio builder.
pub const TEMPLATE_MINIMAL: &str = "minimal";

pub const VALID_TEMPLATES: &[&str] = &[TEMPLATE_CLASSIC, TEMPLATE_MINIMAL];

pub const BUTTON_PRIMARY: &str = "primary";
pub const BUTTON_SECONDARY: &str = "secondary";
pub const BUTTON_LINK: &str = "link";

pub const VALID_BUTTON_VARIANTS: &[&str] = &[BUTTON_PRIMARY, BUTTON_SECONDARY, BUTTON_LINK];

pub const MIN_SLUG_CHARS: usize = 3;
pub const MAX_SLUG_CHARS: usize = 40;
pub const MAX_CARDS: i64 = 50;
pub const MAX_BUTTONS: i64 = 10;
pub const MAX_LABEL_CHARS: usize = 60;

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9](?:[a-z0-9-]*[a-z0-9])?$").expect("valid slug regex"));

/// Validate a public portfolio slug.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let len = slug.len();
    if !(MIN_SLUG_CHARS..=MAX_SLUG_CHARS).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Slug must be {MIN_SLUG_CHARS} to {MAX_SLUG_CHARS} characters"
        )));
    }
    if !SLUG_RE.is_match(slug) {
        return Err(CoreError::validation(
            "Slug may contain only lowercase letters, digits and inner hyphens",
        ));
    }
    Ok(())
}

pub fn validate_template(template: &str) -> Result<(), CoreError> {
    if VALID_TEMPLATES.contains(&template) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid template '{template}'. Must be one of: {}",
            VALID_TEMPLATES.join(", ")
        )))
    }
}

pub fn validate_button_variant(variant: &str) -> Result<(), CoreError> {
    if VALID_BUTTON_VARIANTS.contains(&variant) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid button variant '{variant}'. Must be one of: {}",
            VALID_BUTTON_VARIANTS.join(", ")
        )))
    }
}

/// Validate that `url` is an absolute http(s) URL. `field` names the input
/// in the error message.
pub fn validate_url(field: &str, url: &str) -> Result<(), CoreError> {
    let has_web_scheme = url.starts_with("http://") || url.starts_with("https://");
    if !has_web_scheme || !url.to_string().validate_url() {
        return Err(CoreError::Validation(format!(
            "{field} must be an absolute http(s) URL"
        )));
    }
    Ok(())
}

pub fn validate_optional_url(field: &str, url: Option<&str>) -> Result<(), CoreError> {
    match url {
        Some(url) if !url.is_empty() => validate_url(field, url),
        _ => Ok(()),
    }
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.to_string().validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("'{email}' is not a valid email address")))
    }
}

/// Validate a short required label (card title, button label).
pub fn validate_label(field: &str, label: &str) -> Result<(), CoreError> {
    let len = label.trim().chars().count();
    if len == 0 || len > MAX_LABEL_CHARS {
        return Err(CoreError::Validation(format!(
            "{field} must be 1 to {MAX_LABEL_CHARS} characters"
        )));
    }
    Ok(())
}

/// Validate the `socials` object of a contact section: a flat map of
/// network name to profile URL.
pub fn validate_socials(socials: &serde_json::Value) -> Result<(), CoreError> {
    let map = socials
        .as_object()
        .ok_or_else(|| CoreError::validation("socials must be a JSON object"))?;
    for (name, value) in map {
        let url = value
            .as_str()
            .ok_or_else(|| CoreError::Validation(format!("socials.{name} must be a string")))?;
        validate_url(&format!("socials.{name}"), url)?;
    }
    Ok(())
}

/// Refuse adding a section item once the portfolio holds `max` of them.
pub fn ensure_below_limit(kind: &str, current: i64, max: i64) -> Result<(), CoreError> {
    if current >= max {
        return Err(CoreError::Validation(format!(
            "A portfolio may hold at most {max} {kind}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn slugs() {
        assert!(validate_slug("jane-doe").is_ok());
        assert!(validate_slug("dev42").is_ok());
        assert!(validate_slug("ab").is_err());
        assert!(validate_slug("-jane").is_err());
        assert!(validate_slug("jane-").is_err());
        assert!(validate_slug("Jane").is_err());
        assert!(validate_slug("jane_doe").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_CHARS + 1)).is_err());
    }

    #[test]
    fn templates_and_variants() {
        assert!(validate_template(TEMPLATE_CLASSIC).is_ok());
        assert!(validate_template(TEMPLATE_MINIMAL).is_ok());
        assert!(validate_template("brutalist").is_err());
        assert!(validate_button_variant(BUTTON_LINK).is_ok());
        assert!(validate_button_variant("ghost").is_err());
    }

    #[test]
    fn urls_must_be_web_urls() {
        assert!(validate_url("link_url", "https://example.com/a?b=c").is_ok());
        assert!(validate_url("link_url", "http://localhost:3000").is_ok());
        assert!(validate_url("link_url", "javascript:alert(1)").is_err());
        assert!(validate_url("link_url", "example.com").is_err());
        assert!(validate_optional_url("avatar_url", None).is_ok());
        assert!(validate_optional_url("avatar_url", Some("")).is_ok());
    }

    #[test]
    fn emails() {
        assert!(validate_email("jane@example.com").is_ok());
        assert!(validate_email("not-an-email").is_err());
    }

    #[test]
    fn socials_must_map_names_to_urls() {
        assert!(validate_socials(&json!({"github": "https://github.com/jane"})).is_ok());
        assert!(validate_socials(&json!({})).is_ok());
        assert!(validate_socials(&json!(["https://github.com/jane"])).is_err());
        assert!(validate_socials(&json!({"github": 3})).is_err());
        assert!(validate_socials(&json!({"github": "jane"})).is_err());
    }

    #[test]
    fn section_limits() {
        assert!(ensure_below_limit("cards", 0, MAX_CARDS).is_ok());
        assert!(ensure_below_limit("cards", MAX_CARDS, MAX_CARDS).is_err());
    }
}
