//! Field validation errors

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// A single failed field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Inline error messages keyed by field name
///
/// Only the first message per field is kept, matching how the form shows one
/// line under each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Drop the message for `field`, e.g. once the input has been fixed
    pub fn remove(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldError> + '_ {
        self.errors.iter().map(|(field, message)| FieldError {
            field: *field,
            message: message.clone(),
        })
    }

    /// `Ok(value)` when nothing failed
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Loose address check: something@domain.tld
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email.trim()))
}

/// Record `message` when `value` is blank
pub(crate) fn require(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    message: &str,
) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Please enter a valid email address");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_remove_field() {
        let mut errors = ValidationErrors::new();
        errors.add("photo", "Please upload a pet photo");
        errors.add("name", "Pet name must be at least 2 characters");

        errors.remove("photo");
        assert!(!errors.has("photo"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(5), Ok(5));

        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        let err = errors.into_result(5).unwrap_err();
        assert!(err.has("name"));
        assert_eq!(err.to_string(), "name: Name is required");
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("anna@example.nl"));
        assert!(is_valid_email("  first.last+pets@mail.co.uk "));
        assert!(!is_valid_email("anna@example"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email(""));
    }
}
