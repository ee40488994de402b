//! Error types for styled forms.

use std::collections::HashMap;
use thiserror::Error;

/// Key under which non-field errors are stored in [`ValidationErrors`].
pub const NON_FIELD_ERRORS: &str = "__all__";

/// Structural and configuration errors.
///
/// These abort form construction or rendering. Bad user input never
/// produces one of these; it ends up in [`ValidationErrors`] instead.
#[derive(Debug, Error)]
pub enum FormError {
    /// A named style is not registered.
    #[error("style '{name}' not found")]
    StyleNotFound { name: String },

    /// An integer grid width is outside the dialect's bound.
    #[error("{dialect} field width must be between {min} and {max}, got {width} for '{field}'")]
    InvalidGridWidth {
        dialect: &'static str,
        field: String,
        width: i64,
        min: i64,
        max: i64,
    },

    /// A grid width is neither an integer nor a string.
    #[error("wrong width type for field '{field}': {value}")]
    InvalidGridWidthType { field: String, value: String },

    /// A grid cell names a field the form does not render in its body.
    #[error("grid references unknown field '{0}'")]
    UnknownGridField(String),

    /// Malformed declarative style configuration.
    #[error("invalid style configuration: {0}")]
    InvalidConfig(String),

    /// Style configuration could not be parsed.
    #[error("failed to parse style configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collection of validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Adds an error that is not tied to any field.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD_ERRORS, message);
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of keys with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific field.
    pub fn get(&self, field: &str) -> Option<&Vec<String>> {
        self.errors.get(field)
    }

    /// Returns the non-field errors.
    pub fn non_field(&self) -> &[String] {
        self.errors
            .get(NON_FIELD_ERRORS)
            .map_or(&[], Vec::as_slice)
    }

    /// Moves every message of `other` into `self`.
    pub fn merge(&mut self, other: Self) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields: Vec<_> = self.errors.keys().collect();
        fields.sort();
        for field in fields {
            for message in &self.errors[field] {
                writeln!(f, "{field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_field_errors() {
        let mut errors = ValidationErrors::new();
        assert!(errors.non_field().is_empty());
        errors.add_non_field("Passwords do not match.");
        errors.add("email", "Enter a valid email address.");
        assert_eq!(errors.non_field(), ["Passwords do not match."]);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_merge_appends() {
        let mut a = ValidationErrors::new();
        a.add("name", "first");
        let mut b = ValidationErrors::new();
        b.add("name", "second");
        a.merge(b);
        assert_eq!(a.get("name").unwrap(), &["first", "second"]);
    }

    #[test]
    fn test_width_error_display() {
        let err = FormError::InvalidGridWidth {
            dialect: "Bootstrap",
            field: "name".into(),
            width: 13,
            min: 1,
            max: 12,
        };
        assert_eq!(
            err.to_string(),
            "Bootstrap field width must be between 1 and 12, got 13 for 'name'"
        );
    }
}
