//! Field validators.
//!
//! Validators only see non-empty values: required-ness is a property of
//! the field and is checked before any validator runs.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;
}

impl<F> Validator for F
where
    F: Fn(&str) -> Result<(), String> + Send + Sync,
{
    fn validate(&self, value: &str) -> Result<(), String> {
        self(value)
    }
}

/// Rejects values longer than a number of characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Uses the default message.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Uses a custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Rejects values shorter than a number of characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Uses the default message.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Uses a custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }
}

/// Accepts email addresses.
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl Validator for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if EMAIL.is_match(value) {
            Ok(())
        } else {
            Err("Enter a valid email address.".to_string())
        }
    }
}

/// Accepts `http://` and `https://` URLs.
#[derive(Debug, Clone, Default)]
pub struct UrlValidator;

impl Validator for UrlValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));
        match rest {
            Some(host) if !host.is_empty() => Ok(()),
            _ => Err("Enter a valid URL.".to_string()),
        }
    }
}

/// Accepts values matching a pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Compiles `pattern`; values that do not match get `message`.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// Accepts numbers within optional bounds.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
}

impl RangeValidator {
    /// Inclusive bounds; `None` leaves a side open.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let num: f64 = value
            .trim()
            .parse()
            .map_err(|_| "Enter a number.".to_string())?;

        match (self.min, self.max) {
            (Some(min), _) if num < min => {
                Err(format!("Ensure this value is greater than or equal to {min}."))
            }
            (_, Some(max)) if num > max => {
                Err(format!("Ensure this value is less than or equal to {max}."))
            }
            _ => Ok(()),
        }
    }
}

/// Accepts only the values of a fixed choice list.
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
    allowed: Vec<String>,
}

impl ChoiceValidator {
    /// Creates a validator accepting exactly `allowed`.
    pub fn new(allowed: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }
}

impl Validator for ChoiceValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if self.allowed.iter().any(|v| v == value) {
            Ok(())
        } else {
            Err(format!(
                "Select a valid choice. {value} is not one of the available choices."
            ))
        }
    }
}
