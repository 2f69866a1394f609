//! Field validation rules. Everything here is pure: values in, flags out.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::config::ConfigError;
use super::field::{Field, FieldErrors, FieldValues};

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static DEFAULT_EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_EMAIL_PATTERN).expect("built-in email pattern is a valid regex")
});

/// How the blur check treats an empty Password (Second).
///
/// Only blur is affected. Submit always compares the two passwords strictly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyConfirmation {
    /// Empty second password against a non-empty first one is a mismatch.
    #[default]
    Mismatch,
    /// Leave an empty second password unflagged until submit.
    Defer,
}

/// Compiled validation rules for the signup form.
#[derive(Clone, Debug)]
pub struct Validator {
    email: Regex,
    empty_confirmation: EmptyConfirmation,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL_REGEX.clone(),
            empty_confirmation: EmptyConfirmation::default(),
        }
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        self.email.as_str() == other.email.as_str()
            && self.empty_confirmation == other.empty_confirmation
    }
}

impl Validator {
    pub fn new(
        email_pattern: &str,
        empty_confirmation: EmptyConfirmation,
    ) -> Result<Self, ConfigError> {
        let email = Regex::new(email_pattern).map_err(|source| ConfigError::EmailPattern {
            pattern: email_pattern.to_string(),
            source,
        })?;
        Ok(Self {
            email,
            empty_confirmation,
        })
    }

    pub fn email_pattern(&self) -> &str {
        self.email.as_str()
    }

    pub fn name_missing(&self, name: &str) -> bool {
        name.trim().is_empty()
    }

    pub fn passwords_mismatch(&self, first: &str, second: &str) -> bool {
        first != second
    }

    pub fn email_invalid(&self, email: &str) -> bool {
        email.is_empty() || !self.email.is_match(email)
    }

    /// The password check run when Password (Second) loses focus.
    pub fn confirmation_mismatch_on_blur(&self, values: &FieldValues) -> bool {
        if values.password2.is_empty() && self.empty_confirmation == EmptyConfirmation::Defer {
            return false;
        }
        self.passwords_mismatch(&values.password1, &values.password2)
    }

    /// Full validation pass. Every field is evaluated; nothing short-circuits.
    pub fn validate(&self, values: &FieldValues) -> FieldErrors {
        let mut errors = FieldErrors::default();
        errors.set(Field::Name, self.name_missing(&values.name));
        errors.set(
            Field::PasswordSecond,
            self.passwords_mismatch(&values.password1, &values.password2),
        );
        errors.set(Field::Email, self.email_invalid(&values.email));
        errors
    }
}
