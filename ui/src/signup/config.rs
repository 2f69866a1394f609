use serde::Deserialize;
use thiserror::Error;

use super::rules::{EmptyConfirmation, Validator, DEFAULT_EMAIL_PATTERN};

/// Errors raised while loading the form configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid JSON or has an unknown/mistyped key.
    #[error("invalid form config: {0}")]
    Parse(#[from] serde_json::Error),
    /// `email_pattern` does not compile as a regular expression.
    #[error("invalid email pattern `{pattern}`: {source}")]
    EmailPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Tunable validation settings.
///
/// Every key is optional; missing keys take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormConfig {
    pub email_pattern: String,
    pub empty_confirmation: EmptyConfirmation,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            email_pattern: DEFAULT_EMAIL_PATTERN.to_string(),
            empty_confirmation: EmptyConfirmation::default(),
        }
    }
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the JSON baked in through `SIGNUP_FORM_CONFIG` at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("SIGNUP_FORM_CONFIG") {
            Some(json) => Self::from_json(json),
            None => Ok(Self::default()),
        }
    }

    pub fn validator(&self) -> Result<Validator, ConfigError> {
        Validator::new(&self.email_pattern, self.empty_confirmation)
    }
}
