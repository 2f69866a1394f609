//! The signup form: fields, validation rules, state and the rendered component.

mod config;
mod field;
mod form;
mod rules;
mod state;

pub use config::{ConfigError, FormConfig};
pub use field::{Field, FieldErrors, FieldValues};
pub use form::{SignupForm, SuccessMessage, SUBMIT_HOVER_STYLE};
pub use rules::{EmptyConfirmation, Validator, DEFAULT_EMAIL_PATTERN};
pub use state::{FormAction, FormPhase, FormState};
