//! The signup form's state container and its event operations.
//!
//! Handlers never fail. A rejected submit is expressed only through the
//! per-field error flags.

use dioxus_logger::tracing::{debug, info};

use super::field::{Field, FieldErrors, FieldValues};
use super::rules::Validator;

/// Lifecycle of one form instance. `Submitted` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// A user interaction, as delivered by the rendered form's event handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    /// New text typed into a field.
    Input(Field, String),
    /// A field lost focus.
    Blur(Field),
    Submit,
    PointerOver,
    PointerOut,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: FieldValues,
    errors: FieldErrors,
    phase: FormPhase,
    submit_hovered: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> FieldErrors {
        self.errors
    }

    pub fn has_error(&self, field: Field) -> bool {
        self.errors.is_set(field)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn submit_hovered(&self) -> bool {
        self.submit_hovered
    }

    /// Stores the new value and drops that field's error flag.
    pub fn on_field_change(&mut self, field: Field, value: impl Into<String>) {
        if self.is_submitted() {
            return;
        }
        self.values.set(field, value.into());
        self.errors.clear(field);
    }

    /// Routes one interaction to its handler and reports the resulting phase.
    pub fn apply(&mut self, action: FormAction, validator: &Validator) -> FormPhase {
        match action {
            FormAction::Input(field, value) => self.on_field_change(field, value),
            FormAction::Blur(field) => self.on_blur(field, validator),
            FormAction::Submit => {
                self.on_submit(validator);
            }
            FormAction::PointerOver => self.set_submit_hovered(true),
            FormAction::PointerOut => self.set_submit_hovered(false),
        }
        self.phase
    }

    /// Only Password (Second) validates on blur; other fields ignore it.
    pub fn on_blur(&mut self, field: Field, validator: &Validator) {
        if field == Field::PasswordSecond {
            self.on_password2_blur(validator);
        }
    }

    /// Runs the password match check for Password (Second).
    pub fn on_password2_blur(&mut self, validator: &Validator) {
        if self.is_submitted() {
            return;
        }
        let mismatch = validator.confirmation_mismatch_on_blur(&self.values);
        debug!(mismatch, "password confirmation checked on blur");
        self.errors.set(Field::PasswordSecond, mismatch);
    }

    /// Runs the full validation pass and moves to `Submitted` when it is clean.
    pub fn on_submit(&mut self, validator: &Validator) -> FormPhase {
        if self.is_submitted() {
            return self.phase;
        }

        self.errors = validator.validate(&self.values);
        if self.errors.any() {
            debug!(fields = ?self.errors.flagged(), "signup form rejected");
        } else {
            self.phase = FormPhase::Submitted;
            info!("signup form submitted");
        }
        self.phase
    }

    pub fn set_submit_hovered(&mut self, hovered: bool) {
        self.submit_hovered = hovered;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn fill(state: &mut FormState, name: &str, password1: &str, password2: &str, email: &str) {
        state.on_field_change(Field::Name, name);
        state.on_field_change(Field::PasswordFirst, password1);
        state.on_field_change(Field::PasswordSecond, password2);
        state.on_field_change(Field::Email, email);
    }

    #[test]
    fn starts_empty_and_editing() {
        let state = FormState::new();
        assert_eq!(state.phase(), FormPhase::Editing);
        assert_eq!(state.values(), &FieldValues::default());
        assert!(!state.errors().any());
        assert!(!state.submit_hovered());
    }

    #[test]
    fn name_field_is_required() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_field_change(Field::Name, "");

        assert_eq!(state.on_submit(&validator), FormPhase::Editing);
        assert!(state.has_error(Field::Name));
    }

    #[test]
    fn password_fields_must_match_on_blur() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_field_change(Field::PasswordFirst, "123456");
        state.on_field_change(Field::PasswordSecond, "654321");
        state.on_password2_blur(&validator);

        assert!(state.has_error(Field::PasswordSecond));
        assert!(!state.has_error(Field::PasswordFirst));
        assert_eq!(state.phase(), FormPhase::Editing);
    }

    #[test]
    fn matching_passwords_clear_the_blur_flag() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_field_change(Field::PasswordFirst, "123456");
        state.on_field_change(Field::PasswordSecond, "12345");
        state.on_password2_blur(&validator);
        assert!(state.has_error(Field::PasswordSecond));

        // Editing the first field leaves the second field's flag alone.
        state.on_field_change(Field::PasswordFirst, "12345");
        assert!(state.has_error(Field::PasswordSecond));

        state.on_password2_blur(&validator);
        assert!(!state.has_error(Field::PasswordSecond));
    }

    #[test]
    fn email_field_must_be_a_valid_address() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_field_change(Field::Email, "invalid");
        state.on_submit(&validator);

        assert!(state.has_error(Field::Email));
    }

    #[test]
    fn valid_submission_moves_to_submitted() {
        let validator = Validator::default();
        let mut state = FormState::new();
        fill(&mut state, "John Doe", "123456", "123456", "john.doe@example.com");

        assert_eq!(state.on_submit(&validator), FormPhase::Submitted);
        assert!(state.is_submitted());
        assert!(!state.errors().any());
    }

    #[test]
    fn any_change_resets_that_fields_error() {
        let validator = Validator::default();
        let mut state = FormState::new();
        fill(&mut state, "John Doe", "123456", "321", "john.doe@example.com");
        state.on_submit(&validator);
        assert_eq!(state.errors().flagged(), vec![Field::PasswordSecond]);

        state.on_field_change(Field::PasswordSecond, "121");

        assert!(!state.errors().any());
        assert_eq!(state.phase(), FormPhase::Editing);
    }

    #[test]
    fn change_only_clears_the_edited_field() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_submit(&validator);
        assert_eq!(
            state.errors().flagged(),
            vec![Field::Name, Field::Email]
        );

        state.on_field_change(Field::Email, "still-bad");
        assert_eq!(state.errors().flagged(), vec![Field::Name]);
    }

    #[test]
    fn resubmit_recomputes_every_flag() {
        let validator = Validator::default();
        let mut state = FormState::new();
        fill(&mut state, "", "a", "b", "bad");
        state.on_submit(&validator);
        assert_eq!(state.errors().flagged().len(), 3);

        // Fix the name only; the old flags on the other fields are recomputed.
        state.on_field_change(Field::Name, "Jane");
        state.on_field_change(Field::PasswordSecond, "a");
        state.on_submit(&validator);
        assert_eq!(state.errors().flagged(), vec![Field::Email]);
    }

    #[test]
    fn submitted_form_ignores_further_events() {
        let validator = Validator::default();
        let mut state = FormState::new();
        fill(&mut state, "John Doe", "123456", "123456", "john.doe@example.com");
        state.on_submit(&validator);
        let snapshot = state.clone();

        for field in Field::iter() {
            state.on_field_change(field, "");
        }
        state.on_password2_blur(&validator);
        assert_eq!(state.on_submit(&validator), FormPhase::Submitted);
        assert_eq!(state, snapshot);
    }

    #[test]
    fn blur_on_other_fields_raises_nothing() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_field_change(Field::PasswordFirst, "123456");
        state.on_field_change(Field::PasswordSecond, "654321");

        for field in [Field::Name, Field::PasswordFirst, Field::Email] {
            state.on_blur(field, &validator);
        }
        assert!(!state.errors().any());

        state.on_blur(Field::PasswordSecond, &validator);
        assert_eq!(state.errors().flagged(), vec![Field::PasswordSecond]);
    }

    #[test]
    fn actions_replay_a_user_session() {
        let validator = Validator::default();
        let mut state = FormState::new();
        let session = [
            FormAction::Input(Field::Name, "John Doe".to_string()),
            FormAction::Input(Field::PasswordFirst, "123456".to_string()),
            FormAction::Blur(Field::PasswordFirst),
            FormAction::Input(Field::PasswordSecond, "321".to_string()),
            FormAction::Blur(Field::PasswordSecond),
            FormAction::Input(Field::Email, "john.doe@example.com".to_string()),
            FormAction::PointerOver,
        ];
        for action in session {
            assert_eq!(state.apply(action, &validator), FormPhase::Editing);
        }
        assert_eq!(state.errors().flagged(), vec![Field::PasswordSecond]);
        assert!(state.submit_hovered());

        assert_eq!(state.apply(FormAction::Submit, &validator), FormPhase::Editing);
        state.apply(FormAction::Input(Field::PasswordSecond, "123456".to_string()), &validator);
        state.apply(FormAction::PointerOut, &validator);
        assert!(!state.submit_hovered());

        assert_eq!(state.apply(FormAction::Submit, &validator), FormPhase::Submitted);
        assert!(!state.errors().any());
    }

    #[test]
    fn hover_is_independent_of_validation() {
        let validator = Validator::default();
        let mut state = FormState::new();
        state.on_submit(&validator);
        let errors = state.errors();

        state.set_submit_hovered(true);
        assert!(state.submit_hovered());
        assert_eq!(state.errors(), errors);

        state.set_submit_hovered(false);
        assert!(!state.submit_hovered());
    }
}
