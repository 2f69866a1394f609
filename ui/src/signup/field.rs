//! The four inputs of the signup form and the per-field value/error storage.

use strum::{EnumIter, IntoEnumIterator};

/// One input of the signup form, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    Name,
    PasswordFirst,
    PasswordSecond,
    Email,
}

impl Field {
    /// Visible label text; inputs are located by this text.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::PasswordFirst => "Password (First)",
            Field::PasswordSecond => "Password (Second)",
            Field::Email => "Email",
        }
    }

    /// The `name` attribute of the rendered `<input>`.
    pub fn html_name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::PasswordFirst => "password1",
            Field::PasswordSecond => "password2",
            Field::Email => "email",
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Field::Name => "text",
            Field::PasswordFirst | Field::PasswordSecond => "password",
            Field::Email => "email",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Current text of every field. All start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub name: String,
    pub password1: String,
    pub password2: String,
    pub email: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::PasswordFirst => &self.password1,
            Field::PasswordSecond => &self.password2,
            Field::Email => &self.email,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::PasswordFirst => &mut self.password1,
            Field::PasswordSecond => &mut self.password2,
            Field::Email => &mut self.email,
        };
        *slot = value;
    }
}

/// Error flag per field. `true` renders the input in its error state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors([bool; 4]);

impl FieldErrors {
    pub fn is_set(&self, field: Field) -> bool {
        self.0[field.index()]
    }

    pub fn set(&mut self, field: Field, errored: bool) {
        self.0[field.index()] = errored;
    }

    pub fn clear(&mut self, field: Field) {
        self.set(field, false);
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|&flag| flag)
    }

    /// Fields whose flag is raised, in render order.
    pub fn flagged(&self) -> Vec<Field> {
        Field::iter().filter(|&field| self.is_set(field)).collect()
    }
}
