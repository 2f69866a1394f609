#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use strum::IntoEnumIterator;

use super::field::Field;
use super::rules::Validator;
use super::state::{FormAction, FormState};
use crate::components::pico::{Button, Input};

/// Inline style applied to the submit button while the pointer is over it.
pub const SUBMIT_HOVER_STYLE: &str = "background-color: #555;";

/// Signup form with name, password pair and email.
///
/// After a clean submit the whole `<form>` is dropped from the output and
/// [`SuccessMessage`] is rendered in its place.
#[component]
pub fn SignupForm(#[props(default)] validator: Validator) -> Element {
    rsx! {
        SeededSignupForm { validator, initial: FormState::new() }
    }
}

/// [`SignupForm`] mounted on an existing state.
#[component]
pub(crate) fn SeededSignupForm(validator: Validator, initial: FormState) -> Element {
    let mut state = use_signal(move || initial);
    let validator = use_hook(move || Rc::new(validator));
    let dispatch = use_callback(move |action: FormAction| {
        state.write().apply(action, &validator);
    });

    if state.read().is_submitted() {
        return rsx! { SuccessMessage {} };
    }

    let hover_style = if state.read().submit_hovered() {
        SUBMIT_HOVER_STYLE
    } else {
        ""
    };

    rsx! {
        form {
            class: "form",
            "novalidate": "true",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                dispatch.call(FormAction::Submit);
            },
            for field in Field::iter() {
                Input {
                    key: "{field.html_name()}",
                    label: field.label().to_string(),
                    name: field.html_name().to_string(),
                    input_type: field.input_type().to_string(),
                    value: state.read().values().get(field).to_string(),
                    invalid: state.read().has_error(field),
                    on_input: move |evt: FormEvent| dispatch.call(FormAction::Input(field, evt.value())),
                    on_blur: move |_: FocusEvent| dispatch.call(FormAction::Blur(field)),
                }
            }
            Button {
                submit: true,
                style: hover_style.to_string(),
                on_mouse_over: move |_: MouseEvent| dispatch.call(FormAction::PointerOver),
                on_mouse_out: move |_: MouseEvent| dispatch.call(FormAction::PointerOut),
                "Submit"
            }
        }
    }
}

#[component]
pub fn SuccessMessage() -> Element {
    rsx! {
        div {
            class: "success",
            role: "status",
            "Success!"
        }
    }
}
