//! Pico.css-styled building blocks for the signup page.
//! Styling comes from the Pico stylesheet that `App` links from the CDN.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// Centered page body, `<main class="container">`.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

//=============================================================================
// Content Components
//=============================================================================

/// Pico card (`<article>`) framing the signup form.
#[component]
pub fn Card(children: Element) -> Element {
    rsx! { article { {children} } }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    /// Renders `type="submit"` so the button submits its enclosing form.
    #[props(default = false)]
    submit: bool,
    #[props(default)]
    style: String,
    #[props(optional)]
    on_mouse_over: Option<EventHandler<MouseEvent>>,
    #[props(optional)]
    on_mouse_out: Option<EventHandler<MouseEvent>>,
}

/// Button with optional submit type, inline style and hover callbacks.
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            r#type: if props.submit { "submit" } else { "button" },
            style: "{props.style}",
            onmouseover: move |evt| {
                if let Some(handler) = &props.on_mouse_over {
                    handler.call(evt);
                }
            },
            onmouseout: move |evt| {
                if let Some(handler) = &props.on_mouse_out {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct InputProps {
    label: String,
    name: String,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default)]
    value: String,
    /// Marks the input with the `error` class and `aria-invalid`.
    #[props(default = false)]
    invalid: bool,
    #[props(optional)]
    on_input: Option<EventHandler<FormEvent>>,
    #[props(optional)]
    on_blur: Option<EventHandler<FocusEvent>>,
}

/// Text input nested in its `<label>`, so the label text names the input.
pub fn Input(props: InputProps) -> Element {
    rsx! {
        label {
            "{props.label}",
            input {
                r#type: "{props.input_type}",
                name: "{props.name}",
                value: "{props.value}",
                class: if props.invalid { "error" } else { "" },
                "aria-invalid": props.invalid.then_some("true"),
                oninput: move |evt| {
                    if let Some(handler) = &props.on_input {
                        handler.call(evt);
                    }
                },
                onblur: move |evt| {
                    if let Some(handler) = &props.on_blur {
                        handler.call(evt);
                    }
                },
            }
        }
    }
}
