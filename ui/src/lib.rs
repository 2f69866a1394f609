//! Signup page: the root `App` component plus the form it hosts.

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;

mod components;
pub mod signup;

use components::pico::Card;
use components::pico::Container;
pub use signup::{FormConfig, SignupForm, Validator};

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

/// Loads the build-time form config, falling back to the defaults when it is unusable.
fn load_validator() -> Validator {
    match FormConfig::from_build_env().and_then(|config| config.validator()) {
        Ok(validator) => validator,
        Err(e) => {
            warn!("{e}; using default form config");
            Validator::default()
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let validator = use_hook(load_validator);

    let form_css = r#"
    /* --- FIELD ERRORS --- */
    form.form input.error {
        border-color: var(--pico-del-color);
        --pico-box-shadow: 0 0 0 var(--pico-outline-width) color-mix(in srgb, var(--pico-del-color), transparent 75%);
    }

    /* --- SUBMIT --- */
    form.form button[type="submit"] {
        width: 100%;
        transition: background-color 0.15s;
    }

    /* --- SUCCESS BANNER --- */
    .success {
        padding: 1rem;
        border-radius: var(--pico-border-radius);
        background-color: color-mix(in srgb, var(--pico-ins-color), transparent 85%);
        color: var(--pico-ins-color);
        font-weight: bold;
        text-align: center;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "{PICO_CSS}",
        }
        style {
            "{form_css}"
        }
        Container {
            Card {
                h3 { "Create Account" }
                SignupForm { validator }
            }
        }
    }
}
