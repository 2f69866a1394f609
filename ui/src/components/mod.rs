//! Shared building blocks for the app's views.
pub mod pico;
