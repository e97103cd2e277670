//! The components module contains all shared components for our app.
//! Components are the building blocks of dioxus apps.
pub mod button;
pub mod coin_chooser;
pub mod payments_chart;
pub mod pico;
pub mod typo;
