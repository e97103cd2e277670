use dioxus::prelude::*;

use crate::theme::Theme;

/// Reads the [`Theme`] provided by the app shell.
///
/// Components may also be rendered outside the shell (tests, stories);
/// in that case the default theme applies.
pub fn use_theme() -> Theme {
    try_consume_context::<Theme>().unwrap_or_default()
}
