//! A themable button with fixed pixel sizing.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

use crate::hooks::use_theme;
use crate::theme::UiVariant;

/// The fixed heights a button can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::EnumIs)]
pub enum ButtonSize {
    Xs,
    Sm,
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    pub fn px_height(self) -> u32 {
        match self {
            Self::Xs => 26,
            Self::Sm => 42,
            Self::Default => 50,
            Self::Lg => 60,
        }
    }
}

/// Pixel height for an optional size; an absent size means the default
/// 50px row.
pub fn btn_px_height(size: Option<ButtonSize>) -> u32 {
    size.unwrap_or_default().px_height()
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    size: ButtonSize,
    /// Selects a themed background; untinted surface when absent.
    #[props(optional)]
    variant: Option<UiVariant>,
    #[props(default = false)]
    disabled: bool,
    /// Submission role. Explicitly "button" unless a caller opts into
    /// "submit", so placing one inside a form never submits by accident.
    #[props(default = String::from("button"))]
    button_type: String,
}

/// A versatile button component.
pub fn Button(props: ButtonProps) -> Element {
    let theme = use_theme();
    let height = props.size.px_height();

    let coloring = match props.variant {
        Some(variant) => format!(
            "background-color: {bg}; color: {fg}; border-color: rgba(0,0,0,0.05);",
            bg = theme.color(variant),
            fg = theme.on_variant(),
        ),
        None => String::from(
            "background: var(--bg-secondary); border-color: var(--bg-secondary); color: var(--text-primary);",
        ),
    };

    rsx! {
        button {
            r#type: "{props.button_type}",
            class: "btn",
            "data-variant": props.variant.map(<&'static str>::from).unwrap_or("none"),
            disabled: props.disabled,
            style: "height: {height}px; min-height: {height}px; line-height: {height}px; {coloring}",
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn px_heights_per_size() {
        assert_eq!(btn_px_height(None), 50);
        assert_eq!(btn_px_height(Some(ButtonSize::Xs)), 26);
        assert_eq!(btn_px_height(Some(ButtonSize::Sm)), 42);
        assert_eq!(btn_px_height(Some(ButtonSize::Default)), 50);
        assert_eq!(btn_px_height(Some(ButtonSize::Lg)), 60);
    }

    #[test]
    fn default_size_is_the_50px_row() {
        assert!(ButtonSize::default().is_default());
        assert_eq!(ButtonSize::default().px_height(), 50);
    }
}
