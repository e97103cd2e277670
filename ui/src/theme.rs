//! The color theme supplied to themed components through context.

use strum::IntoStaticStr;

/// Named color variants a component can ask the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::EnumIs)]
#[strum(serialize_all = "lowercase")]
pub enum UiVariant {
    Primary,
    Success,
    Warning,
    Danger,
}

/// Maps variants to colors, plus the text color used on top of any
/// variant background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    primary: &'static str,
    success: &'static str,
    warning: &'static str,
    danger: &'static str,
    on_variant: &'static str,
}

impl Theme {
    pub fn color(&self, variant: UiVariant) -> &'static str {
        match variant {
            UiVariant::Primary => self.primary,
            UiVariant::Success => self.success,
            UiVariant::Warning => self.warning,
            UiVariant::Danger => self.danger,
        }
    }

    /// Text color for content rendered on a variant background.
    pub fn on_variant(&self) -> &'static str {
        self.on_variant
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#0069ff",
            success: "#15cd72",
            warning: "#edb431",
            danger: "#ed4f32",
            on_variant: "#ffffff",
        }
    }
}
