//! Shared style-token enums and class composition for the control primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod fields;

pub use controls::Button;
pub use fields::{resolve_validation, FieldIdentity, TextArea, TextField, ValidationDisplay};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual variants for [`Button`].
pub enum ButtonVariant {
    /// Emphasized call-to-action button.
    Primary,
    /// Bordered neutral button.
    Secondary,
    /// Destructive-action button.
    Destructive,
    /// Borderless low-emphasis button.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    /// Utility classes for this variant.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-primary-600 text-white hover:bg-primary-700 focus:ring-primary-500 border-transparent"
            }
            Self::Secondary => {
                "bg-white text-neutral-900 border-neutral-300 hover:bg-neutral-50 focus:ring-primary-500"
            }
            Self::Destructive => {
                "bg-error-600 text-white hover:bg-error-700 focus:ring-error-500 border-transparent"
            }
            Self::Ghost => {
                "bg-transparent text-neutral-700 hover:bg-neutral-100 focus:ring-primary-500 border-transparent"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sizing tokens for [`Button`].
pub enum ButtonSize {
    /// Dense button.
    Sm,
    /// Default button.
    Md,
    /// Large button.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Md
    }
}

impl ButtonSize {
    /// Padding, text, and gap classes for this size.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-2 text-sm gap-1.5",
            Self::Md => "px-4 py-2.5 text-base gap-2",
            Self::Lg => "px-6 py-3.5 text-lg gap-2.5",
        }
    }

    /// Glyph size paired with this button size.
    pub fn icon_size(self) -> IconSize {
        match self {
            Self::Sm | Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Placement of an optional glyph relative to control text.
pub enum IconPosition {
    /// Glyph before the text.
    Left,
    /// Glyph after the text.
    Right,
}

impl Default for IconPosition {
    fn default() -> Self {
        Self::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Sizing tokens for [`TextField`].
pub enum FieldSize {
    /// Dense field.
    Sm,
    /// Default field.
    Md,
    /// Large field.
    Lg,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::Md
    }
}

impl FieldSize {
    /// Padding and text classes for the input element.
    pub fn input_classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-2 text-sm",
            Self::Md => "px-4 py-2.5 text-base",
            Self::Lg => "px-4 py-3 text-lg",
        }
    }

    /// Horizontal padding for the icon well flanking the input.
    pub fn well_classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3",
            Self::Md | Self::Lg => "px-4",
        }
    }

    /// Glyph size paired with this field size.
    pub fn icon_size(self) -> IconSize {
        match self {
            Self::Sm | Self::Md => IconSize::Sm,
            Self::Lg => IconSize::Md,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Validation-state variants for [`TextField`] and [`TextArea`].
pub enum FieldVariant {
    /// Neutral field.
    Default,
    /// Field with a validation error.
    Error,
    /// Field with a validation warning.
    Warning,
    /// Field with confirmed-valid content.
    Success,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl FieldVariant {
    /// Border and focus-ring classes for this state.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "border-neutral-300 focus:border-primary-500 focus:ring-primary-500",
            Self::Error => "border-error-500 focus:border-error-500 focus:ring-error-500",
            Self::Warning => "border-warning-500 focus:border-warning-500 focus:ring-warning-500",
            Self::Success => "border-success-500 focus:border-success-500 focus:ring-success-500",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Resize behavior tokens for [`TextArea`].
pub enum TextResize {
    /// Fixed size.
    None,
    /// Vertical resize only.
    Vertical,
    /// Horizontal resize only.
    Horizontal,
    /// Free resize.
    Both,
}

impl Default for TextResize {
    fn default() -> Self {
        Self::Vertical
    }
}

impl TextResize {
    /// Resize utility class for this token.
    pub fn classes(self) -> &'static str {
        match self {
            Self::None => "resize-none",
            Self::Vertical => "resize-y",
            Self::Horizontal => "resize-x",
            Self::Both => "resize",
        }
    }
}

/// Joins class fragments with single spaces, skipping empty fragments.
///
/// Callers pass fragments in precedence order: base classes first, token and
/// state classes next, the caller-supplied free-form string last so caller
/// overrides win.
pub(crate) fn compose_class(parts: &[&str]) -> String {
    let mut class = String::new();
    for part in parts {
        if part.is_empty() {
            continue;
        }
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(part);
    }
    class
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn documented_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert_eq!(IconPosition::default(), IconPosition::Left);
        assert_eq!(FieldSize::default(), FieldSize::Md);
        assert_eq!(FieldVariant::default(), FieldVariant::Default);
        assert_eq!(TextResize::default(), TextResize::Vertical);
    }

    #[test]
    fn every_token_resolves_to_a_nonempty_class_set() {
        let button_variants = [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Destructive,
            ButtonVariant::Ghost,
        ];
        for variant in button_variants {
            assert!(!variant.classes().is_empty());
        }
        for size in [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg] {
            assert!(!size.classes().is_empty());
        }
        for size in [FieldSize::Sm, FieldSize::Md, FieldSize::Lg] {
            assert!(!size.input_classes().is_empty());
            assert!(!size.well_classes().is_empty());
        }
        let field_variants = [
            FieldVariant::Default,
            FieldVariant::Error,
            FieldVariant::Warning,
            FieldVariant::Success,
        ];
        for variant in field_variants {
            assert!(!variant.classes().is_empty());
        }
        for resize in [
            TextResize::None,
            TextResize::Vertical,
            TextResize::Horizontal,
            TextResize::Both,
        ] {
            assert!(!resize.classes().is_empty());
        }
    }

    #[test]
    fn token_lookup_is_deterministic() {
        assert_eq!(
            ButtonVariant::Destructive.classes(),
            ButtonVariant::Destructive.classes()
        );
        assert_eq!(
            FieldVariant::Warning.classes(),
            FieldVariant::Warning.classes()
        );
    }

    #[test]
    fn button_sizes_pair_with_glyph_sizes() {
        assert_eq!(ButtonSize::Sm.icon_size(), IconSize::Sm);
        assert_eq!(ButtonSize::Md.icon_size(), IconSize::Sm);
        assert_eq!(ButtonSize::Lg.icon_size(), IconSize::Md);
    }

    #[test]
    fn compose_class_keeps_caller_overrides_last() {
        assert_eq!(
            compose_class(&["base", "variant", "caller"]),
            "base variant caller"
        );
    }

    #[test]
    fn compose_class_skips_empty_fragments() {
        assert_eq!(compose_class(&["base", "", "caller", ""]), "base caller");
        assert_eq!(compose_class(&["", ""]), "");
    }
}
