//! Glyph component with full ARIA resolution.
//!
//! Every glyph renders as an inline SVG from a bundled path set. The
//! accessibility contract is deliberately asymmetric: a glyph marked
//! decorative is always hidden from assistive technology and never exposes a
//! label, while a non-decorative glyph without any accessible text is hidden
//! by default rather than exposed with an empty name.

use leptos::*;

use crate::primitives::compose_class;

const ICON_BASE: &str = "inline-flex items-center";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Bundled glyph set.
pub enum IconName {
    /// Magnifying glass.
    Search,
    /// Plus sign.
    Plus,
    /// Download tray arrow.
    Download,
    /// Upload tray arrow.
    Upload,
    /// Waste bin.
    Trash,
    /// Heart outline.
    Heart,
    /// Five-point star.
    Star,
    /// Person silhouette.
    User,
    /// Gear.
    Settings,
    /// House.
    Home,
    /// Notification bell.
    Bell,
    /// Envelope.
    Mail,
    /// Month calendar.
    Calendar,
    /// Check mark.
    Check,
    /// Dismiss cross.
    Dismiss,
    /// Warning triangle.
    Warning,
    /// Information circle.
    Info,
    /// Left-pointing chevron.
    ChevronLeft,
    /// Right-pointing chevron.
    ChevronRight,
    /// Open eye.
    Eye,
    /// Crossed-out eye.
    EyeOff,
    /// Open-ended arc used as the busy indicator.
    Spinner,
}

impl IconName {
    /// Every bundled glyph, in gallery order.
    pub const ALL: &'static [IconName] = &[
        Self::Search,
        Self::Plus,
        Self::Download,
        Self::Upload,
        Self::Trash,
        Self::Heart,
        Self::Star,
        Self::User,
        Self::Settings,
        Self::Home,
        Self::Bell,
        Self::Mail,
        Self::Calendar,
        Self::Check,
        Self::Dismiss,
        Self::Warning,
        Self::Info,
        Self::ChevronLeft,
        Self::ChevronRight,
        Self::Eye,
        Self::EyeOff,
        Self::Spinner,
    ];

    /// Human-readable glyph name for captions.
    pub fn name(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Plus => "plus",
            Self::Download => "download",
            Self::Upload => "upload",
            Self::Trash => "trash",
            Self::Heart => "heart",
            Self::Star => "star",
            Self::User => "user",
            Self::Settings => "settings",
            Self::Home => "home",
            Self::Bell => "bell",
            Self::Mail => "mail",
            Self::Calendar => "calendar",
            Self::Check => "check",
            Self::Dismiss => "dismiss",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::Eye => "eye",
            Self::EyeOff => "eye-off",
            Self::Spinner => "spinner",
        }
    }

    /// Inner SVG markup for a 24x24 stroke-based viewBox.
    pub fn markup(self) -> &'static str {
        match self {
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::Plus => r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#,
            Self::Download => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" x2="12" y1="15" y2="3"/>"#
            }
            Self::Upload => {
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="17 8 12 3 7 8"/><line x1="12" x2="12" y1="3" y2="15"/>"#
            }
            Self::Trash => {
                r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#
            }
            Self::Heart => {
                r#"<path d="M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.29 1.51 4.04 3 5.5l7 7Z"/>"#
            }
            Self::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Self::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::Settings => {
                r#"<path d="M12.22 2h-.44a2 2 0 0 0-2 2v.18a2 2 0 0 1-1 1.73l-.43.25a2 2 0 0 1-2 0l-.15-.08a2 2 0 0 0-2.73.73l-.22.38a2 2 0 0 0 .73 2.73l.15.1a2 2 0 0 1 1 1.72v.51a2 2 0 0 1-1 1.74l-.15.09a2 2 0 0 0-.73 2.73l.22.38a2 2 0 0 0 2.73.73l.15-.08a2 2 0 0 1 2 0l.43.25a2 2 0 0 1 1 1.73V20a2 2 0 0 0 2 2h.44a2 2 0 0 0 2-2v-.18a2 2 0 0 1 1-1.73l.43-.25a2 2 0 0 1 2 0l.15.08a2 2 0 0 0 2.73-.73l.22-.39a2 2 0 0 0-.73-2.73l-.15-.08a2 2 0 0 1-1-1.74v-.5a2 2 0 0 1 1-1.74l.15-.09a2 2 0 0 0 .73-2.73l-.22-.38a2 2 0 0 0-2.73-.73l-.15.08a2 2 0 0 1-2 0l-.43-.25a2 2 0 0 1-1-1.73V4a2 2 0 0 0-2-2z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::Home => {
                r#"<path d="m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><polyline points="9 22 9 12 15 12 15 22"/>"#
            }
            Self::Bell => {
                r#"<path d="M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9"/><path d="M10.3 21a1.94 1.94 0 0 0 3.4 0"/>"#
            }
            Self::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            Self::Calendar => {
                r#"<path d="M8 2v4"/><path d="M16 2v4"/><rect width="18" height="18" x="3" y="4" rx="2"/><path d="M3 10h18"/>"#
            }
            Self::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            Self::Dismiss => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Self::Warning => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            Self::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            Self::ChevronLeft => r#"<path d="m15 18-6-6 6-6"/>"#,
            Self::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            Self::Eye => {
                r#"<path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"/><circle cx="12" cy="12" r="3"/>"#
            }
            Self::EyeOff => {
                r#"<path d="M9.88 9.88a3 3 0 1 0 4.24 4.24"/><path d="M10.73 5.08A10.43 10.43 0 0 1 12 5c7 0 10 7 10 7a13.16 13.16 0 0 1-1.67 2.68"/><path d="M6.61 6.61A13.526 13.526 0 0 0 2 12s3 7 10 7a9.74 9.74 0 0 0 5.39-1.61"/><line x1="2" x2="22" y1="2" y2="22"/>"#
            }
            Self::Spinner => r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Glyph sizing presets paired with the type scale, plus a free pixel size.
pub enum IconSize {
    /// 12px, pairs with caption text.
    Xs,
    /// 16px, pairs with body text.
    Sm,
    /// 20px, pairs with heading-6.
    Md,
    /// 24px, pairs with heading-5.
    Lg,
    /// 32px, pairs with heading-3.
    Xl,
    /// Explicit pixel size.
    Px(u16),
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    /// Resolved pixel size.
    pub fn px(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 32,
            Self::Px(px) => px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// ARIA role a glyph can take.
pub enum GlyphRole {
    /// Meaningful image exposed to assistive technology.
    Img,
    /// Decorative element ignored by assistive technology.
    Presentation,
}

impl GlyphRole {
    /// Attribute value for the `role` attribute.
    pub fn token(self) -> &'static str {
        match self {
            Self::Img => "img",
            Self::Presentation => "presentation",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Effective accessibility attributes for a glyph.
pub struct GlyphA11y {
    /// Whether `aria-hidden="true"` is emitted.
    pub hidden: bool,
    /// Effective `role` attribute value.
    pub role: GlyphRole,
    /// Effective `aria-label` value, when one is exposed.
    pub label: Option<String>,
}

/// Computes the effective accessibility attributes for a glyph.
///
/// Decorative intent (an explicit hidden flag or an explicit presentation
/// role) wins outright: the glyph is hidden and any supplied label or title
/// is discarded. A non-decorative glyph is exposed as `role="img"` with its
/// label (or title as fallback) when accessible text exists, and hidden when
/// it does not. Empty strings count as absent text.
pub fn resolve_glyph_a11y(
    explicit_hidden: bool,
    explicit_role: Option<GlyphRole>,
    aria_label: Option<String>,
    title: Option<String>,
) -> GlyphA11y {
    let decorative = explicit_hidden || explicit_role == Some(GlyphRole::Presentation);
    if decorative {
        return GlyphA11y {
            hidden: true,
            role: GlyphRole::Presentation,
            label: None,
        };
    }

    let label = aria_label
        .filter(|label| !label.is_empty())
        .or_else(|| title.filter(|title| !title.is_empty()));
    GlyphA11y {
        hidden: label.is_none(),
        role: explicit_role.unwrap_or(GlyphRole::Img),
        label,
    }
}

#[component]
/// Inline SVG glyph with resolved ARIA attributes.
///
/// `role` is always emitted; `aria-hidden` only when the glyph is hidden, so
/// an exposed glyph carries no stray hidden attribute.
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    /// Preset or pixel size.
    #[prop(default = IconSize::Md)]
    size: IconSize,
    /// Free-form classes appended after the base classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Tooltip text; doubles as the accessible-name fallback.
    #[prop(optional, into)]
    title: Option<String>,
    /// Explicit accessible name.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Marks the glyph as decorative.
    #[prop(optional)]
    aria_hidden: bool,
    /// Explicit role override.
    #[prop(optional, into)]
    role: Option<GlyphRole>,
) -> impl IntoView {
    let a11y = resolve_glyph_a11y(aria_hidden, role, aria_label, title);
    let class = compose_class(&[ICON_BASE, class.as_deref().unwrap_or("")]);

    view! {
        <svg
            width=size.px()
            height=size.px()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=class
            role=a11y.role.token()
            aria-hidden=a11y.hidden.then_some("true")
            aria-label=a11y.label
            inner_html=icon.markup()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decorative_flag_wins_outright() {
        let resolved = resolve_glyph_a11y(
            true,
            Some(GlyphRole::Img),
            Some("Favorite".to_string()),
            Some("Favorite".to_string()),
        );
        assert_eq!(
            resolved,
            GlyphA11y {
                hidden: true,
                role: GlyphRole::Presentation,
                label: None,
            }
        );
    }

    #[test]
    fn presentation_role_implies_decorative() {
        let resolved = resolve_glyph_a11y(
            false,
            Some(GlyphRole::Presentation),
            Some("ignored".to_string()),
            None,
        );
        assert!(resolved.hidden);
        assert_eq!(resolved.role, GlyphRole::Presentation);
        assert_eq!(resolved.label, None);
    }

    #[test]
    fn unlabeled_glyph_is_hidden_not_exposed_with_empty_name() {
        let resolved = resolve_glyph_a11y(false, None, None, None);
        assert_eq!(
            resolved,
            GlyphA11y {
                hidden: true,
                role: GlyphRole::Img,
                label: None,
            }
        );
    }

    #[test]
    fn labeled_glyph_is_exposed() {
        let resolved = resolve_glyph_a11y(false, None, Some("Foo".to_string()), None);
        assert!(!resolved.hidden);
        assert_eq!(resolved.role, GlyphRole::Img);
        assert_eq!(resolved.label, Some("Foo".to_string()));
    }

    #[test]
    fn title_serves_as_label_fallback() {
        let resolved = resolve_glyph_a11y(false, None, None, Some("Favorite".to_string()));
        assert!(!resolved.hidden);
        assert_eq!(resolved.label, Some("Favorite".to_string()));

        let resolved = resolve_glyph_a11y(
            false,
            None,
            Some("Label".to_string()),
            Some("Title".to_string()),
        );
        assert_eq!(resolved.label, Some("Label".to_string()));
    }

    #[test]
    fn empty_strings_count_as_absent_text() {
        let resolved = resolve_glyph_a11y(false, None, Some(String::new()), Some(String::new()));
        assert!(resolved.hidden);
        assert_eq!(resolved.label, None);
    }

    #[test]
    fn resolution_is_pure() {
        let first = resolve_glyph_a11y(false, None, Some("Foo".to_string()), None);
        let second = resolve_glyph_a11y(false, None, Some("Foo".to_string()), None);
        assert_eq!(first, second);
    }

    #[test]
    fn every_glyph_carries_markup_and_a_name() {
        for icon in IconName::ALL {
            assert!(!icon.markup().is_empty());
            assert!(!icon.name().is_empty());
        }
    }

    #[test]
    fn preset_sizes_match_the_type_scale() {
        assert_eq!(IconSize::Xs.px(), 12);
        assert_eq!(IconSize::Sm.px(), 16);
        assert_eq!(IconSize::Md.px(), 20);
        assert_eq!(IconSize::Lg.px(), 24);
        assert_eq!(IconSize::Xl.px(), 32);
        assert_eq!(IconSize::Px(48).px(), 48);
    }
}
