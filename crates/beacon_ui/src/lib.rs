//! Beacon presentational component kit.
//!
//! The crate owns a small set of accessible Leptos primitives — [`Button`],
//! [`Icon`], [`TextField`], and [`TextArea`] — plus the token enums and pure
//! resolver functions that map declarative options (variant, size, icon
//! position, validation state) to CSS class combinations and ARIA attributes.
//! Consumers compose these primitives instead of emitting ad hoc control
//! markup; all visual styling lives in the utility-class contract the tokens
//! resolve to.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{resolve_glyph_a11y, GlyphA11y, GlyphRole, Icon, IconName, IconSize};
pub use primitives::{
    resolve_validation, Button, ButtonSize, ButtonVariant, FieldIdentity, FieldSize, FieldVariant,
    IconPosition, TextArea, TextField, TextResize, ValidationDisplay,
};

/// Convenience imports for crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, FieldSize, FieldVariant, Icon, IconName, IconPosition,
        IconSize, TextArea, TextField, TextResize,
    };
}
