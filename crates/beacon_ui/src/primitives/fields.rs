use std::sync::atomic::{AtomicU64, Ordering};

use super::*;

const INPUT_BASE: &str = "w-full font-sans rounded border transition-all duration-fast focus:outline-none focus:ring-2 focus:ring-offset-0 disabled:opacity-50 disabled:cursor-not-allowed disabled:bg-neutral-50";
const TEXTAREA_BASE: &str = "w-full px-4 py-2.5 font-sans text-base rounded border transition-all duration-fast focus:outline-none focus:ring-2 focus:ring-offset-0 disabled:opacity-50 disabled:cursor-not-allowed disabled:bg-neutral-50";
const LABEL_BASE: &str = "block text-sm font-medium text-neutral-900 mb-1.5";
const REQUIRED_MARK: &str = "after:content-['*'] after:text-error-500 after:ml-1";
const HELPER_BASE: &str = "mt-1.5 text-sm text-neutral-600";
const ERROR_BASE: &str = "mt-1.5 text-sm text-error-600";

static NEXT_FIELD_INSTANCE: AtomicU64 = AtomicU64::new(0);

/// Stable DOM identity for a mounted field and its auxiliary text elements.
///
/// Constructed once in the component body, so the generated id survives
/// reactive re-renders of the same instance. Generated ids come from a
/// process-wide counter; uniqueness within a document is all that matters,
/// not monotonicity across documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIdentity {
    id: String,
}

impl FieldIdentity {
    /// Uses `explicit` when supplied, otherwise generates `{prefix}-{n}`.
    pub fn new(prefix: &str, explicit: Option<String>) -> Self {
        let id = match explicit.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => format!(
                "{prefix}-{}",
                NEXT_FIELD_INSTANCE.fetch_add(1, Ordering::Relaxed)
            ),
        };
        Self { id }
    }

    /// The field's own DOM id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Derived id for the helper-text element.
    pub fn helper_id(&self) -> String {
        format!("{}-helper", self.id)
    }

    /// Derived id for the error-message element.
    pub fn error_id(&self) -> String {
        format!("{}-error", self.id)
    }

    /// Builds the `aria-describedby` value, or `None` when nothing applies.
    ///
    /// Order: caller-supplied reference, helper id (only without an error),
    /// error id. The helper id is excluded whenever an error is shown, so
    /// assistive technology reads exactly the text that is on screen.
    pub fn described_by(
        &self,
        external: Option<&str>,
        has_helper: bool,
        has_error: bool,
    ) -> Option<String> {
        let mut refs = Vec::new();
        if let Some(external) = external.filter(|external| !external.is_empty()) {
            refs.push(external.to_string());
        }
        if has_helper && !has_error {
            refs.push(self.helper_id());
        }
        if has_error {
            refs.push(self.error_id());
        }
        if refs.is_empty() {
            None
        } else {
            Some(refs.join(" "))
        }
    }
}

/// Effective validation display state for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationDisplay {
    /// Variant after the error override.
    pub variant: FieldVariant,
    /// Helper text that actually renders.
    pub helper_text: Option<String>,
    /// Error message that actually renders.
    pub error_message: Option<String>,
}

/// Resolves the explicit variant, helper text, and error message into one
/// effective display state.
///
/// An error message always forces the [`FieldVariant::Error`] state and
/// suppresses helper text, regardless of what else was supplied. Empty
/// strings count as absent.
pub fn resolve_validation(
    variant: FieldVariant,
    helper_text: Option<String>,
    error_message: Option<String>,
) -> ValidationDisplay {
    let helper_text = helper_text.filter(|text| !text.is_empty());
    let error_message = error_message.filter(|text| !text.is_empty());
    match error_message {
        Some(error_message) => ValidationDisplay {
            variant: FieldVariant::Error,
            helper_text: None,
            error_message: Some(error_message),
        },
        None => ValidationDisplay {
            variant,
            helper_text,
            error_message: None,
        },
    }
}

#[component]
/// Single-line text field with label, helper/error text, and icon support.
///
/// Helper and error text are reactive; an error appearing at runtime flips
/// the field into the error state, rewires `aria-describedby`, and hides the
/// helper text without remounting the input.
pub fn TextField(
    /// Visible label wired to the input via `for`.
    #[prop(optional, into)]
    label: Option<String>,
    /// Helper text below the input; hidden while an error shows.
    #[prop(optional, into)]
    helper_text: MaybeProp<String>,
    /// Error message; forces the error state when present.
    #[prop(optional, into)]
    error_message: MaybeProp<String>,
    /// Sizing token.
    #[prop(default = FieldSize::Md)]
    size: FieldSize,
    /// Explicit validation variant; overridden by `error_message`.
    #[prop(default = FieldVariant::Default)]
    variant: FieldVariant,
    /// Optional decorative glyph inside the field.
    #[prop(optional, into)]
    icon: Option<IconName>,
    /// Which side of the field the glyph sits on.
    #[prop(default = IconPosition::Left)]
    icon_position: IconPosition,
    /// Explicit DOM id; generated when absent.
    #[prop(optional, into)]
    id: Option<String>,
    /// Free-form classes for the input element.
    #[prop(optional, into)]
    class: Option<String>,
    /// Free-form classes for the label element.
    #[prop(optional, into)]
    label_class: Option<String>,
    /// Free-form classes for the helper and error elements.
    #[prop(optional, into)]
    helper_class: Option<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Input type attribute, `text` by default.
    #[prop(optional, into)]
    input_type: Option<&'static str>,
    /// Caller-supplied description reference, prepended to the derived ids.
    #[prop(optional, into)]
    aria_describedby: Option<String>,
    /// Controlled value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Disabled flag.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Marks the field required and renders the label marker.
    #[prop(optional)]
    required: bool,
    /// Node ref to the underlying input element.
    #[prop(optional)]
    node_ref: NodeRef<html::Input>,
    /// Input handler.
    #[prop(optional)]
    on_input: Option<Callback<web_sys::Event>>,
    /// Keydown handler.
    #[prop(optional)]
    on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let identity = FieldIdentity::new("input", id);
    let display =
        Signal::derive(move || resolve_validation(variant, helper_text.get(), error_message.get()));

    let has_left_icon = icon.is_some() && icon_position == IconPosition::Left;
    let has_right_icon = icon.is_some() && icon_position == IconPosition::Right;
    let input_class = move || {
        compose_class(&[
            INPUT_BASE,
            size.input_classes(),
            display.get().variant.classes(),
            if has_left_icon { "pl-10" } else { "" },
            if has_right_icon { "pr-10" } else { "" },
            class.as_deref().unwrap_or(""),
        ])
    };

    let input_id = identity.id().to_string();
    let label_for = input_id.clone();
    let helper_id = identity.helper_id();
    let error_id = identity.error_id();
    let helper_class = helper_class.unwrap_or_default();
    let helper_text_class = compose_class(&[HELPER_BASE, helper_class.as_str()]);
    let error_text_class = compose_class(&[ERROR_BASE, helper_class.as_str()]);

    let described_by = move || {
        let display = display.get();
        identity.described_by(
            aria_describedby.as_deref(),
            display.helper_text.is_some(),
            display.error_message.is_some(),
        )
    };

    view! {
        <div class="w-full">
            {label.map(|label| {
                let class = compose_class(&[
                    LABEL_BASE,
                    if required { REQUIRED_MARK } else { "" },
                    label_class.as_deref().unwrap_or(""),
                ]);
                view! { <label for=label_for class=class>{label}</label> }
            })}
            <div class="relative">
                {icon
                    .filter(|_| has_left_icon)
                    .map(|icon| view! {
                        <div class=compose_class(&[
                            "absolute left-0 top-0 h-full flex items-center",
                            size.well_classes(),
                            "pointer-events-none",
                        ])>
                            <Icon icon size=size.icon_size() class="text-neutral-500" aria_hidden=true />
                        </div>
                    })}
                <input
                    id=input_id
                    node_ref=node_ref
                    type=input_type.unwrap_or("text")
                    class=input_class
                    placeholder=placeholder
                    required=required
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    aria-describedby=described_by
                    aria-invalid=move || display.get().error_message.is_some().then_some("true")
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(ev);
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                />
                {icon
                    .filter(|_| has_right_icon)
                    .map(|icon| view! {
                        <div class=compose_class(&[
                            "absolute right-0 top-0 h-full flex items-center",
                            size.well_classes(),
                            "pointer-events-none",
                        ])>
                            <Icon icon size=size.icon_size() class="text-neutral-500" aria_hidden=true />
                        </div>
                    })}
            </div>
            {move || {
                display.get().helper_text.map(|helper| {
                    view! {
                        <p id=helper_id.clone() class=helper_text_class.clone()>{helper}</p>
                    }
                })
            }}
            {move || {
                display.get().error_message.map(|error| {
                    view! {
                        <p
                            id=error_id.clone()
                            class=error_text_class.clone()
                            role="alert"
                            aria-live="polite"
                        >
                            {error}
                        </p>
                    }
                })
            }}
        </div>
    }
}

#[component]
/// Multi-line text field with label, helper/error text, and resize control.
pub fn TextArea(
    /// Visible label wired to the textarea via `for`.
    #[prop(optional, into)]
    label: Option<String>,
    /// Helper text below the textarea; hidden while an error shows.
    #[prop(optional, into)]
    helper_text: MaybeProp<String>,
    /// Error message; forces the error state when present.
    #[prop(optional, into)]
    error_message: MaybeProp<String>,
    /// Explicit validation variant; overridden by `error_message`.
    #[prop(default = FieldVariant::Default)]
    variant: FieldVariant,
    /// Resize behavior token.
    #[prop(default = TextResize::Vertical)]
    resize: TextResize,
    /// Explicit DOM id; generated when absent.
    #[prop(optional, into)]
    id: Option<String>,
    /// Free-form classes for the textarea element.
    #[prop(optional, into)]
    class: Option<String>,
    /// Free-form classes for the label element.
    #[prop(optional, into)]
    label_class: Option<String>,
    /// Free-form classes for the helper and error elements.
    #[prop(optional, into)]
    helper_class: Option<String>,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Visible row count.
    #[prop(default = 4)]
    rows: u32,
    /// Caller-supplied description reference, prepended to the derived ids.
    #[prop(optional, into)]
    aria_describedby: Option<String>,
    /// Controlled value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Disabled flag.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Marks the field required and renders the label marker.
    #[prop(optional)]
    required: bool,
    /// Input handler.
    #[prop(optional)]
    on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let identity = FieldIdentity::new("textarea", id);
    let display =
        Signal::derive(move || resolve_validation(variant, helper_text.get(), error_message.get()));

    let textarea_class = move || {
        compose_class(&[
            TEXTAREA_BASE,
            display.get().variant.classes(),
            resize.classes(),
            class.as_deref().unwrap_or(""),
        ])
    };

    let textarea_id = identity.id().to_string();
    let label_for = textarea_id.clone();
    let helper_id = identity.helper_id();
    let error_id = identity.error_id();
    let helper_class = helper_class.unwrap_or_default();
    let helper_text_class = compose_class(&[HELPER_BASE, helper_class.as_str()]);
    let error_text_class = compose_class(&[ERROR_BASE, helper_class.as_str()]);

    let described_by = move || {
        let display = display.get();
        identity.described_by(
            aria_describedby.as_deref(),
            display.helper_text.is_some(),
            display.error_message.is_some(),
        )
    };

    view! {
        <div class="w-full">
            {label.map(|label| {
                let class = compose_class(&[
                    LABEL_BASE,
                    if required { REQUIRED_MARK } else { "" },
                    label_class.as_deref().unwrap_or(""),
                ]);
                view! { <label for=label_for class=class>{label}</label> }
            })}
            <textarea
                id=textarea_id
                rows=rows
                class=textarea_class
                placeholder=placeholder
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                aria-describedby=described_by
                aria-invalid=move || display.get().error_message.is_some().then_some("true")
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            ></textarea>
            {move || {
                display.get().helper_text.map(|helper| {
                    view! {
                        <p id=helper_id.clone() class=helper_text_class.clone()>{helper}</p>
                    }
                })
            }}
            {move || {
                display.get().error_message.map(|error| {
                    view! {
                        <p
                            id=error_id.clone()
                            class=error_text_class.clone()
                            role="alert"
                            aria-live="polite"
                        >
                            {error}
                        </p>
                    }
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn explicit_id_passes_through() {
        let identity = FieldIdentity::new("input", Some("email".to_string()));
        assert_eq!(identity.id(), "email");
        assert_eq!(identity.helper_id(), "email-helper");
        assert_eq!(identity.error_id(), "email-error");
    }

    #[test]
    fn generated_ids_are_distinct_per_instance() {
        let first = FieldIdentity::new("input", None);
        let second = FieldIdentity::new("input", None);
        assert_ne!(first.id(), second.id());
        assert!(first.id().starts_with("input-"));
    }

    #[test]
    fn empty_explicit_id_falls_back_to_generation() {
        let identity = FieldIdentity::new("textarea", Some(String::new()));
        assert!(identity.id().starts_with("textarea-"));
    }

    #[test]
    fn helper_only_references_the_helper_element() {
        let identity = FieldIdentity::new("input", Some("name".to_string()));
        assert_eq!(
            identity.described_by(None, true, false),
            Some("name-helper".to_string())
        );
    }

    #[test]
    fn error_excludes_the_helper_reference() {
        let identity = FieldIdentity::new("input", Some("name".to_string()));
        assert_eq!(
            identity.described_by(None, true, true),
            Some("name-error".to_string())
        );
    }

    #[test]
    fn caller_reference_comes_first() {
        let identity = FieldIdentity::new("input", Some("name".to_string()));
        assert_eq!(
            identity.described_by(Some("intro"), true, false),
            Some("intro name-helper".to_string())
        );
        assert_eq!(
            identity.described_by(Some("intro"), true, true),
            Some("intro name-error".to_string())
        );
    }

    #[test]
    fn no_references_omits_the_attribute() {
        let identity = FieldIdentity::new("input", Some("name".to_string()));
        assert_eq!(identity.described_by(None, false, false), None);
        assert_eq!(identity.described_by(Some(""), false, false), None);
    }

    #[test]
    fn error_message_forces_the_error_state() {
        let display = resolve_validation(
            FieldVariant::Success,
            Some("All good".to_string()),
            Some("Required".to_string()),
        );
        assert_eq!(
            display,
            ValidationDisplay {
                variant: FieldVariant::Error,
                helper_text: None,
                error_message: Some("Required".to_string()),
            }
        );
    }

    #[test]
    fn explicit_variant_passes_through_without_error() {
        let display =
            resolve_validation(FieldVariant::Warning, Some("Careful".to_string()), None);
        assert_eq!(display.variant, FieldVariant::Warning);
        assert_eq!(display.helper_text, Some("Careful".to_string()));
        assert_eq!(display.error_message, None);
    }

    #[test]
    fn empty_error_string_counts_as_absent() {
        let display = resolve_validation(
            FieldVariant::Default,
            Some("Hint".to_string()),
            Some(String::new()),
        );
        assert_eq!(display.variant, FieldVariant::Default);
        assert_eq!(display.helper_text, Some("Hint".to_string()));
        assert_eq!(display.error_message, None);
    }

    #[test]
    fn resolution_is_pure() {
        let first = resolve_validation(FieldVariant::Success, None, Some("E".to_string()));
        let second = resolve_validation(FieldVariant::Success, None, Some("E".to_string()));
        assert_eq!(first, second);
    }
}
