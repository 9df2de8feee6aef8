use super::*;

const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded border transition-all duration-fast focus:outline-none focus:ring-2 focus:ring-offset-2 disabled:opacity-50 disabled:cursor-not-allowed disabled:pointer-events-none font-sans font-medium";

/// A busy control is non-interactive regardless of the explicit disabled flag.
fn effective_disabled(disabled: bool, is_loading: bool) -> bool {
    disabled || is_loading
}

#[component]
/// Accessible push button with variant, size, icon slot, and busy semantics.
///
/// While `is_loading` is set the button is forced non-interactive and its
/// content (glyph slot plus children) is replaced by a spinning busy
/// indicator with fixed status text. Clearing the flag restores the original
/// content; no disabled state lingers unless `disabled` itself is set.
pub fn Button(
    /// Visual variant.
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Sizing token.
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Optional decorative glyph.
    #[prop(optional, into)]
    icon: Option<IconName>,
    /// Which side of the text the glyph sits on.
    #[prop(default = IconPosition::Left)]
    icon_position: IconPosition,
    /// Caller-driven busy flag.
    #[prop(optional, into)]
    is_loading: MaybeSignal<bool>,
    /// Explicit disabled flag, OR-ed with the busy flag.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Free-form classes appended after base, variant, and size classes.
    #[prop(optional, into)]
    class: Option<String>,
    /// Explicit DOM id.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible name override.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Button text content.
    children: ChildrenFn,
) -> impl IntoView {
    let class = compose_class(&[
        BUTTON_BASE,
        variant.classes(),
        size.classes(),
        class.as_deref().unwrap_or(""),
    ]);
    let glyph_size = size.icon_size();
    let is_disabled = move || effective_disabled(disabled.get(), is_loading.get());

    view! {
        <button
            type="button"
            class=class
            id=id
            aria-label=aria_label
            disabled=is_disabled
            aria-disabled=move || is_disabled().to_string()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || {
                if is_loading.get() {
                    view! {
                        <span class="animate-spin" aria-hidden="true" role="presentation">
                            <Icon icon=IconName::Spinner size=glyph_size aria_hidden=true />
                        </span>
                        <span>"Loading..."</span>
                    }
                        .into_view()
                } else {
                    view! {
                        {icon
                            .filter(|_| icon_position == IconPosition::Left)
                            .map(|icon| view! { <Icon icon size=glyph_size aria_hidden=true /> })}
                        <span>{children()}</span>
                        {icon
                            .filter(|_| icon_position == IconPosition::Right)
                            .map(|icon| view! { <Icon icon size=glyph_size aria_hidden=true /> })}
                    }
                        .into_view()
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn busy_forces_non_interactive_regardless_of_disabled_flag() {
        assert!(!effective_disabled(false, false));
        assert!(effective_disabled(true, false));
        assert!(effective_disabled(false, true));
        assert!(effective_disabled(true, true));
    }

    #[test]
    fn clearing_busy_leaves_no_residual_disabled_state() {
        assert!(effective_disabled(false, true));
        assert!(!effective_disabled(false, false));
    }

    #[test]
    fn busy_indicator_matches_the_button_glyph_size() {
        assert_eq!(ButtonSize::Sm.icon_size().px(), 16);
        assert_eq!(ButtonSize::Md.icon_size().px(), 16);
        assert_eq!(ButtonSize::Lg.icon_size().px(), 20);
    }
}
