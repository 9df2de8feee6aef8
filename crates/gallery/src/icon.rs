use beacon_ui::prelude::*;
use leptos::*;

use crate::{Story, StoryPage};

#[component]
/// Icon sizes, accessibility modes, and the full glyph set.
pub fn IconStories() -> impl IntoView {
    view! {
        <StoryPage
            title="Icon"
            description="Inline SVG glyphs with comprehensive ARIA support: decorative glyphs \
                         are hidden outright, and unlabeled glyphs are hidden by default \
                         instead of exposing an empty name."
        >
            <Story name="Sizes">
                <div class="flex items-end gap-6">
                    <Icon icon=IconName::Heart size=IconSize::Xs title="Extra small" />
                    <Icon icon=IconName::Heart size=IconSize::Sm title="Small" />
                    <Icon icon=IconName::Heart size=IconSize::Md title="Medium" />
                    <Icon icon=IconName::Heart size=IconSize::Lg title="Large" />
                    <Icon icon=IconName::Heart size=IconSize::Xl title="Extra large" />
                    <Icon icon=IconName::Heart size=IconSize::Px(48) title="Custom 48px" />
                </div>
            </Story>

            <Story name="Labeled, decorative, and unlabeled">
                <div class="space-y-4">
                    <div class="flex items-center gap-2">
                        <Icon icon=IconName::Star title="Favorite" />
                        <span class="text-body font-sans">"Exposed with its title as the name"</span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon icon=IconName::Star aria_hidden=true title="Favorite" />
                        <span class="text-body font-sans">
                            "Decorative next to text; the title is discarded"
                        </span>
                    </div>
                    <div class="flex items-center gap-2">
                        <Icon icon=IconName::Star />
                        <span class="text-body font-sans">
                            "No label and no decorative flag; hidden by default"
                        </span>
                    </div>
                </div>
            </Story>

            <Story name="Status icons">
                <div class="flex items-center gap-6">
                    <span class="text-success-700">
                        <Icon icon=IconName::Check aria_label="Success" />
                    </span>
                    <span class="text-warning-700">
                        <Icon icon=IconName::Warning aria_label="Warning" />
                    </span>
                    <span class="text-info-700">
                        <Icon icon=IconName::Info aria_label="Information" />
                    </span>
                    <span class="text-error-700">
                        <Icon icon=IconName::Dismiss aria_label="Error" />
                    </span>
                </div>
            </Story>

            <Story name="Navigation icons">
                <div class="flex items-center gap-6">
                    <Icon icon=IconName::ChevronLeft aria_label="Previous page" />
                    <Icon icon=IconName::Home aria_label="Home" />
                    <Icon icon=IconName::ChevronRight aria_label="Next page" />
                </div>
            </Story>

            <Story name="Gallery">
                <div class="grid grid-cols-6 gap-6">
                    {IconName::ALL
                        .iter()
                        .map(|icon| {
                            view! {
                                <div class="flex flex-col items-center gap-2">
                                    <Icon icon=*icon size=IconSize::Lg title=icon.name() />
                                    <span class="text-caption font-sans text-neutral-600">
                                        {icon.name()}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Story>
        </StoryPage>
    }
}
