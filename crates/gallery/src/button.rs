use beacon_ui::prelude::*;
use leptos::*;

use crate::{Story, StoryPage};

#[component]
/// Button variants, sizes, icon placements, and states.
pub fn ButtonStories() -> impl IntoView {
    let loading = create_rw_signal(false);

    view! {
        <StoryPage
            title="Button"
            description="Accessible button component with multiple variants, sizes, and states."
        >
            <Story name="Variants">
                <div class="flex items-center gap-4">
                    <Button variant=ButtonVariant::Primary>"Primary Button"</Button>
                    <Button variant=ButtonVariant::Secondary>"Secondary Button"</Button>
                    <Button variant=ButtonVariant::Destructive>"Delete Item"</Button>
                    <Button variant=ButtonVariant::Ghost>"Ghost Button"</Button>
                </div>
            </Story>

            <Story name="Sizes">
                <div class="flex items-center gap-4">
                    <Button size=ButtonSize::Sm>"Small"</Button>
                    <Button size=ButtonSize::Md>"Medium"</Button>
                    <Button size=ButtonSize::Lg>"Large"</Button>
                </div>
            </Story>

            <Story name="With icons">
                <div class="space-y-4">
                    <div class="flex items-center gap-4">
                        <Button icon=IconName::Search>"Search"</Button>
                        <Button icon=IconName::Plus>"Add Item"</Button>
                        <Button icon=IconName::Download icon_position=IconPosition::Right>
                            "Download"
                        </Button>
                    </div>
                    <div class="flex items-center gap-4">
                        <Button variant=ButtonVariant::Secondary icon=IconName::Search>
                            "Search"
                        </Button>
                        <Button variant=ButtonVariant::Destructive icon=IconName::Trash>
                            "Delete"
                        </Button>
                        <Button variant=ButtonVariant::Ghost icon=IconName::Plus>"Add"</Button>
                    </div>
                </div>
            </Story>

            <Story name="States">
                <div class="space-y-4">
                    <div class="flex items-center gap-4">
                        <Button on_click=Callback::new(move |_| {
                            logging::log!("button action: default clicked");
                        })>
                            "Default"
                        </Button>
                        <Button disabled=true>"Disabled"</Button>
                        <Button is_loading=true>"Loading"</Button>
                    </div>
                    <div class="flex items-center gap-4">
                        <Button
                            icon=IconName::Download
                            is_loading=loading
                            on_click=Callback::new(move |_| {
                                logging::log!("button action: download requested");
                            })
                        >
                            "Download report"
                        </Button>
                        <Button
                            variant=ButtonVariant::Secondary
                            on_click=Callback::new(move |_| {
                                loading.update(|busy| *busy = !*busy);
                            })
                        >
                            {move || if loading.get() { "Finish loading" } else { "Start loading" }}
                        </Button>
                    </div>
                </div>
            </Story>

            <Story name="Accessibility">
                <div class="space-y-4">
                    <div class="flex items-center gap-4">
                        <Button icon=IconName::Plus aria_label="Add a new item to the list">
                            "Add"
                        </Button>
                        <Button variant=ButtonVariant::Destructive icon=IconName::Trash>
                            "Delete selection"
                        </Button>
                    </div>
                    <p class="text-body-sm font-sans text-neutral-600">
                        "Glyphs inside buttons are always decorative; the accessible name comes \
                         from the button text or an explicit aria-label. A busy button is \
                         removed from the tab order via the disabled attribute and announces \
                         its fixed status text."
                    </p>
                </div>
            </Story>
        </StoryPage>
    }
}
