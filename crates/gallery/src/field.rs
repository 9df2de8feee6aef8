use beacon_ui::prelude::*;
use leptos::*;

use crate::{Story, StoryPage};

#[component]
/// Text field and text area variants, validation states, and wiring demos.
pub fn FieldStories() -> impl IntoView {
    let show_password = create_rw_signal(false);
    let email = create_rw_signal(String::new());

    view! {
        <StoryPage
            title="Fields"
            description="Single-line and multi-line fields with labels, validation states, \
                         icons, and helper text. Helper and error elements are associated \
                         with the control through generated ids."
        >
            <Story name="Basics">
                <div class="space-y-6 max-w-md">
                    <TextField
                        label="Email address"
                        placeholder="Enter your email"
                        input_type="email"
                    />
                    <TextField
                        label="Username"
                        placeholder="Pick a username"
                        helper_text="Lowercase letters and digits only."
                    />
                    <TextField label="Full name" placeholder="First and last name" required=true />
                </div>
            </Story>

            <Story name="Sizes">
                <div class="space-y-6 max-w-md">
                    <TextField label="Small" size=FieldSize::Sm placeholder="Small input" />
                    <TextField label="Medium" size=FieldSize::Md placeholder="Medium input" />
                    <TextField label="Large" size=FieldSize::Lg placeholder="Large input" />
                </div>
            </Story>

            <Story name="Validation states">
                <div class="space-y-6 max-w-md">
                    <TextField
                        label="Default"
                        variant=FieldVariant::Default
                        helper_text="Neutral state."
                    />
                    <TextField
                        label="Warning"
                        variant=FieldVariant::Warning
                        helper_text="Double-check this value."
                    />
                    <TextField
                        label="Success"
                        variant=FieldVariant::Success
                        helper_text="Looks good."
                    />
                    <TextField
                        label="Error overrides everything"
                        variant=FieldVariant::Success
                        helper_text="This helper is suppressed while the error shows."
                        error_message="This field is required."
                    />
                </div>
            </Story>

            <Story name="With icons">
                <div class="space-y-6 max-w-md">
                    <TextField label="Search" icon=IconName::Search placeholder="Search..." />
                    <TextField
                        label="Email"
                        icon=IconName::Mail
                        input_type="email"
                        placeholder="you@example.com"
                    />
                    <TextField
                        label="Amount"
                        icon=IconName::Info
                        icon_position=IconPosition::Right
                        helper_text="Glyphs inside fields are decorative."
                    />
                    <div class="space-y-2">
                        {move || {
                            let visible = show_password.get();
                            view! {
                                <TextField
                                    id="password-demo"
                                    label="Password"
                                    input_type=if visible { "text" } else { "password" }
                                    icon=if visible { IconName::EyeOff } else { IconName::Eye }
                                    icon_position=IconPosition::Right
                                    helper_text="At least 12 characters."
                                />
                            }
                        }}
                        <Button
                            variant=ButtonVariant::Secondary
                            size=ButtonSize::Sm
                            on_click=Callback::new(move |_| {
                                show_password.update(|visible| *visible = !*visible);
                            })
                        >
                            {move || if show_password.get() { "Hide password" } else { "Show password" }}
                        </Button>
                    </div>
                </div>
            </Story>

            <Story name="Live validation">
                <div class="space-y-2 max-w-md">
                    <TextField
                        id="live-email"
                        label="Email"
                        input_type="email"
                        placeholder="you@example.com"
                        helper_text="Errors appear as soon as the value stops looking like an address."
                        error_message=Signal::derive(move || {
                            let value = email.get();
                            (!value.is_empty() && !value.contains('@'))
                                .then(|| "Enter a valid email address.".to_string())
                        })
                        value=email
                        on_input=Callback::new(move |ev| {
                            email.set(event_target_value(&ev));
                        })
                    />
                </div>
            </Story>

            <Story name="Disabled">
                <div class="space-y-6 max-w-md">
                    <TextField
                        label="Disabled"
                        disabled=true
                        value="Read-only content".to_string()
                    />
                    <TextField
                        label="Disabled with icon"
                        icon=IconName::User
                        disabled=true
                        placeholder="Unavailable"
                    />
                </div>
            </Story>

            <Story name="Text area">
                <div class="space-y-6 max-w-md">
                    <TextArea
                        label="Description"
                        placeholder="Tell us more..."
                        helper_text="A few sentences is plenty."
                    />
                    <TextArea
                        label="Fixed size"
                        resize=TextResize::None
                        rows=3
                        placeholder="This one cannot be resized"
                    />
                    <TextArea
                        label="Feedback"
                        variant=FieldVariant::Success
                        error_message="Feedback cannot be empty."
                        helper_text="Suppressed while the error shows."
                    />
                </div>
            </Story>
        </StoryPage>
    }
}
