//! Story catalog for the Beacon component kit.
//!
//! Each module renders one component family through every documented variant
//! and state so visual or accessibility changes can be reviewed on a live
//! surface. Interactive stories log their actions through `leptos::logging`
//! in place of an action panel.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;

mod button;
mod field;
mod foundations;
mod icon;

pub use button::ButtonStories;
pub use field::FieldStories;
pub use foundations::FoundationStories;
pub use icon::IconStories;

#[component]
/// Landing page linking the story families together.
pub fn GalleryHome() -> impl IntoView {
    view! {
        <div class="space-y-4 max-w-2xl">
            <h1 class="text-heading-1 text-neutral-900 font-sans">"Beacon Design System"</h1>
            <p class="text-body font-sans text-neutral-600">
                "A small set of accessible presentational primitives: buttons, icons, and \
                 form fields. Every component maps declarative options to utility classes \
                 and ARIA attributes; pick a family from the navigation to browse its \
                 variants and states."
            </p>
        </div>
    }
}

#[component]
/// Page scaffold for one story family.
pub(crate) fn StoryPage(
    title: &'static str,
    description: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="space-y-10 max-w-4xl">
            <div>
                <h1 class="text-heading-2 text-neutral-900 font-sans">{title}</h1>
                <p class="text-body font-sans text-neutral-600 mt-2">{description}</p>
            </div>
            {children()}
        </div>
    }
}

#[component]
/// One named story within a family page.
pub(crate) fn Story(name: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-heading-4 text-neutral-900 font-sans">{name}</h2>
            {children()}
        </section>
    }
}
