use gallery::{ButtonStories, FieldStories, FoundationStories, GalleryHome, IconStories};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Beacon Design System" />
        <Meta name="description" content="Component gallery for the Beacon presentational UI kit." />

        <Router>
            <div class="min-h-screen bg-white">
                <nav class="border-b border-neutral-200 px-8 py-4 flex items-center gap-6 font-sans text-sm text-neutral-700">
                    <A href="" class="font-medium text-neutral-900">"Beacon"</A>
                    <A href="/buttons">"Buttons"</A>
                    <A href="/icons">"Icons"</A>
                    <A href="/fields">"Fields"</A>
                    <A href="/foundations">"Foundations"</A>
                </nav>
                <main class="p-8">
                    <Routes>
                        <Route path="" view=GalleryHome />
                        <Route path="/buttons" view=ButtonStories />
                        <Route path="/icons" view=IconStories />
                        <Route path="/fields" view=FieldStories />
                        <Route path="/foundations" view=FoundationStories />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
