use leptos::*;

use crate::{Story, StoryPage};

const PRIMARY: &[(u16, &str)] = &[
    (50, "#eff6ff"),
    (100, "#dbeafe"),
    (200, "#bfdbfe"),
    (300, "#93c5fd"),
    (400, "#60a5fa"),
    (500, "#3b82f6"),
    (600, "#2563eb"),
    (700, "#1d4ed8"),
    (800, "#1e40af"),
    (900, "#1e3a8a"),
];

const SECONDARY: &[(u16, &str)] = &[
    (50, "#f8fafc"),
    (100, "#f1f5f9"),
    (200, "#e2e8f0"),
    (300, "#cbd5e1"),
    (400, "#94a3b8"),
    (500, "#64748b"),
    (600, "#475569"),
    (700, "#334155"),
    (800, "#1e293b"),
    (900, "#0f172a"),
];

const ACCENT: &[(u16, &str)] = &[
    (50, "#f0fdfa"),
    (100, "#ccfbf1"),
    (200, "#99f6e4"),
    (300, "#5eead4"),
    (400, "#2dd4bf"),
    (500, "#14b8a6"),
    (600, "#0d9488"),
    (700, "#0f766e"),
    (800, "#115e59"),
    (900, "#134e4a"),
];

const SUCCESS: &[(u16, &str)] = &[
    (100, "#dcfce7"),
    (300, "#86efac"),
    (500, "#22c55e"),
    (700, "#15803d"),
    (900, "#14532d"),
];

const ERROR: &[(u16, &str)] = &[
    (100, "#fee2e2"),
    (300, "#fca5a5"),
    (500, "#ef4444"),
    (700, "#b91c1c"),
    (900, "#7f1d1d"),
];

const WARNING: &[(u16, &str)] = &[
    (100, "#fef3c7"),
    (300, "#fcd34d"),
    (500, "#f59e0b"),
    (700, "#b45309"),
    (900, "#78350f"),
];

const INFO: &[(u16, &str)] = &[
    (100, "#e0f2fe"),
    (300, "#7dd3fc"),
    (500, "#0ea5e9"),
    (700, "#0369a1"),
    (900, "#0c4a6e"),
];

const TYPE_SCALE: &[(&str, &str, &str)] = &[
    ("text-display", "Display Text", "64px, Bold, -0.03em letter spacing"),
    ("text-heading-1", "Heading 1", "48px, Semibold, -0.03em letter spacing"),
    ("text-heading-2", "Heading 2", "40px, Semibold, -0.02em letter spacing"),
    ("text-heading-3", "Heading 3", "32px, Semibold, -0.02em letter spacing"),
    ("text-heading-4", "Heading 4", "28px, Semibold, -0.01em letter spacing"),
    ("text-heading-5", "Heading 5", "24px, Medium, -0.01em letter spacing"),
    ("text-heading-6", "Heading 6", "20px, Medium"),
    ("text-body", "Body text", "16px, Regular"),
    ("text-body-sm", "Small body text", "14px, Regular"),
    ("text-caption", "Caption text", "12px, Regular"),
];

const SPACING: &[(&str, u16)] = &[
    ("1", 4),
    ("2", 8),
    ("3", 12),
    ("4", 16),
    ("6", 24),
    ("8", 32),
    ("12", 48),
    ("16", 64),
];

fn swatch_row(name: &'static str, shades: &'static [(u16, &str)]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-heading-5 text-neutral-900 font-sans mb-4">{name}</h3>
            <div class="flex gap-2">
                {shades
                    .iter()
                    .map(|(shade, color)| {
                        view! {
                            <div class="text-center">
                                <div
                                    class="h-12 w-12 rounded border border-neutral-200 mx-auto mb-2"
                                    style=format!("background-color: {color}")
                                ></div>
                                <span class="text-caption font-sans text-neutral-600">{*shade}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
/// Color, typography, and spacing foundations behind the component set.
pub fn FoundationStories() -> impl IntoView {
    view! {
        <StoryPage
            title="Foundations"
            description="Color ramps, type scale, and spacing tokens the component classes \
                         resolve against."
        >
            <Story name="Colors">
                <div class="space-y-8">
                    {swatch_row("Primary", PRIMARY)}
                    {swatch_row("Secondary", SECONDARY)}
                    {swatch_row("Accent", ACCENT)}
                    <div class="grid grid-cols-2 gap-8">
                        {swatch_row("Success", SUCCESS)}
                        {swatch_row("Error", ERROR)}
                        {swatch_row("Warning", WARNING)}
                        {swatch_row("Info", INFO)}
                    </div>
                </div>
            </Story>

            <Story name="Typography">
                <div class="space-y-6">
                    {TYPE_SCALE
                        .iter()
                        .map(|(class, sample, meta)| {
                            view! {
                                <div>
                                    <p class=format!("{class} text-neutral-900 font-sans")>
                                        {*sample}
                                    </p>
                                    <p class="text-body-sm font-sans text-neutral-600 mt-1">
                                        {*meta}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Story>

            <Story name="Spacing">
                <div class="space-y-3">
                    {SPACING
                        .iter()
                        .map(|(token, px)| {
                            view! {
                                <div class="flex items-center gap-4">
                                    <span class="text-caption font-sans text-neutral-600 w-8">
                                        {*token}
                                    </span>
                                    <div
                                        class="h-4 bg-primary-500 rounded-sm"
                                        style=format!("width: {px}px")
                                    ></div>
                                    <span class="text-caption font-sans text-neutral-600">
                                        {format!("{px}px")}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Story>

            <Story name="Accessibility">
                <div class="space-y-4 max-w-2xl">
                    <p class="text-body font-sans text-neutral-700">
                        "Interactive components keep a visible focus ring (2px, offset for \
                         buttons, flush for fields), all color pairs meet WCAG 2.2 contrast \
                         requirements, and validation errors are announced through a polite \
                         live region rather than color alone."
                    </p>
                </div>
            </Story>
        </StoryPage>
    }
}
