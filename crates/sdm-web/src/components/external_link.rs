use leptos::prelude::*;

/// Reusable external link button with consistent styling
#[component]
pub fn ExternalLink(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="inline-flex items-center gap-2 px-4 py-2 rounded-md text-slate-400 hover:text-white hover:bg-slate-800 transition-colors"
        >
            {label} " \u{2197}"
        </a>
    }
}
