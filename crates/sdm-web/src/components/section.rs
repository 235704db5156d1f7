use leptos::prelude::*;

/// Section component - full-width band with a centered heading, subtitle,
/// and anchor id the in-page navigation points at
#[component]
pub fn Section(
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
    /// Render on the alternating slate band
    #[prop(optional)]
    tinted: bool,
    children: Children,
) -> impl IntoView {
    let section_class = if tinted { "py-24 bg-slate-800/50" } else { "py-24" };

    view! {
        <section id=id class=section_class>
            <div class="container mx-auto px-4">
                <div class="max-w-4xl mx-auto">
                    <div class="text-center mb-16">
                        <h2 class="text-4xl font-bold mb-4">{title}</h2>
                        <p class="text-xl text-slate-400">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
        </section>
    }
}
