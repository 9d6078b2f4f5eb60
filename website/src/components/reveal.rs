use juxin_core::Reveal;
use leptos::html::Div;
use leptos::prelude::*;

use crate::dom::use_reveal;

/// Wrapper that transitions its children in the first time it scrolls into
/// view.
#[component]
pub fn RevealOnView(
    transition: Reveal,
    /// Visible fraction required before revealing
    #[prop(default = 0.0)]
    threshold: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let revealed = use_reveal(node_ref, threshold);

    view! {
        <div node_ref=node_ref class=class style=move || transition.css(revealed.get())>
            {children()}
        </div>
    }
}

/// Eyebrow, title and subtitle of a section, fading in one after another
#[component]
pub fn SectionHeading(
    copy: juxin_core::SectionCopy,
    #[prop(default = 0)] step_ms: u32,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    view! {
        <div class=class>
            <RevealOnView transition=Reveal::fade()>
                <p class="uppercase tracking-[0.25em] text-xs text-indigo-300">{copy.eyebrow}</p>
            </RevealOnView>
            <RevealOnView transition=Reveal::rise(20.0).stagger(1, step_ms)>
                <h2 class="mt-3 text-3xl md:text-5xl font-bold">{copy.title}</h2>
            </RevealOnView>
            <RevealOnView transition=Reveal::fade().stagger(2, step_ms)>
                <p class="mt-4 text-gray-400 max-w-xl mx-auto">{copy.subtitle}</p>
            </RevealOnView>
        </div>
    }
}
