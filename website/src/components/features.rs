use juxin_core::{FeatureEntry, Reveal, Section, SectionCopy};
use leptos::html::Div;
use leptos::prelude::*;

use super::icons::Icon;
use super::reveal::SectionHeading;
use crate::dom::use_reveal;

/// Grid reveals once this fraction of it is on screen
const GRID_THRESHOLD: f64 = 0.3;
const CARD_STAGGER_MS: u32 = 150;

#[component]
pub fn Features(copy: SectionCopy, features: Vec<FeatureEntry>) -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let revealed = use_reveal(grid, GRID_THRESHOLD);

    let cards = features
        .into_iter()
        .enumerate()
        .map(|(i, feature)| {
            let transition = Reveal::rise(40.0).stagger(i, CARD_STAGGER_MS);
            let glow = format!(
                "absolute -inset-1 rounded-3xl bg-gradient-to-br {} opacity-0 group-hover:opacity-20 blur-xl transition-opacity duration-500",
                feature.gradient
            );
            let badge = format!(
                "relative z-10 w-14 h-14 flex items-center justify-center rounded-2xl bg-gradient-to-br {} shadow-lg",
                feature.gradient
            );

            view! {
                <div style=move || transition.css(revealed.get())>
                    <article class="group relative h-full p-6 rounded-3xl border border-white/10 bg-white/[0.02] backdrop-blur-sm overflow-hidden hover:-translate-y-2 hover:scale-[1.02] transition-transform">
                        // Gradient glow on hover
                        <div class=glow></div>
                        <div class=badge>
                            <Icon kind=feature.icon class="w-7 h-7 text-white" />
                        </div>
                        <h3 class="relative z-10 mt-5 text-xl font-semibold">{feature.title}</h3>
                        <p class="relative z-10 mt-2 text-gray-400 text-sm leading-relaxed">
                            {feature.description}
                        </p>
                    </article>
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Features.anchor_id()
            class="relative py-28 px-6 bg-gradient-to-b from-transparent via-[#0d0f18] to-transparent"
        >
            <SectionHeading copy=copy step_ms=100 class="max-w-6xl mx-auto text-center" />

            <div
                node_ref=grid
                class="mt-16 max-w-6xl mx-auto grid gap-6 sm:grid-cols-2 lg:grid-cols-4"
            >
                {cards}
            </div>
        </section>
    }
}
