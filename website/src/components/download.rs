use juxin_core::{BadgeTone, PlatformEntry, Reveal, Section, SectionCopy};
use leptos::html::Div;
use leptos::prelude::*;

use super::icons::Icon;
use super::reveal::RevealOnView;
use crate::dom::use_reveal;

const CARD_STAGGER_MS: u32 = 100;

#[component]
pub fn Download(copy: SectionCopy, platforms: Vec<PlatformEntry>) -> impl IntoView {
    let grid = NodeRef::<Div>::new();
    let revealed = use_reveal(grid, 0.0);

    let cards = platforms
        .into_iter()
        .enumerate()
        .map(|(i, platform)| {
            let transition = Reveal::rise(30.0).stagger(i, CARD_STAGGER_MS);
            view! {
                <div style=move || transition.css(revealed.get())>
                    <PlatformCard platform=platform />
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Download.anchor_id()
            class="relative py-28 px-6 bg-gradient-to-b from-[#0d0f18] via-[#0b0d14] to-[#0b0d14]"
        >
            <div class="max-w-5xl mx-auto">
                <div class="relative rounded-[2rem] overflow-hidden border border-indigo-500/30 bg-gradient-to-br from-indigo-900/30 via-[#0f1020] to-purple-900/20 p-10 md:p-16 shadow-2xl">
                    // Decorative blobs
                    <div class="pointer-events-none absolute -top-20 -left-20 w-72 h-72 rounded-full bg-indigo-600/20 blur-3xl"></div>
                    <div class="pointer-events-none absolute -bottom-20 -right-20 w-64 h-64 rounded-full bg-purple-600/20 blur-3xl"></div>

                    <RevealOnView transition=Reveal::fade() class="relative">
                        <p class="uppercase tracking-[0.25em] text-xs text-indigo-300">{copy.eyebrow}</p>
                    </RevealOnView>
                    <RevealOnView transition=Reveal::rise(20.0) class="relative">
                        <h2 class="mt-3 text-3xl md:text-5xl font-bold">{copy.title}</h2>
                    </RevealOnView>
                    <RevealOnView transition=Reveal::fade() class="relative">
                        <p class="mt-4 text-gray-400 max-w-lg">{copy.subtitle}</p>
                    </RevealOnView>

                    // Platform cards
                    <div node_ref=grid class="relative mt-12 grid gap-6 sm:grid-cols-3">
                        {cards}
                    </div>

                    {copy.note.map(|note| view! {
                        <p class="relative mt-10 text-center text-gray-500 text-sm">{note}</p>
                    })}
                </div>
            </div>
        </section>
    }
}

/// One platform's availability. Unavailable platforms render inert.
#[component]
fn PlatformCard(platform: PlatformEntry) -> impl IntoView {
    let (icon_class, badge_class) = match platform.badge_tone() {
        BadgeTone::Success => (
            "w-12 h-12 text-indigo-400",
            "mt-2 text-sm px-3 py-1 rounded-full bg-green-500/20 text-green-300",
        ),
        BadgeTone::Pending => (
            "w-12 h-12 text-gray-500",
            "mt-2 text-sm px-3 py-1 rounded-full bg-yellow-500/20 text-yellow-300",
        ),
    };
    let navigation = platform.activate();

    let body = view! {
        <Icon kind=platform.icon class=icon_class />
        <span class="mt-4 text-xl font-semibold">{platform.name}</span>
        <span class=badge_class>{platform.badge}</span>
    };

    match navigation {
        Some(nav) => view! {
            <a
                href=nav.href
                target=nav.new_context.then_some("_blank")
                rel=nav.rel
                class="group flex flex-col items-center p-8 rounded-2xl border backdrop-blur-sm transition border-indigo-500/40 bg-indigo-500/10 hover:shadow-indigo-500/30 hover:shadow-xl hover:-translate-y-1.5 hover:scale-[1.03] cursor-pointer"
            >
                {body}
            </a>
        }
        .into_any(),
        None => view! {
            <div
                aria-disabled="true"
                class="group flex flex-col items-center p-8 rounded-2xl border backdrop-blur-sm transition border-white/10 bg-white/[0.02] opacity-60 cursor-not-allowed select-none"
            >
                {body}
            </div>
        }
        .into_any(),
    }
}
