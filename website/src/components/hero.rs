use juxin_core::{BadgeTone, HeroCopy, PlatformEntry};
use leptos::prelude::*;

use super::icons::ChevronDown;

#[component]
pub fn Hero(
    copy: HeroCopy,
    platforms: Vec<PlatformEntry>,
    on_download_click: Callback<()>,
) -> impl IntoView {
    let headline = copy
        .headline
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            view! {
                {(i > 0).then(|| view! { <br /> })}
                {line}
            }
        })
        .collect_view();

    let badges = platforms
        .iter()
        .map(|platform| {
            let class = match platform.badge_tone() {
                BadgeTone::Success => {
                    "px-4 py-1.5 rounded-full border border-green-400/40 bg-green-400/10 text-green-300"
                }
                BadgeTone::Pending => {
                    "px-4 py-1.5 rounded-full border border-yellow-400/40 bg-yellow-400/10 text-yellow-300"
                }
            };
            view! { <span class=class>{platform.hero_label()}</span> }
        })
        .collect_view();

    view! {
        <section class="relative min-h-screen flex flex-col items-center justify-center px-6 pt-24 pb-12 overflow-hidden">
            // Floating decorative elements
            <div class="absolute top-1/4 left-[10%] w-20 h-20 rounded-2xl bg-gradient-to-br from-indigo-500/30 to-purple-500/20 blur-xl animate-float"></div>
            <div class="absolute bottom-1/4 right-[12%] w-28 h-28 rounded-full bg-gradient-to-tr from-cyan-500/25 to-teal-400/15 blur-xl animate-float-reverse"></div>

            <div class="text-center max-w-4xl animate-rise-in">
                <p class="uppercase tracking-[0.3em] text-xs md:text-sm text-indigo-300 mb-4">
                    {copy.eyebrow}
                </p>
                <h1 class="text-4xl md:text-6xl lg:text-7xl font-extrabold leading-tight bg-gradient-to-r from-white via-indigo-100 to-purple-200 bg-clip-text text-transparent">
                    {headline}
                </h1>
                <p class="mt-6 text-base md:text-lg text-gray-400 max-w-2xl mx-auto">
                    {copy.lede}
                </p>

                // CTA buttons
                <div class="mt-10 flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        on:click=move |_| on_download_click.run(())
                        class="px-8 py-4 rounded-full bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold text-lg shadow-xl hover:shadow-indigo-500/50 hover:scale-105 active:scale-95 transition"
                    >
                        {copy.primary_cta}
                    </button>
                    <a
                        href=copy.secondary_href
                        class="px-8 py-4 rounded-full border border-white/20 text-white/80 hover:bg-white/5 hover:scale-[1.03] transition"
                    >
                        {copy.secondary_cta}
                    </a>
                </div>

                // Platform badges
                <div class="mt-8 flex flex-wrap justify-center gap-3 text-sm">
                    {badges}
                </div>
            </div>

            // Hero image
            <div class="mt-16 w-full max-w-5xl px-4 animate-rise-in-late">
                <div class="relative rounded-3xl overflow-hidden border border-white/10 bg-gradient-to-b from-white/5 to-transparent p-2 shadow-2xl">
                    <img src=copy.image alt=copy.image_alt class="w-full rounded-2xl" />
                    // Glare overlay
                    <div class="absolute inset-0 bg-gradient-to-br from-white/10 via-transparent to-transparent pointer-events-none rounded-2xl"></div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 text-gray-500 animate-bounce-slow">
                <ChevronDown class="w-7 h-7" />
            </div>
        </section>
    }
}
