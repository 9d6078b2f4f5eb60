pub mod components;
pub mod dom;
pub mod logging;

use components::download::Download;
use components::features::Features;
use components::footer::Footer;
use components::hero::Hero;
use components::navbar::Navbar;
use components::screenshots::Screenshots;
use dom::AnchorRef;
use juxin_core::{AnchorPoints, Section, SiteContent};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

#[component]
pub fn App(content: SiteContent) -> impl IntoView {
    provide_meta_context();

    let SiteContent {
        site,
        nav,
        hero,
        sections,
        features,
        screenshots,
        platforms,
    } = content;

    let anchors = AnchorPoints::new(AnchorRef::new(), AnchorRef::new(), AnchorRef::new());
    let jump = move |section: Section| {
        Callback::new(move |_: ()| {
            anchors.scroll_to(section);
        })
    };

    view! {
        <Title text=site.name.clone() />
        <Meta name="description" content=site.description.clone() />

        <div class="relative min-h-screen flex flex-col bg-[#0b0d14] text-white font-sans overflow-x-hidden selection:bg-indigo-500/30">
            // Background blobs
            <div class="pointer-events-none fixed inset-0 -z-10 overflow-hidden">
                <div class="absolute -top-40 -left-40 w-[36rem] h-[36rem] rounded-full bg-indigo-600/20 blur-3xl animate-pulse-slow"></div>
                <div class="absolute top-1/3 -right-40 w-[32rem] h-[32rem] rounded-full bg-purple-600/20 blur-3xl animate-pulse-slow"></div>
            </div>

            <Navbar
                site=site.clone()
                copy=nav.clone()
                on_features_click=jump(Section::Features)
                on_screenshots_click=jump(Section::Screenshots)
                on_download_click=jump(Section::Download)
            />

            <main class="flex-1">
                <Hero
                    copy=hero
                    platforms=platforms.clone()
                    on_download_click=jump(Section::Download)
                />
                <div node_ref=anchors.features.0>
                    <Features copy=sections.features features=features />
                </div>
                <div node_ref=anchors.screenshots.0>
                    <Screenshots copy=sections.screenshots screenshots=screenshots />
                </div>
                <div node_ref=anchors.download.0>
                    <Download copy=sections.download platforms=platforms />
                </div>
            </main>

            <Footer site=site copy=nav />
        </div>
    }
}

/// Shown when the embedded page content fails to load
#[component]
pub fn ContentUnavailable() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-[#0b0d14] text-gray-400">
            <p>"页面内容加载失败，请稍后重试。"</p>
        </div>
    }
}
