use juxin_core::{NavCopy, NavMessage, NavState, ScrollSource, Section, SiteInfo, Subscription};
use leptos::prelude::*;

use crate::dom::WindowScroll;

const LINK_CLASS: &str = "hover:text-white transition";
const CTA_CLASS: &str = "px-5 py-2 rounded-full bg-gradient-to-r from-indigo-600 to-purple-600 text-white font-semibold shadow-lg hover:shadow-indigo-500/40 hover:scale-105 active:scale-95 transition";

#[component]
pub fn Navbar(
    site: SiteInfo,
    copy: NavCopy,
    on_features_click: Callback<()>,
    on_screenshots_click: Callback<()>,
    on_download_click: Callback<()>,
) -> impl IntoView {
    let nav = RwSignal::new(NavState::new(site.scroll_threshold_px));

    // Track the window scroll offset while mounted
    let scroll = WindowScroll;
    nav.update(|n| {
        n.on_scroll(scroll.offset());
    });
    let listener = scroll.subscribe(Box::new(move |offset| {
        nav.update(|n| {
            n.update(NavMessage::Scrolled(offset));
        });
    }));
    let listener = StoredValue::new_local(Some(listener));
    on_cleanup(move || {
        listener.try_update_value(|l: &mut Option<Subscription>| drop(l.take()));
    });

    let scrolled = Memo::new(move |_| nav.with(|n| n.scrolled()));
    let menu_open = Memo::new(move |_| nav.with(|n| n.menu_open()));

    let callback_for = move |section: Section| match section {
        Section::Features => on_features_click,
        Section::Screenshots => on_screenshots_click,
        Section::Download => on_download_click,
    };
    let dispatch = move |message: NavMessage| {
        let mut target = None;
        nav.update(|n| target = n.update(message));
        if let Some(section) = target {
            callback_for(section).run(());
        }
    };

    let copy = StoredValue::new(copy);
    let label = move |section: Section| copy.with_value(|c| c.label(section).to_string());
    let cta = move || copy.with_value(|c| c.cta.clone());

    view! {
        <header class=move || {
            let backdrop = if scrolled.get() {
                "bg-[#0b0d14]/80 backdrop-blur-lg shadow-lg"
            } else {
                "bg-transparent"
            };
            format!("fixed top-0 left-0 w-full z-50 transition-all duration-300 animate-slide-down {backdrop}")
        }>
            <nav class="max-w-7xl mx-auto px-6 py-4 flex items-center justify-between">
                // Brand
                <a href="#" class="flex items-center gap-3 group">
                    <img
                        src=site.icon
                        alt=site.icon_alt
                        class="w-10 h-10 rounded-xl shadow-md group-hover:scale-105 transition-transform"
                    />
                    <div>
                        <div class="font-bold text-lg tracking-tight">{site.name}</div>
                        <div class="text-xs text-gray-400">{site.tagline}</div>
                    </div>
                </a>

                // Desktop Links
                <div class="hidden md:flex items-center gap-8 text-sm font-medium text-gray-300">
                    {Section::ALL
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| dispatch(NavMessage::DesktopLink(section))
                                    class=LINK_CLASS
                                >
                                    {label(section)}
                                </button>
                            }
                        })
                        .collect_view()}
                    <button
                        on:click=move |_| dispatch(NavMessage::DesktopLink(Section::Download))
                        class=format!("ml-4 {CTA_CLASS}")
                    >
                        {cta()}
                    </button>
                </div>

                // Mobile Hamburger
                <button
                    class="md:hidden flex flex-col gap-1.5"
                    on:click=move |_| dispatch(NavMessage::ToggleMenu)
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                >
                    <span class=move || {
                        if menu_open.get() {
                            "block w-6 h-0.5 bg-white transition-transform rotate-45 translate-y-2"
                        } else {
                            "block w-6 h-0.5 bg-white transition-transform"
                        }
                    }></span>
                    <span class=move || {
                        if menu_open.get() {
                            "block w-6 h-0.5 bg-white transition-opacity opacity-0"
                        } else {
                            "block w-6 h-0.5 bg-white transition-opacity"
                        }
                    }></span>
                    <span class=move || {
                        if menu_open.get() {
                            "block w-6 h-0.5 bg-white transition-transform -rotate-45 -translate-y-2"
                        } else {
                            "block w-6 h-0.5 bg-white transition-transform"
                        }
                    }></span>
                </button>
            </nav>

            // Mobile Menu
            <Show when=move || menu_open.get()>
                <div class="md:hidden bg-[#0b0d14]/95 backdrop-blur-lg overflow-hidden animate-expand">
                    <div class="flex flex-col items-center gap-6 py-6 text-lg font-medium">
                        {Section::ALL
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button on:click=move |_| dispatch(NavMessage::MobileLink(section))>
                                        {label(section)}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            on:click=move |_| dispatch(NavMessage::MobileLink(Section::Download))
                            class="px-6 py-3 rounded-full bg-gradient-to-r from-indigo-600 to-purple-600 font-semibold shadow-lg active:scale-95 transition"
                        >
                            {cta()}
                        </button>
                    </div>
                </div>
            </Show>
        </header>
    }
}
