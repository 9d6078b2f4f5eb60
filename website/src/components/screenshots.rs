use juxin_core::{Carousel, CarouselMessage, ScreenshotEntry, Section, SectionCopy};
use leptos::prelude::*;

use super::icons::{ChevronLeft, ChevronRight, Close};
use super::reveal::SectionHeading;

const ARROW_CLASS: &str = "absolute top-1/2 -translate-y-1/2 w-12 h-12 flex items-center justify-center rounded-full bg-black/50 hover:bg-black/70 transition";

#[component]
pub fn Screenshots(copy: SectionCopy, screenshots: Vec<ScreenshotEntry>) -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(screenshots.len()));
    let active = Memo::new(move |_| carousel.with(|c| c.active()));
    let lightbox = Memo::new(move |_| carousel.with(|c| c.lightbox()));
    let send = move |message: CarouselMessage| carousel.update(|c| c.update(message));

    let shots = StoredValue::new(screenshots);
    let shot_at = move |index: usize| shots.with_value(|s| s.get(index).cloned());

    let thumbnails = shots
        .get_value()
        .into_iter()
        .enumerate()
        .map(|(i, shot)| {
            view! {
                <button
                    on:click=move |_| send(CarouselMessage::SelectThumbnail(i))
                    class=move || {
                        if active.get() == i {
                            "w-20 h-14 rounded-lg overflow-hidden border-2 transition border-indigo-500 scale-105"
                        } else {
                            "w-20 h-14 rounded-lg overflow-hidden border-2 transition border-transparent opacity-60 hover:opacity-100"
                        }
                    }
                >
                    <img src=shot.src alt=shot.caption class="w-full h-full object-cover" />
                </button>
            }
        })
        .collect_view();

    view! {
        <section
            id=Section::Screenshots.anchor_id()
            class="relative py-28 px-6 bg-gradient-to-b from-[#0d0f18] via-[#0b0d14] to-[#0d0f18]"
        >
            <SectionHeading copy=copy class="max-w-6xl mx-auto text-center" />

            // Main Carousel
            <div class="relative mt-14 max-w-5xl mx-auto">
                // Re-rendered per index so the entry animation replays
                {move || {
                    shot_at(active.get()).map(|shot| {
                        view! {
                            <div
                                class="relative rounded-3xl overflow-hidden border border-white/10 bg-white/[0.02] p-2 shadow-2xl cursor-pointer animate-pop-in"
                                on:click=move |_| send(CarouselMessage::OpenLightbox)
                            >
                                <img src=shot.src alt=shot.caption.clone() class="w-full rounded-2xl" />
                                <div class="absolute bottom-4 left-4 px-4 py-2 rounded-full bg-black/60 backdrop-blur text-sm">
                                    {shot.caption}
                                </div>
                            </div>
                        }
                    })
                }}

                // Arrows
                <button
                    on:click=move |_| send(CarouselMessage::Previous)
                    class=format!("left-2 {ARROW_CLASS}")
                    aria-label="上一张"
                >
                    <ChevronLeft class="w-6 h-6" />
                </button>
                <button
                    on:click=move |_| send(CarouselMessage::Next)
                    class=format!("right-2 {ARROW_CLASS}")
                    aria-label="下一张"
                >
                    <ChevronRight class="w-6 h-6" />
                </button>
            </div>

            // Thumbnails
            <div class="mt-8 flex justify-center gap-3 flex-wrap">{thumbnails}</div>

            // Lightbox
            {move || {
                lightbox.get().and_then(shot_at).map(|shot| {
                    view! {
                        <div
                            class="fixed inset-0 z-50 flex items-center justify-center bg-black/90 backdrop-blur-sm p-4 animate-fade-in"
                            on:click=move |_| send(CarouselMessage::CloseLightbox)
                        >
                            <button
                                class="absolute top-6 right-6 w-10 h-10 flex items-center justify-center rounded-full bg-white/10 hover:bg-white/20 transition"
                                aria-label="关闭"
                            >
                                <Close class="w-6 h-6" />
                            </button>
                            <img
                                src=shot.src
                                alt=shot.caption
                                class="max-w-full max-h-[90vh] rounded-2xl shadow-2xl animate-pop-in"
                                on:click=|ev| ev.stop_propagation()
                            />
                        </div>
                    }
                })
            }}
        </section>
    }
}
