//! Inline SVG icons (Lucide outlines)

use juxin_core::IconKind;
use leptos::prelude::*;

macro_rules! lucide_icon {
    ($name:ident { $($body:tt)* }) => {
        #[component]
        pub fn $name(#[prop(into, optional)] class: String) -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    class=class
                >
                    $($body)*
                </svg>
            }
        }
    };
}

lucide_icon!(MessageCircle {
    <path d="M7.9 20A9 9 0 1 0 4 16.1L2 22Z" />
});

lucide_icon!(Users {
    <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
    <circle cx="9" cy="7" r="4" />
    <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
    <path d="M16 3.13a4 4 0 0 1 0 7.75" />
});

lucide_icon!(BotMessageSquare {
    <path d="M12 6V2H8" />
    <path d="m8 18-4 4V8a2 2 0 0 1 2-2h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2Z" />
    <path d="M2 12h2" />
    <path d="M9 11v2" />
    <path d="M15 11v2" />
    <path d="M20 12h2" />
});

lucide_icon!(Zap {
    <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
});

lucide_icon!(Monitor {
    <rect width="20" height="14" x="2" y="3" rx="2" />
    <line x1="8" x2="16" y1="21" y2="21" />
    <line x1="12" x2="12" y1="17" y2="21" />
});

lucide_icon!(Apple {
    <path d="M12 20.94c1.5 0 2.75 1.06 4 1.06 3 0 6-8 6-12.22A4.91 4.91 0 0 0 17 5c-2.22 0-4 1.44-5 2-1-.56-2.78-2-5-2a4.9 4.9 0 0 0-5 4.78C2 14 5 22 8 22c1.25 0 2.5-1.06 4-1.06Z" />
    <path d="M10 2c1 .5 2 2 2 5" />
});

lucide_icon!(Terminal {
    <polyline points="4 17 10 11 4 5" />
    <line x1="12" x2="20" y1="19" y2="19" />
});

lucide_icon!(ChevronLeft {
    <path d="m15 18-6-6 6-6" />
});

lucide_icon!(ChevronRight {
    <path d="m9 18 6-6-6-6" />
});

lucide_icon!(ChevronDown {
    <path d="m6 9 6 6 6-6" />
});

lucide_icon!(Close {
    <path d="M18 6 6 18" />
    <path d="m6 6 12 12" />
});

/// Icon named by site content
#[component]
pub fn Icon(kind: IconKind, #[prop(into, optional)] class: String) -> impl IntoView {
    match kind {
        IconKind::MessageCircle => view! { <MessageCircle class=class /> }.into_any(),
        IconKind::Users => view! { <Users class=class /> }.into_any(),
        IconKind::Bot => view! { <BotMessageSquare class=class /> }.into_any(),
        IconKind::Zap => view! { <Zap class=class /> }.into_any(),
        IconKind::Monitor => view! { <Monitor class=class /> }.into_any(),
        IconKind::Apple => view! { <Apple class=class /> }.into_any(),
        IconKind::Terminal => view! { <Terminal class=class /> }.into_any(),
    }
}
