use juxin_core::{copyright_line, current_year, NavCopy, Section, SiteInfo};
use leptos::prelude::*;

#[component]
pub fn Footer(site: SiteInfo, copy: NavCopy) -> impl IntoView {
    let links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <a href=section.fragment() class="hover:text-white transition">
                    {copy.label(section).to_string()}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="mt-auto border-t border-white/10 bg-[#08090f]">
            <div class="max-w-6xl mx-auto px-6 py-12 flex flex-col md:flex-row items-center justify-between gap-6">
                <div class="flex items-center gap-3">
                    <img src=site.icon alt=site.icon_alt class="w-10 h-10 rounded-xl" />
                    <div>
                        <div class="font-bold">{site.name}</div>
                        <div class="text-xs text-gray-500">{site.footer_tagline}</div>
                    </div>
                </div>

                <div class="flex gap-6 text-sm text-gray-400">{links}</div>

                <div class="text-xs text-gray-600">
                    {copyright_line(&site.short_name, current_year())}
                </div>
            </div>
        </footer>
    }
}
