use juxin_core::SiteContent;
use juxin_website::{logging, App, ContentUnavailable};
use leptos::prelude::*;

fn main() {
    let content = SiteContent::embedded();

    let level = content
        .as_ref()
        .map(|c| c.site.log_level.as_str())
        .unwrap_or("info");
    if let Err(e) = logging::init(level) {
        web_sys::console::error_1(&e.to_string().into());
    }

    match content {
        Ok(content) => {
            mount_to_body(move || view! { <App content=content /> });
        }
        Err(e) => {
            log::error!("{e}");
            mount_to_body(ContentUnavailable);
        }
    }
}
