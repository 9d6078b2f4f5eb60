//! `web-sys` implementations of the core browser capabilities

use std::cell::RefCell;
use std::rc::Rc;

use juxin_core::observe::is_visible;
use juxin_core::{ScrollSource, ScrollTarget, Subscription, VisibilitySource};
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};

/// The browser window's vertical scroll position
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn subscribe(&self, on_scroll: Box<dyn FnMut(f64)>) -> Subscription {
        let on_scroll = RefCell::new(on_scroll);
        let source = *self;
        let handle = window_event_listener(ev::scroll, move |_| {
            (on_scroll.borrow_mut())(source.offset());
        });
        Subscription::new(move || handle.remove())
    }
}

/// Viewport intersection of one element, via `IntersectionObserver`
pub struct ElementVisibility(pub web_sys::Element);

impl VisibilitySource for ElementVisibility {
    fn observe(&self, threshold: f64, on_change: Box<dyn FnMut(bool)>) -> Subscription {
        let on_change = Rc::new(RefCell::new(on_change));

        let notify = Rc::clone(&on_change);
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let visible =
                        is_visible(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                    (notify.borrow_mut())(visible);
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => {
                observer.observe(&self.0);
                Subscription::new(move || {
                    observer.disconnect();
                    drop(callback);
                })
            }
            Err(err) => {
                log::warn!("IntersectionObserver unavailable ({err:?}), showing element");
                (on_change.borrow_mut())(true);
                Subscription::noop()
            }
        }
    }
}

/// A page anchor element, scrolled to smoothly
#[derive(Clone, Copy)]
pub struct AnchorRef(pub NodeRef<Div>);

impl AnchorRef {
    pub fn new() -> Self {
        Self(NodeRef::new())
    }
}

impl Default for AnchorRef {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTarget for AnchorRef {
    fn scroll_into_view(&self) -> bool {
        let Some(element) = self.0.get_untracked() else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Latch "revealed" once `target` scrolls into view.
///
/// The observer is attached when the element mounts and released when the
/// calling component is disposed.
pub fn use_reveal(target: NodeRef<Div>, threshold: f64) -> Signal<bool> {
    let latch = RwSignal::new(juxin_core::RevealLatch::default());
    let subscription = StoredValue::new_local(None::<Subscription>);

    Effect::new(move |_| {
        let Some(element) = target.get() else {
            return;
        };
        if subscription.with_value(Option::is_some) {
            return;
        }
        let source = ElementVisibility(element.into());
        let sub = source.observe(
            threshold,
            Box::new(move |visible| {
                if visible && !latch.get_untracked().revealed() {
                    latch.update(|l| {
                        l.observe(true);
                    });
                }
            }),
        );
        subscription.set_value(Some(sub));
    });

    on_cleanup(move || {
        subscription.try_update_value(|s| drop(s.take()));
    });

    Signal::derive(move || latch.get().revealed())
}
