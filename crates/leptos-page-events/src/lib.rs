//! Leptos Page Events
//!
//! Event wiring for enhancing server-rendered pages from a Leptos component.
//! Listeners, intervals and other teardown work are collected in a
//! [`Subscriptions`] registry owned by the component that created them, and are
//! released when that component is disposed.

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement};

/// Registry of live subscriptions
///
/// Dropping (or clearing) the registry removes every listener, cancels every
/// interval and runs every teardown hook exactly once.
#[derive(Default)]
pub struct Subscriptions {
    listeners: Vec<EventListener>,
    intervals: Vec<Interval>,
    teardowns: Vec<Box<dyn FnOnce()>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a passive listener
    pub fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.push(EventListener::new(target, event, handler));
    }

    /// Attach a listener that is allowed to call `prevent_default`
    pub fn listen_active<F>(&mut self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.push(EventListener::new_with_options(
            target,
            event,
            EventListenerOptions::enable_prevent_default(),
            handler,
        ));
    }

    /// Run `tick` every `millis` until torn down
    pub fn interval<F>(&mut self, millis: u32, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.intervals.push(Interval::new(millis, tick));
    }

    /// Register cleanup work (observer disconnect, widget dispose, ...)
    pub fn on_teardown<F>(&mut self, hook: F)
    where
        F: FnOnce() + 'static,
    {
        self.teardowns.push(Box::new(hook));
    }

    /// Number of live subscriptions
    pub fn len(&self) -> usize {
        self.listeners.len() + self.intervals.len() + self.teardowns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Release everything now
    pub fn clear(&mut self) {
        self.listeners.clear();
        self.intervals.clear();
        for hook in self.teardowns.drain(..) {
            hook();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Component-scoped handle to a [`Subscriptions`] registry
#[derive(Clone, Copy)]
pub struct PageEvents {
    subs: StoredValue<Subscriptions, LocalStorage>,
}

impl PageEvents {
    pub fn listen<F>(&self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.subs.update_value(|subs| subs.listen(target, event, handler));
    }

    pub fn listen_active<F>(&self, target: &EventTarget, event: &'static str, handler: F)
    where
        F: FnMut(&Event) + 'static,
    {
        self.subs.update_value(|subs| subs.listen_active(target, event, handler));
    }

    pub fn interval<F>(&self, millis: u32, tick: F)
    where
        F: FnMut() + 'static,
    {
        self.subs.update_value(|subs| subs.interval(millis, tick));
    }

    pub fn on_teardown<F>(&self, hook: F)
    where
        F: FnOnce() + 'static,
    {
        self.subs.update_value(|subs| subs.on_teardown(hook));
    }

    pub fn len(&self) -> usize {
        self.subs.try_with_value(|subs| subs.len()).unwrap_or(0)
    }
}

/// Create a registry tied to the current reactive owner
///
/// Everything registered through the returned handle is released when the
/// owning component is cleaned up.
pub fn use_page_events() -> PageEvents {
    let subs = StoredValue::new_local(Subscriptions::new());
    on_cleanup(move || {
        subs.try_update_value(|subs| subs.clear());
    });
    PageEvents { subs }
}

// ========================
// DOM Helpers
// ========================

/// All elements matching `selector`, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// First element matching `selector`
pub fn query_one(selector: &str) -> Option<Element> {
    web_sys::window()?
        .document()?
        .query_selector(selector)
        .ok()
        .flatten()
}

/// Read `data-<name>`
pub fn data_attr(el: &Element, name: &str) -> Option<String> {
    el.get_attribute(&format!("data-{}", name))
}

/// Show or hide an element via inline `display`
pub fn set_displayed(el: &Element, displayed: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let value = if displayed { "block" } else { "none" };
        let _ = html.style().set_property("display", value);
    }
}
