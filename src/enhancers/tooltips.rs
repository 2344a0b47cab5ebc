//! Bootstrap Tooltips
//!
//! `new bootstrap.Tooltip(el)` for each `[data-bs-toggle="tooltip"]`, disposed
//! on teardown. Pages without Bootstrap are left alone.

use js_sys::{Array, Function, Reflect};
use leptos_page_events::{query_all, PageEvents};
use log::debug;
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{UiError, UiResult};

fn tooltip_constructor() -> UiResult<Function> {
    let window = web_sys::window().ok_or(UiError::Unavailable("window"))?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() {
        return Err(UiError::Unavailable("bootstrap"));
    }
    Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))?
        .dyn_into::<Function>()
        .map_err(|_| UiError::Unavailable("bootstrap.Tooltip"))
}

fn dispose(instance: &JsValue) {
    if let Ok(dispose) = Reflect::get(instance, &JsValue::from_str("dispose")) {
        if let Ok(dispose) = dispose.dyn_into::<Function>() {
            let _ = dispose.call0(instance);
        }
    }
}

pub fn init_tooltips(events: PageEvents) {
    let triggers = query_all(r#"[data-bs-toggle="tooltip"]"#);
    if triggers.is_empty() {
        return;
    }
    let constructor = match tooltip_constructor() {
        Ok(constructor) => constructor,
        Err(e) => {
            debug!("Tooltips skipped: {}", e);
            return;
        }
    };

    let instances: Vec<JsValue> = triggers
        .iter()
        .filter_map(|el| Reflect::construct(&constructor, &Array::of1(el)).ok())
        .collect();
    debug!("Initialized {} tooltips", instances.len());

    events.on_teardown(move || instances.iter().for_each(dispose));
}
