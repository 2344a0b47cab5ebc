//! Search form feedback

use leptos_page_events::{query_one, PageEvents};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::context::AppContext;
use crate::models::Severity;

/// Toast text for a submitted query; blank queries say nothing
pub fn search_message(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| format!("Buscando por: {}", query))
}

pub fn bind_search_form(ctx: AppContext, events: PageEvents) {
    let Some(form) = query_one("#search-form") else {
        return;
    };
    let target = form.clone();
    events.listen_active(&form, "submit", move |ev| {
        ev.prevent_default();
        let value = match target.query_selector(r#"input[name="q"]"#) {
            Ok(Some(input)) => input
                .dyn_into::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default(),
            _ => String::new(),
        };
        if let Some(message) = search_message(&value) {
            ctx.notifier.notify(message, Severity::Info);
        }
    });
}
