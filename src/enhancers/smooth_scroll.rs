//! Smooth scrolling for in-page anchors

use leptos_page_events::{query_all, query_one, PageEvents};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

/// Selector for an in-page anchor; a bare `#` points nowhere
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

pub fn bind_smooth_scroll(events: PageEvents) {
    for link in query_all(r##"a[href^="#"]"##) {
        let anchor = link.clone();
        events.listen_active(&link, "click", move |ev| {
            ev.prevent_default();
            let href = anchor.get_attribute("href").unwrap_or_default();
            if let Some(target) = anchor_selector(&href).and_then(query_one) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

/// Smooth scroll to the top of the page
pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_selector() {
        assert_eq!(anchor_selector("#comentarios"), Some("#comentarios"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/noticias/#top"), None);
    }
}
