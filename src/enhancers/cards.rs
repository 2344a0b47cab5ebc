//! Card Animation & Navigation Highlight

use leptos_page_events::query_all;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Stagger between consecutive card animations, in seconds
const CARD_STAGGER_S: f64 = 0.1;

/// `animation-delay` for the card at `index`
pub fn animation_delay(index: usize) -> String {
    let seconds = (index as f64 * CARD_STAGGER_S * 10.0).round() / 10.0;
    format!("{}s", seconds)
}

/// Stagger the fade-in of `.news-card` elements
pub fn animate_cards() {
    for (index, card) in query_all(".news-card").into_iter().enumerate() {
        if let Some(html) = card.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("animation-delay", &animation_delay(index));
        }
        let _ = card.class_list().add_1("fade-in-up");
    }
}

pub fn is_current_link(href: Option<&str>, pathname: &str) -> bool {
    href == Some(pathname)
}

/// Add `active` to the navbar link for the current path
pub fn mark_active_nav_link() {
    let Some(pathname) = web_sys::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };
    for link in query_all(".navbar-nav .nav-link") {
        if is_current_link(link.get_attribute("href").as_deref(), &pathname) {
            let _ = link.class_list().add_1("active");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animation_delay() {
        assert_eq!(animation_delay(0), "0s");
        assert_eq!(animation_delay(1), "0.1s");
        assert_eq!(animation_delay(3), "0.3s");
        assert_eq!(animation_delay(10), "1s");
        assert_eq!(animation_delay(12), "1.2s");
    }

    #[test]
    fn test_is_current_link() {
        assert!(is_current_link(Some("/noticias/"), "/noticias/"));
        assert!(!is_current_link(Some("/noticias"), "/noticias/"));
        assert!(!is_current_link(None, "/"));
    }
}
