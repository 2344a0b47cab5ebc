//! Favorite Toggle
//!
//! Per-article bookmark state. The state lives in the page store; the button's
//! icon, label and class are a projection of it.

use std::collections::HashMap;

use leptos_page_events::{data_attr, query_all, PageEvents};
use log::debug;
use web_sys::Element;

use crate::context::AppContext;
use crate::models::Severity;

pub const FAVORITED_CLASS: &str = "favorited";

/// Favorite flags keyed by `data-noticia-id`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    states: HashMap<String, bool>,
}

impl Favorites {
    /// Record the server-rendered state; ignored once the id is known
    pub fn seed(&mut self, id: &str, favorited: bool) {
        self.states.entry(id.to_string()).or_insert(favorited);
    }

    /// Flip and return the new state
    pub fn toggle(&mut self, id: &str) -> bool {
        let state = self.states.entry(id.to_string()).or_insert(false);
        *state = !*state;
        *state
    }

}

/// Visual form of a favorite state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FavoriteView {
    pub favorited: bool,
    pub icon_on: &'static str,
    pub icon_off: &'static str,
    pub label: &'static str,
    pub message: &'static str,
    pub severity: Severity,
}

impl FavoriteView {
    pub fn for_state(favorited: bool) -> Self {
        if favorited {
            Self {
                favorited,
                icon_on: "fas",
                icon_off: "far",
                label: "Favoritado",
                message: "Notícia adicionada aos favoritos!",
                severity: Severity::Success,
            }
        } else {
            Self {
                favorited,
                icon_on: "far",
                icon_off: "fas",
                label: "Favoritar",
                message: "Notícia removida dos favoritos!",
                severity: Severity::Info,
            }
        }
    }
}

/// Selector matching every button bound to one article
pub fn buttons_for(id: &str) -> String {
    let escaped = id.replace('\\', "\\\\").replace('"', "\\\"");
    format!(".favorite-btn[data-noticia-id=\"{}\"]", escaped)
}

/// Current state as rendered by the server
pub fn read_dom_state(button: &Element) -> bool {
    if button.class_list().contains(FAVORITED_CLASS) {
        return true;
    }
    matches!(button.query_selector("i"), Ok(Some(icon)) if icon.class_list().contains("fas"))
}

pub fn apply_to_dom(button: &Element, view: &FavoriteView) {
    let _ = button.class_list().toggle_with_force(FAVORITED_CLASS, view.favorited);
    if let Ok(Some(icon)) = button.query_selector("i") {
        let _ = icon.class_list().remove_1(view.icon_off);
        let _ = icon.class_list().add_1(view.icon_on);
    }
    if let Ok(Some(span)) = button.query_selector("span") {
        span.set_text_content(Some(view.label));
    }
}

/// Wire every `.favorite-btn[data-noticia-id]` on the page
pub fn bind_favorite_buttons(ctx: AppContext, events: PageEvents) {
    let buttons = query_all(".favorite-btn");
    for button in buttons {
        let Some(id) = data_attr(&button, "noticia-id") else {
            debug!("Favorite button without data-noticia-id skipped");
            continue;
        };
        ctx.seed_favorite(&id, read_dom_state(&button));

        events.listen_active(&button, "click", move |ev| {
            ev.prevent_default();
            let favorited = ctx.toggle_favorite(&id);
            let view = FavoriteView::for_state(favorited);
            // The same article can appear more than once on a page
            for twin in query_all(&buttons_for(&id)) {
                apply_to_dom(&twin, &view);
            }
            debug!("Noticia {} favorited={}", id, favorited);
            ctx.notifier.notify(view.message, view.severity);
        });
    }
}
