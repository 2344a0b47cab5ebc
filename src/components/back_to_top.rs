//! Back-to-Top Button Component

use leptos::prelude::*;
use leptos_page_events::use_page_events;

use crate::context::use_app_context;
use crate::enhancers::scroll_to_top;
use crate::scroll::back_to_top_visible;

/// Fixed button shown once the page is scrolled past `scroll.back_to_top_px`
#[component]
pub fn BackToTop() -> impl IntoView {
    let threshold = use_app_context().config().scroll.back_to_top_px;
    let (visible, set_visible) = signal(false);

    // Listener lives as long as this component
    let events = use_page_events();
    if let Some(window) = web_sys::window() {
        events.listen(&window, "scroll", move |_| {
            let scroll_y = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or(0.0);
            let show = back_to_top_visible(scroll_y, threshold);
            if show != visible.get_untracked() {
                set_visible.set(show);
            }
        });
    }

    let style = move || {
        format!(
            "z-index: 1000; display: {};",
            if visible.get() { "block" } else { "none" }
        )
    };

    view! {
        <button
            type="button"
            class="btn btn-primary position-fixed bottom-0 end-0 m-3 back-to-top"
            style=style
            data-bs-toggle="tooltip"
            data-bs-placement="top"
            title="Voltar ao topo"
            on:click=move |_| scroll_to_top()
        >
            <i class="fas fa-arrow-up"></i>
        </button>
    }
}
