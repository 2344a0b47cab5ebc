//! Portal Page App
//!
//! Root component mounted into the server-rendered page. Renders the toast
//! stack and back-to-top button, and wires the page's own elements.

use leptos::prelude::*;
use leptos_page_events::use_page_events;
use log::info;

use crate::components::{BackToTop, ToastHost};
use crate::config::PortalConfig;
use crate::context::AppContext;
use crate::{enhancers, favorite, scroll, share};

#[component]
pub fn App(config: PortalConfig) -> impl IntoView {
    // One context per page load, shared by every handler
    let ctx = AppContext::new(config);
    provide_context(ctx);

    let events = use_page_events();

    // Bind once after mount, so rendered children (tooltip on BackToTop) are in the DOM
    Effect::new(move |_| {
        favorite::bind_favorite_buttons(ctx, events);
        share::bind_share_buttons(ctx, events);
        scroll::bind_infinite_scroll(ctx, events);
        enhancers::bind_all(ctx, events);
        info!("{} carregado com sucesso! ({} subscriptions)", ctx.config().site_name, events.len());
    });

    view! {
        <ToastHost />
        <BackToTop />
    }
}
