//! Passive Enhancers
//!
//! Behaviors attached to the server-rendered page, organized by concern.
//! Each `bind_*` skips silently when its target elements are absent.

mod cards;
mod dates;
mod lazy_images;
mod search;
mod smooth_scroll;
mod tooltips;
mod view_counter;

use leptos_page_events::PageEvents;

use crate::context::AppContext;

// Re-export all public items
pub use cards::*;
pub use dates::*;
pub use lazy_images::*;
pub use search::*;
pub use smooth_scroll::*;
pub use tooltips::*;
pub use view_counter::*;

/// Wire every enhancer onto the current document
pub fn bind_all(ctx: AppContext, events: PageEvents) {
    animate_cards();
    mark_active_nav_link();
    format_dates();
    bind_smooth_scroll(events);
    bind_lazy_images(events);
    bind_search_form(ctx, events);
    bind_view_counter(ctx, events);
    init_tooltips(events);
}
