//! UI Components
//!
//! Elements the page scripts used to create by hand, now rendered by Leptos.

mod back_to_top;
mod toast_host;

pub use back_to_top::BackToTop;
pub use toast_host::ToastHost;
