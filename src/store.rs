//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per page load; nothing here outlives the page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::favorite::Favorites;
use crate::models::{Severity, Toast, ToastId, ToastPhase};
use crate::scroll::ScrollLoader;
use crate::toast::ToastStack;

/// Transient UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Toasts currently in the tree
    pub toasts: ToastStack,
    /// Favorite flags by `data-noticia-id`
    pub favorites: Favorites,
    /// Infinite scroll page counter and guard
    pub loader: ScrollLoader,
}

impl PageState {
    pub fn new(max_visible_toasts: usize) -> Self {
        Self {
            toasts: ToastStack::new(max_visible_toasts),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<PageState>;

// ========================
// Store Helper Functions
// ========================

// Timer callbacks may fire after the store is gone, hence `try_update`.

pub fn store_push_toast(store: &AppStore, message: String, severity: Severity) -> Option<ToastId> {
    store.toasts().try_update(|stack| stack.push(message, severity))
}

pub fn store_show_toast(store: &AppStore, id: ToastId) -> bool {
    store.toasts().try_update(|stack| stack.show(id)).unwrap_or(false)
}

pub fn store_begin_toast_exit(store: &AppStore, id: ToastId) -> bool {
    store.toasts().try_update(|stack| stack.begin_exit(id)).unwrap_or(false)
}

pub fn store_remove_toast(store: &AppStore, id: ToastId) -> bool {
    store.toasts().try_update(|stack| stack.remove(id)).unwrap_or(false)
}

/// Tracked: current toasts
pub fn store_toasts(store: &AppStore) -> Vec<Toast> {
    store.toasts().with(|stack| stack.toasts().to_vec())
}

/// Tracked: phase of one toast
pub fn store_toast_phase(store: &AppStore, id: ToastId) -> Option<ToastPhase> {
    store.toasts().with(|stack| stack.phase(id))
}

pub fn store_seed_favorite(store: &AppStore, id: &str, favorited: bool) {
    store.favorites().write().seed(id, favorited);
}

pub fn store_toggle_favorite(store: &AppStore, id: &str) -> bool {
    store.favorites().write().toggle(id)
}

pub fn store_begin_load(store: &AppStore) -> Option<u32> {
    store.loader().try_update(|loader| loader.try_begin()).flatten()
}

pub fn store_finish_load(store: &AppStore) {
    store.loader().try_update(|loader| loader.finish());
}

pub fn store_is_loading(store: &AppStore) -> bool {
    store.loader().with_untracked(|loader| loader.is_loading())
}
