//! Application Context
//!
//! Page-scoped state handle provided via Leptos Context API and passed into
//! every event handler.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use log::debug;

use crate::config::PortalConfig;
use crate::models::{Severity, ToastId};
use crate::store::{self, AppStore, PageState};
use crate::toast::ToastSchedule;

/// Toast front door
#[derive(Clone, Copy)]
pub struct Notifier {
    store: AppStore,
    schedule: ToastSchedule,
}

impl Notifier {
    pub fn new(store: AppStore, schedule: ToastSchedule) -> Self {
        Self { store, schedule }
    }

    /// Show a transient toast; it removes itself at `schedule.remove_at`
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Option<ToastId> {
        let message = message.into();
        debug!("{} toast for {} ms: {}", severity.as_str(), self.schedule.remove_at, message);
        let id = store::store_push_toast(&self.store, message, severity)?;

        let this = *self;
        Timeout::new(self.schedule.show_at, move || {
            store::store_show_toast(&this.store, id);
        })
        .forget();

        Timeout::new(self.schedule.exit_at, move || {
            if store::store_begin_toast_exit(&this.store, id) {
                Timeout::new(this.schedule.exit_ms(), move || {
                    store::store_remove_toast(&this.store, id);
                })
                .forget();
            }
        })
        .forget();

        Some(id)
    }

    /// Remove immediately (close button); `false` if already gone
    pub fn dismiss(&self, id: ToastId) -> bool {
        store::store_remove_toast(&self.store, id)
    }
}

/// App-wide handles, created once per page load
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    pub notifier: Notifier,
    config: StoredValue<PortalConfig>,
}

impl AppContext {
    pub fn new(config: PortalConfig) -> Self {
        let store = AppStore::new(PageState::new(config.toast.max_visible));
        Self {
            store,
            notifier: Notifier::new(store, ToastSchedule::from_config(&config.toast)),
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> PortalConfig {
        self.config.get_value()
    }

    pub fn seed_favorite(&self, id: &str, favorited: bool) {
        store::store_seed_favorite(&self.store, id, favorited);
    }

    pub fn toggle_favorite(&self, id: &str) -> bool {
        store::store_toggle_favorite(&self.store, id)
    }

    pub fn begin_load(&self) -> Option<u32> {
        store::store_begin_load(&self.store)
    }

    pub fn finish_load(&self) {
        store::store_finish_load(&self.store);
    }

    pub fn is_loading(&self) -> bool {
        store::store_is_loading(&self.store)
    }
}

/// Get the context provided by [`crate::app::App`]
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
