//! Toast Host Component
//!
//! Fixed top-right stack rendering every toast in the page store.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::ToastPhase;
use crate::store::{store_toast_phase, store_toasts};
use crate::toast::toast_class;

/// Toast stack
///
/// Each toast slides in once the notifier marks it visible and carries a
/// close button that removes it immediately.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || store_toasts(&store)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let severity = toast.severity;
                    // Gone from the store means the element is about to unmount
                    let class = move || {
                        let phase = store_toast_phase(&store, id).unwrap_or(ToastPhase::Leaving);
                        toast_class(severity, phase)
                    };
                    view! {
                        <div class=class role="alert">
                            <div class="toast-content">
                                <i class=format!("fas fa-{} me-2", severity.icon())></i>
                                <span>{toast.message}</span>
                                <button
                                    type="button"
                                    class="toast-close"
                                    aria-label="Fechar"
                                    on:click=move |_| {
                                        ctx.notifier.dismiss(id);
                                    }
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
