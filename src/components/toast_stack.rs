//! Toast Stack Component
//!
//! Transient notifications in the corner; each toast auto-dismisses
//! after a few seconds or on click.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use crate::models::Severity;
use crate::store::{store_dismiss_toast, use_app_store, AppStateStoreFields};

const TOAST_MS: u32 = 4000;

/// Notification stack overlay
#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.severity {
                        Severity::Info => "toast info",
                        Severity::Success => "toast success",
                        Severity::Error => "toast error",
                    };
                    Timeout::new(TOAST_MS, move || {
                        store_dismiss_toast(&store, id);
                    })
                    .forget();

                    view! {
                        <div class=class on:click=move |_| store_dismiss_toast(&store, id)>
                            <span class="toast-title">{toast.title.clone()}</span>
                            <span class="toast-description">{toast.description.clone()}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
